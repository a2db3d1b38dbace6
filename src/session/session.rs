//! Session controller: bridges theme selection to engine construction.
//!
//! A session owns exactly one theme and one engine at a time. User intents
//! (`choose_card`, `new_game`, `shuffle_cards`, `set_theme`) run to
//! completion synchronously; reads are pure projections of engine state,
//! recomputed on every call and never cached.

use std::time::Duration;

use log::debug;

use crate::core::{Card, CardId, GameClock, GameRng};
use crate::game::MatchingGame;
use crate::theme::Theme;

use super::event::SessionEvent;

/// Token dealt for a pair index outside the theme's token list.
///
/// Unreachable when the theme's pair-count clamp holds; the factory
/// guards it anyway rather than crashing the game.
pub const FALLBACK_TOKEN: &str = "⁉";

/// One running game plus its theme and randomness.
///
/// Cross-component communication is by value: callers get snapshots of
/// cards and score, never mutable aliases into the engine.
pub struct GameSession {
    theme: Theme,
    game: MatchingGame<String>,
    rng: GameRng,
    observers: Vec<Box<dyn Fn(&SessionEvent)>>,
}

impl GameSession {
    /// Start a session on the system clock with an entropy-seeded RNG.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self::with_rng_and_clock(theme, GameRng::from_entropy(), GameClock::system())
    }

    /// Start a session with explicit randomness and time sources.
    ///
    /// Seeded RNG plus a manual clock makes every transition
    /// deterministic.
    #[must_use]
    pub fn with_rng_and_clock(theme: Theme, rng: GameRng, clock: GameClock) -> Self {
        let mut session = Self {
            // Placeholder deck; new_game builds the real one from the theme.
            game: MatchingGame::with_clock(2, clock, |_| String::new()),
            theme,
            rng,
            observers: Vec::new(),
        };
        session.new_game();
        session
    }

    /// Register a change observer.
    ///
    /// Observers are called after every processed intent, in subscription
    /// order, on the caller's thread.
    pub fn subscribe(&mut self, observer: impl Fn(&SessionEvent) + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Intents ===

    /// Rebuild the engine from the active theme.
    ///
    /// Themes without a fixed pair count reroll it uniformly within the
    /// theme's legal range first. The new deck is shuffled and the score
    /// starts at zero.
    pub fn new_game(&mut self) {
        if !self.theme.shows_fixed_number_of_cards() {
            let range = self.theme.pair_count_range();
            let pairs = self.rng.gen_range_usize(*range.start()..*range.end() + 1);
            self.theme.change_number_of_pairs(pairs);
        }

        let clock = self.game.clock_mut().clone();
        let theme = &self.theme;
        let mut game = MatchingGame::with_clock(theme.number_of_pairs(), clock, |pair| {
            theme
                .token(pair)
                .map_or_else(|| FALLBACK_TOKEN.to_owned(), str::to_owned)
        });
        game.shuffle(&mut self.rng);
        game.reset_score();

        debug!(
            "new game: theme {} ({}), {} pairs",
            self.theme.id(),
            self.theme.name(),
            game.number_of_pairs()
        );

        self.game = game;
        self.emit(&SessionEvent::NewGame);
    }

    /// Forward a choose intent to the engine.
    pub fn choose_card(&mut self, id: CardId) {
        self.game.choose(id);
        self.emit(&SessionEvent::CardChosen(id));
    }

    /// Permute draw order.
    pub fn shuffle_cards(&mut self) {
        self.game.shuffle(&mut self.rng);
        self.emit(&SessionEvent::DeckShuffled);
    }

    /// Switch the active theme and immediately start a new game from it.
    pub fn set_theme(&mut self, theme: Theme) {
        debug!("switching theme to {} ({})", theme.id(), theme.name());
        self.theme = theme;
        self.emit(&SessionEvent::ThemeChanged(self.theme.id()));
        self.new_game();
    }

    // === Snapshots ===

    /// Deck snapshot in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card<String>] {
        self.game.cards()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.game.score()
    }

    /// Whole seconds since the last match/mismatch resolution - the
    /// display timer, sampled at read time.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.game.elapsed_seconds()
    }

    /// Have all pairs been matched?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.game.is_complete()
    }

    /// The active theme.
    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Advance a manual clock (no-op on the system clock). Test hook, the
    /// time-side twin of seeding the RNG.
    pub fn advance_clock(&mut self, by: Duration) {
        self.game.clock_mut().advance(by);
    }

    fn emit(&self, event: &SessionEvent) {
        for observer in &self.observers {
            observer(event);
        }
    }
}

impl std::fmt::Debug for GameSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameSession")
            .field("theme", &self.theme)
            .field("game", &self.game)
            .field("observers", &self.observers.len())
            .finish()
    }
}
