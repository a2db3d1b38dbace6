//! Theme model: named token sets that parametrize a game.
//!
//! A theme decides how many pairs a new game deals and what content each
//! pair carries. Themes are plain configuration records: the engine never
//! mutates one, and every mutation goes through an explicit setter.
//!
//! ## Clamping Policy
//!
//! Pair counts are clamped into `[2, tokens.len()]` at construction and
//! pulled back down whenever the token list shrinks below them. This is
//! leniency, not validation: out-of-range requests are corrected, never
//! rejected.

use log::debug;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::GameRng;

/// Unique identifier for a theme.
///
/// Stable across serialization; the UI layer's persistence round-trips it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThemeId(pub u32);

impl ThemeId {
    /// Create a new theme ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for ThemeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Theme({})", self.0)
    }
}

/// A named set of content tokens plus deal parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    id: ThemeId,
    name: String,
    tokens: Vec<String>,
    number_of_pairs: usize,
    color: String,
    shows_fixed_number_of_cards: bool,
}

impl Theme {
    /// Create a theme with a fixed pair count.
    ///
    /// Tokens are de-duplicated preserving first occurrence;
    /// `desired_pairs` is clamped into `[2, tokens.len()]`.
    pub fn new(
        id: ThemeId,
        name: impl Into<String>,
        tokens: impl IntoIterator<Item = impl Into<String>>,
        desired_pairs: usize,
        color: impl Into<String>,
    ) -> Self {
        let mut theme = Self {
            id,
            name: name.into(),
            tokens: tokens.into_iter().map(Into::into).collect(),
            number_of_pairs: 2,
            color: color.into(),
            shows_fixed_number_of_cards: true,
        };
        theme.dedup_tokens();
        theme.number_of_pairs = clamp_pairs(desired_pairs, theme.tokens.len());
        theme
    }

    /// Reroll the pair count randomly on every new game instead of using
    /// the stored value.
    #[must_use]
    pub fn with_random_pair_count(mut self) -> Self {
        self.shows_fixed_number_of_cards = false;
        self
    }

    /// Stable theme identifier.
    #[must_use]
    pub fn id(&self) -> ThemeId {
        self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered, de-duplicated content tokens.
    #[must_use]
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Token for a pair index, if in range.
    #[must_use]
    pub fn token(&self, pair_index: usize) -> Option<&str> {
        self.tokens.get(pair_index).map(String::as_str)
    }

    /// Number of pairs a new game deals (unless rerolled).
    #[must_use]
    pub fn number_of_pairs(&self) -> usize {
        self.number_of_pairs
    }

    /// Display color name.
    #[must_use]
    pub fn color(&self) -> &str {
        &self.color
    }

    /// Is the pair count author-specified and stable? When false, each new
    /// game rerolls it within `pair_count_range()`.
    #[must_use]
    pub fn shows_fixed_number_of_cards(&self) -> bool {
        self.shows_fixed_number_of_cards
    }

    /// Legal pair counts for this theme's token list.
    #[must_use]
    pub fn pair_count_range(&self) -> std::ops::RangeInclusive<usize> {
        2..=self.tokens.len().max(2)
    }

    /// Set the pair count directly.
    ///
    /// This path does not re-clamp: callers are responsible for staying
    /// within `pair_count_range()`. Only the constructor and the
    /// token-mutation paths clamp.
    pub fn change_number_of_pairs(&mut self, to: usize) {
        self.number_of_pairs = to;
    }

    /// Append tokens, de-duplicating afterwards.
    pub fn add_tokens(&mut self, tokens: impl IntoIterator<Item = impl Into<String>>) {
        self.tokens.extend(tokens.into_iter().map(Into::into));
        self.dedup_tokens();
    }

    /// Remove a token. Returns whether it was present.
    ///
    /// If the token list shrinks below the pair count (and stays ≥ 2),
    /// the pair count is pulled down to match.
    pub fn remove_token(&mut self, token: &str) -> bool {
        let before = self.tokens.len();
        self.tokens.retain(|t| t != token);
        let removed = self.tokens.len() != before;
        if removed {
            self.dedup_tokens();
        }
        removed
    }

    /// Randomly permute the token list.
    ///
    /// The pair-index-to-token mapping is re-derived from the permuted
    /// order, so future games deal different pairings.
    pub fn shuffle_tokens(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.tokens);
    }

    /// Order-preserving de-dup, then pull the pair count down if the
    /// token list shrank below it.
    fn dedup_tokens(&mut self) {
        let mut seen: FxHashSet<String> = FxHashSet::default();
        self.tokens.retain(|token| seen.insert(token.clone()));

        if self.number_of_pairs > self.tokens.len() && self.tokens.len() >= 2 {
            debug!(
                "{}: token list shrank to {}, pulling pair count down",
                self.id,
                self.tokens.len()
            );
            self.number_of_pairs = self.tokens.len();
        }
    }
}

/// Clamp a requested pair count into `[2, token_count]`.
fn clamp_pairs(desired: usize, token_count: usize) -> usize {
    if token_count < 2 {
        2
    } else {
        desired.clamp(2, token_count)
    }
}

/// The built-in theme set used when no persisted themes exist.
#[must_use]
pub fn builtin_themes() -> Vec<Theme> {
    vec![
        Theme::new(
            ThemeId::new(0),
            "Halloween",
            ["👻", "🎃", "🕷️", "😈", "💀", "🕸️", "🧙‍♂️", "🙀", "👹", "😱", "☠️", "🍭"],
            12,
            "orange",
        ),
        Theme::new(
            ThemeId::new(1),
            "Animals",
            ["🐶", "🐱", "🐭", "🐹", "🐰", "🐻", "🐼", "🐨", "🐵", "🐿️", "🐦", "🐧"],
            12,
            "green",
        ),
        Theme::new(
            ThemeId::new(2),
            "Ocean",
            ["🐠", "🐟", "🐙", "🐚", "🐦", "🦅", "🐡", "🐌", "🐞", "🦋", "🐊", "🐢"],
            12,
            "blue",
        ),
    ]
}
