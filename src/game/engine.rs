//! The matching-pairs engine: deck, match detection, scoring.
//!
//! `MatchingGame` owns its cards exclusively and mutates them only through
//! `choose` and `shuffle`. Everything a rendering layer needs is exposed as
//! read-only snapshots.
//!
//! ## The One-And-Only Face-Up Invariant
//!
//! Between operations, at most one unmatched card is face-up. Choosing a
//! fresh card while another is revealed resolves the pair - match or miss -
//! and in either case the deck is back to a single pending card (or none)
//! when `choose` returns. Matched cards stay face-up forever and do not
//! count against the invariant.
//!
//! ## Error Tolerance
//!
//! Runtime inputs never fail loudly: unknown ids and re-taps of settled
//! cards are silent no-ops. The only hard checks are construction-time
//! wiring invariants.

use std::time::Duration;

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::core::{Card, CardId, GameClock, GameRng, PairHalf};

use super::score::Scoreboard;

/// A game of matching pairs over content type `C`.
///
/// `C` is opaque: two cards match when their contents compare equal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchingGame<C> {
    cards: Vec<Card<C>>,
    scoreboard: Scoreboard,
    clock: GameClock,
    /// Clock offset at the last match/mismatch resolution.
    anchor: Duration,
}

impl<C> MatchingGame<C> {
    /// Build a deck of `2 × number_of_pairs` cards on the system clock.
    ///
    /// The content factory maps each pair index in `[0, pairs)` to the
    /// content both halves of that pair will carry. Pair counts below 2
    /// are clamped up to 2.
    #[must_use]
    pub fn new(number_of_pairs: usize, content: impl FnMut(usize) -> C) -> Self
    where
        C: Clone,
    {
        Self::with_clock(number_of_pairs, GameClock::system(), content)
    }

    /// Build a deck with an explicit time source.
    #[must_use]
    pub fn with_clock(
        number_of_pairs: usize,
        clock: GameClock,
        mut content: impl FnMut(usize) -> C,
    ) -> Self
    where
        C: Clone,
    {
        let pairs = number_of_pairs.max(2);

        let mut cards = Vec::with_capacity(2 * pairs);
        for pair in 0..pairs {
            let value = content(pair);
            cards.push(Card::new(CardId::new(pair as u32, PairHalf::A), value.clone()));
            cards.push(Card::new(CardId::new(pair as u32, PairHalf::B), value));
        }

        // A short deck here is a wiring bug in the factory, not a
        // recoverable runtime condition.
        debug_assert_eq!(cards.len(), 2 * pairs);

        let anchor = clock.now();
        Self {
            cards,
            scoreboard: Scoreboard::new(),
            clock,
            anchor,
        }
    }

    /// Snapshot of the deck in draw order.
    #[must_use]
    pub fn cards(&self) -> &[Card<C>] {
        &self.cards
    }

    /// Number of pairs in the deck.
    #[must_use]
    pub fn number_of_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.scoreboard.score()
    }

    /// Access to the scoring record (seen-set queries).
    #[must_use]
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Whole seconds since the last match/mismatch resolution.
    #[must_use]
    pub fn elapsed_seconds(&self) -> u64 {
        self.clock.now().saturating_sub(self.anchor).as_secs()
    }

    /// Have all pairs been matched?
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cards.iter().all(|card| card.is_matched)
    }

    /// The engine's time source. Mutable access is for advancing a manual
    /// clock in tests.
    #[must_use]
    pub fn clock_mut(&mut self) -> &mut GameClock {
        &mut self.clock
    }

    /// Randomly permute draw order.
    ///
    /// Ids and flags are untouched: this is purely a display-order
    /// operation.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.cards);
    }

    /// Choose a card - the core state transition.
    ///
    /// Unknown ids and cards that are already face-up or matched are
    /// ignored. Otherwise:
    ///
    /// - with no card pending, the chosen card becomes the one-and-only
    ///   face-up card;
    /// - with a pending card, the pair resolves: equal content matches
    ///   both and awards the time bonus; unequal content remembers both
    ///   losers (penalizing a re-chosen one) and leaves the chosen card
    ///   as the sole face-up card. Either way the bonus timer restarts.
    pub fn choose(&mut self, id: CardId)
    where
        C: PartialEq,
    {
        let Some(chosen) = self.cards.iter().position(|card| card.id == id) else {
            debug!("choose: no card with id {id}");
            return;
        };

        if self.cards[chosen].is_face_up || self.cards[chosen].is_matched {
            trace!("choose: {id} is already settled");
            return;
        }

        if let Some(revealed) = self.sole_face_up() {
            if self.cards[chosen].content == self.cards[revealed].content {
                self.cards[chosen].is_matched = true;
                self.cards[chosen].is_face_up = true;
                self.cards[revealed].is_matched = true;

                let elapsed = self.elapsed_seconds();
                let bonus = self.scoreboard.award_match(elapsed);
                trace!("choose: {id} matched {} for {bonus}", self.cards[revealed].id);
            } else {
                let revealed_id = self.cards[revealed].id;
                self.scoreboard.record_miss(id);
                self.scoreboard.mark_seen(revealed_id);
                self.set_sole_face_up(chosen);

                trace!("choose: {id} mismatched {revealed_id}");
            }
            self.anchor = self.clock.now();
        } else {
            self.set_sole_face_up(chosen);
        }
    }

    /// Adjust the score directly.
    pub fn increment_score(&mut self, by: i64) {
        self.scoreboard.increment(by);
    }

    /// Zero the score. Seen-set and bonus timer are untouched.
    pub fn reset_score(&mut self) {
        self.scoreboard.reset();
    }

    /// Index of the single revealed card, if exactly one card is revealed.
    fn sole_face_up(&self) -> Option<usize> {
        let mut revealed = self
            .cards
            .iter()
            .enumerate()
            .filter(|(_, card)| card.is_revealed());

        match (revealed.next(), revealed.next()) {
            (Some((index, _)), None) => Some(index),
            _ => None,
        }
    }

    /// Make `index` the one-and-only face-up card.
    ///
    /// Every other unmatched card is turned face-down; matched cards keep
    /// their face-up flag.
    fn set_sole_face_up(&mut self, index: usize) {
        for (i, card) in self.cards.iter_mut().enumerate() {
            if !card.is_matched {
                card.is_face_up = i == index;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Deck of N pairs on a manual clock, contents "0", "1", ...
    fn game(pairs: usize) -> MatchingGame<String> {
        MatchingGame::with_clock(pairs, GameClock::manual(), |pair| pair.to_string())
    }

    fn id(pair: u32, half: PairHalf) -> CardId {
        CardId::new(pair, half)
    }

    fn revealed_count(game: &MatchingGame<String>) -> usize {
        game.cards().iter().filter(|c| c.is_revealed()).count()
    }

    #[test]
    fn test_construction() {
        let game = game(3);

        assert_eq!(game.cards().len(), 6);
        assert_eq!(game.number_of_pairs(), 3);
        assert_eq!(game.score(), 0);
        assert!(game.cards().iter().all(Card::is_fresh));

        // Both halves of a pair carry equal content, adjacent at build.
        assert_eq!(game.cards()[0].content, game.cards()[1].content);
        assert_eq!(game.cards()[0].id, id(0, PairHalf::A));
        assert_eq!(game.cards()[1].id, id(0, PairHalf::B));
    }

    #[test]
    fn test_pair_count_clamped_up_to_two() {
        assert_eq!(game(0).number_of_pairs(), 2);
        assert_eq!(game(1).number_of_pairs(), 2);
        assert_eq!(game(2).number_of_pairs(), 2);
    }

    #[test]
    fn test_unknown_id_is_ignored() {
        let mut game = game(2);
        game.choose(id(99, PairHalf::A));

        assert!(game.cards().iter().all(Card::is_fresh));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_first_choice_becomes_sole_face_up() {
        let mut game = game(2);
        game.choose(id(0, PairHalf::A));

        assert!(game.cards()[0].is_revealed());
        assert_eq!(revealed_count(&game), 1);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_retap_is_idempotent() {
        let mut game = game(2);
        game.choose(id(0, PairHalf::A));
        let snapshot = game.cards().to_vec();

        game.choose(id(0, PairHalf::A));

        assert_eq!(game.cards(), &snapshot[..]);
        assert_eq!(game.score(), 0);
        assert_eq!(game.scoreboard().seen_count(), 0);
    }

    #[test]
    fn test_match_marks_both_and_scores() {
        let mut game = game(2);
        game.choose(id(0, PairHalf::A));
        game.choose(id(0, PairHalf::B));

        assert!(game.cards()[0].is_matched);
        assert!(game.cards()[1].is_matched);
        assert_eq!(game.score(), 200);
        assert_eq!(revealed_count(&game), 0);
    }

    #[test]
    fn test_match_bonus_includes_time() {
        let mut game = game(2);
        game.choose(id(0, PairHalf::A));
        game.clock_mut().advance(Duration::from_secs(4));
        game.choose(id(0, PairHalf::B));

        assert_eq!(game.score(), 200 + 20 * 4);
    }

    #[test]
    fn test_resolution_resets_bonus_timer() {
        let mut game = game(2);
        game.clock_mut().advance(Duration::from_secs(30));

        game.choose(id(0, PairHalf::A));
        game.clock_mut().advance(Duration::from_secs(2));
        // Mismatch: resolves and re-anchors the timer.
        game.choose(id(1, PairHalf::A));
        assert_eq!(game.elapsed_seconds(), 0);

        game.clock_mut().advance(Duration::from_secs(3));
        game.choose(id(1, PairHalf::B));

        // Bonus counts from the mismatch, not from deck creation.
        assert_eq!(game.score(), 200 + 20 * 3);
    }

    #[test]
    fn test_mismatch_leaves_chosen_as_sole_face_up() {
        let mut game = game(2);
        game.choose(id(0, PairHalf::A));
        game.choose(id(1, PairHalf::A));

        assert!(game.cards()[2].is_revealed());
        assert_eq!(revealed_count(&game), 1);
        assert!(!game.cards()[0].is_face_up);
    }

    #[test]
    fn test_matched_cards_stay_face_up() {
        let mut game = game(3);
        game.choose(id(0, PairHalf::A));
        game.choose(id(0, PairHalf::B));

        // A later reveal must not flip the matched pair back down.
        game.choose(id(1, PairHalf::A));

        assert!(game.cards()[0].is_face_up && game.cards()[0].is_matched);
        assert!(game.cards()[1].is_face_up && game.cards()[1].is_matched);
    }

    #[test]
    fn test_choose_after_match_starts_fresh_reveal() {
        let mut game = game(2);
        game.choose(id(0, PairHalf::A));
        game.choose(id(0, PairHalf::B));
        let score_after_match = game.score();

        game.choose(id(1, PairHalf::A));

        assert!(game.cards()[2].is_revealed());
        assert_eq!(game.score(), score_after_match);
    }

    #[test]
    fn test_is_complete() {
        let mut game = game(2);
        assert!(!game.is_complete());

        game.choose(id(0, PairHalf::A));
        game.choose(id(0, PairHalf::B));
        game.choose(id(1, PairHalf::A));
        game.choose(id(1, PairHalf::B));

        assert!(game.is_complete());
    }

    #[test]
    fn test_shuffle_preserves_cards() {
        let mut game = game(6);
        game.choose(id(0, PairHalf::A));

        let mut before: Vec<_> = game.cards().to_vec();
        let mut rng = GameRng::new(42);
        game.shuffle(&mut rng);
        let mut after: Vec<_> = game.cards().to_vec();

        let key = |c: &Card<String>| (c.id.pair, c.id.half.suffix());
        before.sort_by_key(key);
        after.sort_by_key(key);
        assert_eq!(before, after);
    }

    #[test]
    fn test_increment_and_reset_score() {
        let mut game = game(2);
        game.increment_score(75);
        assert_eq!(game.score(), 75);

        game.reset_score();
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_engine_serde() {
        let mut game = game(2);
        game.choose(id(0, PairHalf::A));

        let json = serde_json::to_string(&game).unwrap();
        let restored: MatchingGame<String> = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.cards(), game.cards());
        assert_eq!(restored.score(), game.score());
    }
}
