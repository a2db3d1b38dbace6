//! Scoring policy: match bonuses, repeat-miss penalties, the seen-set.
//!
//! ## The Rules
//!
//! - A match is worth `200 + 20 × elapsed_seconds`, where elapsed time is
//!   measured from the last resolution. The formula is applied as-is: it
//!   has no upper bound and never goes negative.
//! - Both cards of a mismatch are remembered as exposed losers. The first
//!   time a card is *chosen* into a losing match-up is free; choosing it
//!   into a loss again costs a flat `-100` every time. A remembered card
//!   sitting on the revealed side of a later mismatch is not re-penalized.
//!
//! The seen-set is keyed by [`CardId`], which is stable across shuffles,
//! so the one-free-miss rule stays attached to the card the player saw.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::CardId;

/// Base points awarded for any match.
pub const MATCH_BONUS_BASE: i64 = 200;

/// Additional points per whole second elapsed since the last resolution.
pub const MATCH_BONUS_PER_SECOND: i64 = 20;

/// Penalty for choosing a card into a losing match-up it has already
/// lost once before.
pub const REPEAT_MISS_PENALTY: i64 = -100;

/// Score value plus the memory of which cards have lost a mismatch.
///
/// Starts at 0 for each new game. `reset()` zeroes the score only: the
/// seen-set persists, because a fresh session rebuilds the whole engine
/// rather than recycling its scoreboard.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    score: i64,
    seen: FxHashSet<CardId>,
}

impl Scoreboard {
    /// Create a scoreboard with score 0 and an empty seen-set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Has this card already lost a mismatch?
    #[must_use]
    pub fn has_seen(&self, id: CardId) -> bool {
        self.seen.contains(&id)
    }

    /// Number of cards recorded as having lost a mismatch.
    #[must_use]
    pub fn seen_count(&self) -> usize {
        self.seen.len()
    }

    /// Award a match resolved `elapsed_seconds` after the last anchor.
    ///
    /// Returns the points awarded.
    pub fn award_match(&mut self, elapsed_seconds: u64) -> i64 {
        let bonus = MATCH_BONUS_BASE + MATCH_BONUS_PER_SECOND * elapsed_seconds as i64;
        self.score += bonus;
        bonus
    }

    /// Record the chosen card of a losing match-up.
    ///
    /// First loss is free and remembered; choosing a remembered card into
    /// a loss again is penalized every time. Returns the score delta
    /// (0 or [`REPEAT_MISS_PENALTY`]).
    pub fn record_miss(&mut self, id: CardId) -> i64 {
        if self.seen.insert(id) {
            0
        } else {
            self.score += REPEAT_MISS_PENALTY;
            REPEAT_MISS_PENALTY
        }
    }

    /// Remember a card exposed on the revealed side of a mismatch.
    ///
    /// Never penalizes: the penalty is for re-choosing a known loser,
    /// not for sitting face-up while someone else misses.
    pub fn mark_seen(&mut self, id: CardId) {
        self.seen.insert(id);
    }

    /// Adjust the score directly.
    pub fn increment(&mut self, by: i64) {
        self.score += by;
    }

    /// Zero the score. The seen-set is untouched.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}
