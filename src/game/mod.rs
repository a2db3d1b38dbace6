//! The matching engine and its scoring policy.
//!
//! ## Key Types
//!
//! - `MatchingGame<C>`: deck, match detection, the one-and-only face-up
//!   invariant
//! - `Scoreboard`: score value, seen-set, bonus/penalty constants
//!
//! The engine is content-agnostic: it matches on content equality and
//! never interprets what the content means.

pub mod engine;
pub mod score;

pub use engine::MatchingGame;
pub use score::{Scoreboard, MATCH_BONUS_BASE, MATCH_BONUS_PER_SECOND, REPEAT_MISS_PENALTY};
