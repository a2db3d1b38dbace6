//! # concentration
//!
//! A content-agnostic matching-pairs card game engine.
//!
//! ## Design Principles
//!
//! 1. **Content-Agnostic**: The engine matches on content equality and
//!    never interprets what a card shows. Themes supply the content.
//!
//! 2. **Pure State + Transitions**: No storage, no screen, no background
//!    tasks. Rendering layers forward intents and re-read snapshots.
//!
//! 3. **Never Crash The Game**: Unknown card ids, re-taps of settled
//!    cards, and out-of-range theme indices are tolerated silently.
//!    Only construction-time wiring errors fail, and only in debug.
//!
//! 4. **Injected Determinism**: Randomness (`GameRng`) and time
//!    (`GameClock`) are passed in, so tests replay exact sequences.
//!
//! ## Modules
//!
//! - `core`: Card identity, deterministic RNG, time source
//! - `game`: The matching engine and its scoring policy
//! - `theme`: Token sets and deal parameters
//! - `session`: Controller gluing a theme to an engine, change events

pub mod core;
pub mod game;
pub mod session;
pub mod theme;

// Re-export commonly used types
pub use crate::core::{
    Card, CardId, PairHalf,
    GameClock,
    GameRng, GameRngState,
};

pub use crate::game::{
    MatchingGame, Scoreboard,
    MATCH_BONUS_BASE, MATCH_BONUS_PER_SECOND, REPEAT_MISS_PENALTY,
};

pub use crate::theme::{builtin_themes, Theme, ThemeId};

pub use crate::session::{GameSession, SessionEvent, FALLBACK_TOKEN};
