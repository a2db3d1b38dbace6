//! Theme system: token sets, pair-count policy, built-in themes.
//!
//! ## Key Types
//!
//! - `ThemeId`: stable identifier, round-tripped by the UI's persistence
//! - `Theme`: name, ordered unique tokens, clamped pair count, display
//!   color, fixed-vs-rerolled pair-count policy
//!
//! Themes are created by configuration or storage and mutated only through
//! their own setters - never by the engine.

pub mod theme;

pub use theme::{builtin_themes, Theme, ThemeId};
