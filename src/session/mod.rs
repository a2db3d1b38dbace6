//! Game session: one theme, one engine, user intents, change events.
//!
//! ## Key Types
//!
//! - `GameSession`: the controller that owns an engine and its theme
//! - `SessionEvent`: change notifications for the rendering layer
//!
//! Presentation concerns (rendering, animation, gestures, persistence)
//! live outside the crate; a session only reacts to intents and exposes
//! snapshots.

pub mod event;
pub mod session;

pub use event::SessionEvent;
pub use session::{GameSession, FALLBACK_TOKEN};
