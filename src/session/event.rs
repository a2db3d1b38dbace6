//! Change notifications emitted by a session.
//!
//! The rendering layer subscribes with a callback and re-reads its
//! snapshots when told - an explicit channel instead of implicit
//! framework observation.

use serde::{Deserialize, Serialize};

use crate::core::CardId;
use crate::theme::ThemeId;

/// Something about the session changed; subscribers should re-render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// A fresh engine was built from the active theme.
    NewGame,
    /// A choose intent was processed (including tolerated no-ops).
    CardChosen(CardId),
    /// Draw order was permuted.
    DeckShuffled,
    /// The active theme was switched.
    ThemeChanged(ThemeId),
}
