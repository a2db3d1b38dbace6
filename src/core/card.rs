//! Card identity and per-card runtime state.
//!
//! A card's identity is its pair index plus an `a`/`b` half. Identity is
//! assigned at deck construction and never changes afterwards - shuffling
//! reorders cards, it does not re-derive who they are.
//!
//! ## Card Lifecycle
//!
//! ```text
//! fresh ──choose──▶ revealed ──match──▶ matched (terminal)
//!   ▲                  │
//!   └───other choose───┘
//! ```
//!
//! `matched` is absorbing: no transition ever leaves it, and the engine
//! never forces a matched card's face-up flag back to false.

use serde::{Deserialize, Serialize};

/// Which half of a pair a card is.
///
/// The two cards of a pair carry equal content; the half disambiguates
/// their identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PairHalf {
    /// First card of the pair.
    A,
    /// Second card of the pair.
    B,
}

impl PairHalf {
    /// Single-letter suffix used in the rendered id.
    #[must_use]
    pub const fn suffix(self) -> char {
        match self {
            PairHalf::A => 'a',
            PairHalf::B => 'b',
        }
    }
}

/// Stable identifier for a card within one session.
///
/// Ids are unique per deck, stable across shuffles, and never reused
/// within a session. They render as `"1a"`, `"1b"`, `"2a"`, ... with the
/// pair index 1-based for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    /// 0-based pair index.
    pub pair: u32,
    /// Which half of the pair.
    pub half: PairHalf,
}

impl CardId {
    /// Create a card id from a pair index and half.
    #[must_use]
    pub const fn new(pair: u32, half: PairHalf) -> Self {
        Self { pair, half }
    }

    /// The 0-based pair index this card belongs to.
    #[must_use]
    pub const fn pair_index(self) -> usize {
        self.pair as usize
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.pair + 1, self.half.suffix())
    }
}

/// A card in the deck.
///
/// `content` is opaque to the engine; two cards with equal content form a
/// matchable pair. The flags track the card's lifecycle state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card<C> {
    /// Stable identity within the session.
    pub id: CardId,

    /// Pair content. Equal content = matchable.
    pub content: C,

    /// Is the card currently shown face-up?
    pub is_face_up: bool,

    /// Has the card been matched? Terminal once set.
    pub is_matched: bool,
}

impl<C> Card<C> {
    /// Create a fresh, face-down, unmatched card.
    #[must_use]
    pub const fn new(id: CardId, content: C) -> Self {
        Self {
            id,
            content,
            is_face_up: false,
            is_matched: false,
        }
    }

    /// Face-down and unmatched.
    #[must_use]
    pub const fn is_fresh(&self) -> bool {
        !self.is_face_up && !self.is_matched
    }

    /// Face-up but not yet matched - the pending half of a potential match.
    #[must_use]
    pub const fn is_revealed(&self) -> bool {
        self.is_face_up && !self.is_matched
    }
}
