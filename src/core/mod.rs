//! Core building blocks: card identity, RNG, time source.
//!
//! These types are content-agnostic. The engine and session modules build
//! on them; nothing here knows about themes or scoring.

pub mod card;
pub mod clock;
pub mod rng;

pub use card::{Card, CardId, PairHalf};
pub use clock::GameClock;
pub use rng::{GameRng, GameRngState};
