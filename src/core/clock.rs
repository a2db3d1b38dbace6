//! Time source for the match-speed bonus and the display timer.
//!
//! The engine never owns a ticking task. It records an anchor instant and
//! derives elapsed time by sampling the clock whenever a caller asks -
//! rendering layers poll, they are not pushed to.
//!
//! Like [`GameRng`](super::GameRng), determinism comes from injection: a
//! manual clock only moves when a test advances it, while the system clock
//! tracks wall time.

use std::time::{Duration, SystemTime};

use serde::{Deserialize, Serialize};

/// Injectable time source.
///
/// `now()` reports a monotonically non-decreasing offset from the clock's
/// origin. Wall-clock rewinds clamp to the last known offset rather than
/// going backwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum GameClock {
    /// Wall-clock time, measured from the moment the clock was created.
    System {
        /// Creation instant; offsets are relative to this.
        origin: SystemTime,
    },
    /// Manually advanced time for deterministic tests.
    Manual {
        /// Current offset from the origin.
        now: Duration,
    },
}

impl GameClock {
    /// Create a wall-clock time source anchored at the current instant.
    #[must_use]
    pub fn system() -> Self {
        Self::System {
            origin: SystemTime::now(),
        }
    }

    /// Create a manual time source starting at zero.
    #[must_use]
    pub const fn manual() -> Self {
        Self::Manual {
            now: Duration::ZERO,
        }
    }

    /// Current offset from the clock's origin.
    #[must_use]
    pub fn now(&self) -> Duration {
        match self {
            // A rewound wall clock reads as zero elapsed, never negative.
            GameClock::System { origin } => SystemTime::now()
                .duration_since(*origin)
                .unwrap_or(Duration::ZERO),
            GameClock::Manual { now } => *now,
        }
    }

    /// Advance a manual clock. No-op on a system clock.
    pub fn advance(&mut self, by: Duration) {
        if let GameClock::Manual { now } = self {
            *now += by;
        }
    }

    /// Is this a manual (test) clock?
    #[must_use]
    pub const fn is_manual(&self) -> bool {
        matches!(self, GameClock::Manual { .. })
    }
}

impl Default for GameClock {
    fn default() -> Self {
        Self::system()
    }
}
