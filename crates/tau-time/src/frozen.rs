//! Deterministic instants
//!
//! A wall-clock instant measures against the live system clock, which
//! makes any duration math built on it non-repeatable. `FrozenClock`
//! carries its own "present", injected at construction, so `since` is a
//! pure function of the two stored timestamps.

use chrono::{DateTime, Utc};
use tau_core::Tau;

use crate::instant::Instant;
use crate::wall::shift;

/// An instant whose present is frozen at construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FrozenClock {
    /// The fixed point in time this instant denotes
    at: DateTime<Utc>,
    /// The frozen present that `since` measures against
    present: DateTime<Utc>,
}

impl FrozenClock {
    /// An instant at `at` whose present is frozen at `present`.
    pub fn new(at: DateTime<Utc>, present: DateTime<Utc>) -> Self {
        FrozenClock { at, present }
    }

    /// The fixed point this instant denotes.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.at
    }

    /// The frozen present.
    #[inline]
    pub fn present(&self) -> DateTime<Utc> {
        self.present
    }
}

impl Instant for FrozenClock {
    fn since(&self) -> Tau {
        Tau((self.present - self.at).num_seconds())
    }

    /// Shifts the fixed point; the frozen present carries over unchanged.
    fn advance(&self, t: Tau) -> Self {
        FrozenClock {
            at: shift(self.at, t),
            present: self.present,
        }
    }
}
