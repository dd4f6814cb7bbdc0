//! Wall-clock instants

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, TimeDelta, Utc};
use tau_core::Tau;

use crate::error::TimeError;
use crate::instant::Instant;

/// An instant backed by the system wall clock.
///
/// `since` samples the live clock at call time, so repeated calls on the
/// same value return non-decreasing τ (host clock adjustments aside).
///
/// Note: chrono timestamps carry nanosecond precision, which caps the
/// widest representable span at roughly ±262,000 years around the common
/// era; shifts past that range clamp at the bounds rather than wrapping.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct WallClock(DateTime<Utc>);

impl WallClock {
    /// The current wall-clock time.
    pub fn now() -> Self {
        WallClock(Utc::now())
    }

    /// An instant at the given timestamp.
    pub fn new(at: DateTime<Utc>) -> Self {
        WallClock(at)
    }

    /// The underlying timestamp.
    #[inline]
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Instant for WallClock {
    fn since(&self) -> Tau {
        Tau((Utc::now() - self.0).num_seconds())
    }

    fn advance(&self, t: Tau) -> Self {
        WallClock(shift(self.0, t))
    }
}

impl From<DateTime<Utc>> for WallClock {
    fn from(at: DateTime<Utc>) -> Self {
        WallClock(at)
    }
}

impl FromStr for WallClock {
    type Err = TimeError;

    /// Parses an RFC 3339 timestamp, normalized to UTC.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let at = DateTime::parse_from_rfc3339(s)?;
        Ok(WallClock(at.with_timezone(&Utc)))
    }
}

impl fmt::Display for WallClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Shift a timestamp by `t`, clamping at chrono's representable range.
pub(crate) fn shift(at: DateTime<Utc>, t: Tau) -> DateTime<Utc> {
    let clamp = if t < Tau::ZERO {
        DateTime::<Utc>::MIN_UTC
    } else {
        DateTime::<Utc>::MAX_UTC
    };
    match TimeDelta::try_seconds(t.as_secs()) {
        Some(delta) => at.checked_add_signed(delta).unwrap_or(clamp),
        None => clamp,
    }
}
