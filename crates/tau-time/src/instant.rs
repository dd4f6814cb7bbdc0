//! The instant capability

use tau_core::Tau;

/// An instant in time.
///
/// An instant measures the τ separating it from its notion of "the
/// present" and can produce new instants shifted by a τ. For [`WallClock`]
/// the present is the live system clock at call time; [`FrozenClock`]
/// carries an explicitly injected present, making `since` pure.
///
/// [`WallClock`]: crate::WallClock
/// [`FrozenClock`]: crate::FrozenClock
pub trait Instant {
    /// Returns the τ that has passed since this instant, truncated to
    /// whole seconds toward zero. Negative when the instant lies in the
    /// future of the present.
    fn since(&self) -> Tau;

    /// Returns a new instant advanced by `t` (moved backward when `t` is
    /// negative). Does not mutate `self`.
    ///
    /// Against an unchanged present, `i.advance(t).since()` equals
    /// `i.since() - t`.
    #[must_use]
    fn advance(&self, t: Tau) -> Self
    where
        Self: Sized;
}

/// Returns the τ since the given instant.
///
/// Convenience wrapper over [`Instant::since`], so callers can compute
/// elapsed durations without committing to a concrete instant type.
#[inline]
pub fn tau_since<I: Instant>(instant: &I) -> Tau {
    instant.since()
}
