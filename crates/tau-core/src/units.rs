//! Duration units for tau
//!
//! τ is a duration counted in whole seconds. The scaled units Mτ, Gτ and
//! Tτ relabel a τ count in millions, billions and trillions of seconds;
//! they are conversion targets, not independently stored quantities.
//!
//! Scaling down truncates toward zero; scaling back up is exact
//! multiplication, so `t.mega().tau()` is lossy whenever `t` is not an
//! exact multiple of the scale factor.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// τ - a duration in whole seconds.
///
/// Negative values describe spans that reach into the future relative to
/// a reference instant. Arithmetic uses Rust's default integer semantics
/// (panic on overflow in debug builds, two's-complement wrap in release);
/// the `saturating_*` methods are the opt-in alternative.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Tau(pub i64);

impl Tau {
    pub const ZERO: Tau = Tau(0);
    pub const MAX: Tau = Tau(i64::MAX);
    pub const MIN: Tau = Tau(i64::MIN);

    #[inline]
    pub fn from_secs(secs: i64) -> Self {
        Tau(secs)
    }

    #[inline]
    pub fn as_secs(self) -> i64 {
        self.0
    }

    /// Convert to Mτ, truncating toward zero.
    #[inline]
    pub fn mega(self) -> MegaTau {
        MegaTau(self.0 / MegaTau::SCALE)
    }

    /// Convert to Gτ, truncating toward zero.
    #[inline]
    pub fn giga(self) -> GigaTau {
        GigaTau(self.0 / GigaTau::SCALE)
    }

    /// Convert to Tτ, truncating toward zero.
    #[inline]
    pub fn tera(self) -> TeraTau {
        TeraTau(self.0 / TeraTau::SCALE)
    }

    #[inline]
    pub fn saturating_add(self, rhs: Tau) -> Self {
        Tau(self.0.saturating_add(rhs.0))
    }

    #[inline]
    pub fn saturating_sub(self, rhs: Tau) -> Self {
        Tau(self.0.saturating_sub(rhs.0))
    }
}

impl Add for Tau {
    type Output = Tau;

    #[inline]
    fn add(self, rhs: Tau) -> Self::Output {
        Tau(self.0 + rhs.0)
    }
}

impl Sub for Tau {
    type Output = Tau;

    #[inline]
    fn sub(self, rhs: Tau) -> Self::Output {
        Tau(self.0 - rhs.0)
    }
}

impl Neg for Tau {
    type Output = Tau;

    #[inline]
    fn neg(self) -> Self::Output {
        Tau(-self.0)
    }
}

impl fmt::Debug for Tau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "τ({})", self.0)
    }
}

impl fmt::Display for Tau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}τ", self.0)
    }
}

/// Mτ - a duration in millions of τ.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct MegaTau(pub i64);

impl MegaTau {
    pub const SCALE: i64 = 1_000_000;

    /// Convert back to τ. Exact multiplication by the scale factor.
    #[inline]
    pub fn tau(self) -> Tau {
        Tau(self.0 * Self::SCALE)
    }
}

impl fmt::Debug for MegaTau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Mτ({})", self.0)
    }
}

impl fmt::Display for MegaTau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Mτ", self.0)
    }
}

/// Gτ - a duration in billions of τ.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct GigaTau(pub i64);

impl GigaTau {
    pub const SCALE: i64 = 1_000_000_000;

    /// Convert back to τ. Exact multiplication by the scale factor.
    #[inline]
    pub fn tau(self) -> Tau {
        Tau(self.0 * Self::SCALE)
    }
}

impl fmt::Debug for GigaTau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gτ({})", self.0)
    }
}

impl fmt::Display for GigaTau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Gτ", self.0)
    }
}

/// Tτ - a duration in trillions of τ.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TeraTau(pub i64);

impl TeraTau {
    pub const SCALE: i64 = 1_000_000_000_000;

    /// Convert back to τ. Exact multiplication by the scale factor.
    #[inline]
    pub fn tau(self) -> Tau {
        Tau(self.0 * Self::SCALE)
    }
}

impl fmt::Debug for TeraTau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tτ({})", self.0)
    }
}

impl fmt::Display for TeraTau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Tτ", self.0)
    }
}
