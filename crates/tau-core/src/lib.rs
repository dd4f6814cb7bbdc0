//! Tau Core - duration units
//!
//! This crate defines the duration primitives:
//! - τ (Tau): a duration in whole seconds
//! - Mτ, Gτ, Tτ: durations in millions, billions, trillions of τ

pub mod units;

pub use units::*;
