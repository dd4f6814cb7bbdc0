//! Tau Time - instants in time measured in τ
//!
//! This crate implements the instant capability:
//! - `Instant`: report the τ elapsed since a point in time, and build new
//!   instants shifted by a τ
//! - `WallClock`: an instant backed by the live system clock
//! - `FrozenClock`: a deterministic instant whose "present" is injected
//!   explicitly, for pure and repeatable duration math

pub mod error;
pub mod frozen;
pub mod instant;
pub mod wall;

pub use error::*;
pub use frozen::*;
pub use instant::*;
pub use wall::*;
