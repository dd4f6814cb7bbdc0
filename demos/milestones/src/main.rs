//! Tau Milestones Demo
//!
//! Prints the wall-clock instants reached after round Mτ counts from a
//! fixed starting point, first in coarse 50 Mτ steps, then in fine 5 Mτ
//! steps around the 1000 Mτ milestone.

use chrono::{TimeZone, Utc};
use tau_core::MegaTau;
use tau_time::{Instant, WallClock};

fn main() {
    println!("=== Tau Milestones ===\n");

    let t0 = WallClock::new(Utc.with_ymd_and_hms(1985, 3, 20, 15, 0, 0).unwrap());
    println!("Time t0 is {t0}");

    println!("\n1. Coarse sweep (50 Mτ steps)");
    for mt in (900..=1200).step_by(50) {
        let t1 = t0.advance(MegaTau(mt).tau());
        println!("   After {}: {}", MegaTau(mt), t1);
    }

    let start = 1000;
    let t1 = t0.advance(MegaTau(start).tau());
    println!("\n2. Fine sweep from t1 = {t1} (5 Mτ steps)");
    for mt in (0..=150).step_by(5) {
        let t2 = t1.advance(MegaTau(mt).tau());
        println!("   [{}] After {}: {}", start + mt, MegaTau(mt), t2);
    }
}
