//! KYPHOS Monitor - per-subject session runtime
//!
//! A [`PostureMonitor`] owns all persistent mutable analysis state for one
//! tracked subject:
//! - One adaptive filter per smoothed sitting metric
//! - Moving-average smoothers for the coarse assessment angles
//! - The rolling neck-angle history
//! - The current calibration baseline
//!
//! It is driven sequentially, one call per incoming frame, by exactly one
//! logical analysis stream. Moving a whole monitor between threads is
//! fine; sharing one concurrently is not.

pub mod monitor;

pub use monitor::*;
