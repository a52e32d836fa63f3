//! KYPHOS Filters - per-scalar temporal smoothing
//!
//! This crate provides the stateful smoothers used by the monitor:
//! - An inner single-pole low-pass primitive
//! - The adaptive One-Euro filter (speed-dependent cutoff)
//! - A fixed-window moving-average filter
//!
//! Every filter is an owned stateful object, one instance per smoothed
//! metric per session. State is never shared between metrics or tracked
//! subjects; `reset()` returns a filter to "no prior sample".

pub mod lowpass;
pub mod one_euro;
pub mod moving_average;

pub use lowpass::*;
pub use one_euro::*;
pub use moving_average::*;
