//! Time primitives
//!
//! The pipeline is driven by session-relative timestamps supplied by the
//! caller, one per frame. `FrameTime` is a monotonic-by-contract f64-second
//! newtype; the adaptive filter tolerates violations of monotonicity by
//! falling back to the previous output.

use std::ops::{Add, Sub};
use std::time::Duration;

/// Nominal frame interval at the reference cadence (30 FPS), seconds
pub const NOMINAL_FRAME_INTERVAL: f64 = 1.0 / 30.0;

/// Session-relative frame timestamp in seconds
#[derive(Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct FrameTime(pub f64);

impl FrameTime {
    pub const ZERO: FrameTime = FrameTime(0.0);

    #[inline]
    pub fn from_secs_f64(secs: f64) -> Self {
        FrameTime(secs)
    }

    #[inline]
    pub fn from_millis(millis: u64) -> Self {
        FrameTime(millis as f64 / 1_000.0)
    }

    #[inline]
    pub fn from_micros(micros: u64) -> Self {
        FrameTime(micros as f64 / 1_000_000.0)
    }

    #[inline]
    pub fn as_secs_f64(self) -> f64 {
        self.0
    }

    /// The timestamp one nominal frame interval later
    #[inline]
    pub fn next_frame(self) -> Self {
        FrameTime(self.0 + NOMINAL_FRAME_INTERVAL)
    }
}

impl Add<Duration> for FrameTime {
    type Output = FrameTime;

    #[inline]
    fn add(self, rhs: Duration) -> Self::Output {
        FrameTime(self.0 + rhs.as_secs_f64())
    }
}

impl Sub<FrameTime> for FrameTime {
    type Output = f64;

    /// Elapsed seconds; negative when `rhs` is later
    #[inline]
    fn sub(self, rhs: FrameTime) -> Self::Output {
        self.0 - rhs.0
    }
}

impl std::fmt::Debug for FrameTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t({:.3}s)", self.0)
    }
}
