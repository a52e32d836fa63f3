//! Single-pole low-pass primitive
//!
//! The building block of the One-Euro filter. On the first sample it snaps
//! to the input exactly (no startup transient); thereafter
//! `output = alpha * input + (1 - alpha) * previous_output`.

use std::f32::consts::PI;

/// Blending coefficient for a cutoff frequency (Hz) and time step (s)
///
/// `alpha = 1 / (1 + (1 / (2*pi*cutoff)) / dt)`: higher cutoff or larger
/// dt pushes alpha toward 1 (more responsive).
#[inline]
pub fn smoothing_alpha(cutoff: f32, dt: f32) -> f32 {
    let tau = 1.0 / (2.0 * PI * cutoff);
    1.0 / (1.0 + tau / dt)
}

/// Stateful single-pole low-pass filter
#[derive(Debug, Clone)]
pub struct LowPassFilter {
    last: Option<f32>,
}

impl LowPassFilter {
    /// Create a filter with no prior sample
    pub fn new() -> Self {
        LowPassFilter { last: None }
    }

    /// Blend a sample in with the given coefficient
    pub fn apply(&mut self, x: f32, alpha: f32) -> f32 {
        let out = match self.last {
            None => x,
            Some(prev) => alpha * x + (1.0 - alpha) * prev,
        };
        self.last = Some(out);
        out
    }

    /// Last output, if any sample has been seen
    #[inline]
    pub fn last(&self) -> Option<f32> {
        self.last
    }

    /// Forget all state
    pub fn reset(&mut self) {
        self.last = None;
    }
}

impl Default for LowPassFilter {
    fn default() -> Self {
        Self::new()
    }
}
