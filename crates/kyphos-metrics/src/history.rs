//! Rolling neck-angle history
//!
//! Caller-owned buffer of recent CVA samples backing the variability
//! metric. The owner appends one sample per frame in which the CVA was
//! measurable; extraction only ever reads a slice of it.

use kyphos_core::NECK_HISTORY_CAP;

/// Minimum number of samples before variability is reportable
pub const MIN_VARIABILITY_SAMPLES: usize = 11;

/// Bounded rolling buffer of angle samples, oldest first
#[derive(Debug, Clone)]
pub struct AngleHistory {
    samples: Vec<f32>,
    cap: usize,
}

impl AngleHistory {
    /// Create with the standard capacity (~60 s at 30 FPS)
    pub fn new() -> Self {
        Self::with_capacity(NECK_HISTORY_CAP)
    }

    /// Create with an explicit capacity (minimum 1)
    pub fn with_capacity(cap: usize) -> Self {
        AngleHistory {
            samples: Vec::new(),
            cap: cap.max(1),
        }
    }

    /// Append a sample, evicting the oldest when at capacity
    pub fn push(&mut self, angle_deg: f32) {
        if self.samples.len() == self.cap {
            self.samples.remove(0);
        }
        self.samples.push(angle_deg);
    }

    /// All samples, oldest first
    #[inline]
    pub fn as_slice(&self) -> &[f32] {
        &self.samples
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Drop all samples
    pub fn clear(&mut self) {
        self.samples.clear();
    }
}

impl Default for AngleHistory {
    fn default() -> Self {
        Self::new()
    }
}

/// Sample standard deviation (Bessel-corrected) of a slice
///
/// Returns 0 for fewer than two samples.
pub fn sample_std_dev(samples: &[f32]) -> f32 {
    let n = samples.len();
    if n < 2 {
        return 0.0;
    }
    let mean = samples.iter().sum::<f32>() / n as f32;
    let sum_sq: f32 = samples.iter().map(|s| (s - mean) * (s - mean)).sum();
    (sum_sq / (n - 1) as f32).sqrt()
}
