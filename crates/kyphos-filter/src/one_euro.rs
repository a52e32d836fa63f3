//! Adaptive (One-Euro) filter
//!
//! Combines a value low-pass with a derivative low-pass whose cutoff
//! adapts to the estimated speed of change: fast motion raises the cutoff
//! (less lag), slow motion lowers it (more smoothing).

use kyphos_core::FrameTime;

use crate::lowpass::{smoothing_alpha, LowPassFilter};

/// One-Euro filter parameters
#[derive(Debug, Clone, Copy)]
pub struct OneEuroConfig {
    /// Sampling frequency hint (Hz); sets the fallback interval for the
    /// first sample
    pub freq: f32,
    /// Minimum cutoff frequency (Hz); lower = smoother at rest
    pub min_cutoff: f32,
    /// Speed coefficient; higher = less lag during fast motion
    pub beta: f32,
    /// Fixed cutoff (Hz) for the derivative low-pass
    pub d_cutoff: f32,
}

impl Default for OneEuroConfig {
    fn default() -> Self {
        OneEuroConfig {
            freq: 30.0,
            min_cutoff: 1.0,
            beta: 0.0,
            d_cutoff: 1.0,
        }
    }
}

impl OneEuroConfig {
    /// Preset tuned for degree-scale posture angles
    pub fn for_angles() -> Self {
        OneEuroConfig {
            min_cutoff: 1.5,
            beta: 0.3,
            ..Default::default()
        }
    }
}

/// Stateful adaptive smoother for one scalar signal
///
/// One instance per smoothed metric per session; never shared.
#[derive(Debug, Clone)]
pub struct OneEuroFilter {
    config: OneEuroConfig,
    value: LowPassFilter,
    derivative: LowPassFilter,
    last_time: Option<FrameTime>,
}

impl OneEuroFilter {
    pub fn new(config: OneEuroConfig) -> Self {
        OneEuroFilter {
            config,
            value: LowPassFilter::new(),
            derivative: LowPassFilter::new(),
            last_time: None,
        }
    }

    /// Smooth one sample taken at time `t`
    ///
    /// The first sample uses the nominal interval `1/freq` and snaps the
    /// output to the input. A non-increasing timestamp (`dt <= 0`) returns
    /// the previous output without mutating any state.
    pub fn filter(&mut self, t: FrameTime, x: f32) -> f32 {
        let dt = match self.last_time {
            None => 1.0 / self.config.freq,
            Some(prev_t) => {
                let dt = (t - prev_t) as f32;
                if dt <= 0.0 {
                    // last() is always Some once last_time is set
                    return self.value.last().unwrap_or(x);
                }
                dt
            }
        };

        let dx = match self.value.last() {
            None => 0.0,
            Some(prev) => (x - prev) / dt,
        };
        let dx_hat = self
            .derivative
            .apply(dx, smoothing_alpha(self.config.d_cutoff, dt));

        let cutoff = self.config.min_cutoff + self.config.beta * dx_hat.abs();
        let out = self.value.apply(x, smoothing_alpha(cutoff, dt));
        self.last_time = Some(t);
        out
    }

    /// Last output, if any sample has been seen
    #[inline]
    pub fn last(&self) -> Option<f32> {
        self.value.last()
    }

    /// Forget all state (both sub-filters and the last timestamp)
    pub fn reset(&mut self) {
        self.value.reset();
        self.derivative.reset();
        self.last_time = None;
    }
}
