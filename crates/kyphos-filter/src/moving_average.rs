//! Fixed-window moving-average filter
//!
//! Simpler and less phase-responsive than the adaptive filter; used where
//! steady readout matters more than tracking speed.

use std::collections::VecDeque;

/// Default window size
pub const DEFAULT_WINDOW: usize = 5;

/// Bounded-window arithmetic-mean smoother
#[derive(Debug, Clone)]
pub struct MovingAverageFilter {
    window: VecDeque<f32>,
    capacity: usize,
}

impl MovingAverageFilter {
    /// Create a filter over the last `capacity` samples (minimum 1)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        MovingAverageFilter {
            window: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a sample, evicting the oldest past capacity, and return the
    /// mean of the current window
    pub fn push(&mut self, x: f32) -> f32 {
        self.window.push_back(x);
        if self.window.len() > self.capacity {
            self.window.pop_front();
        }
        self.window.iter().sum::<f32>() / self.window.len() as f32
    }

    /// Number of samples currently in the window
    #[inline]
    pub fn len(&self) -> usize {
        self.window.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.window.is_empty()
    }

    /// Empty the window
    pub fn reset(&mut self) {
        self.window.clear();
    }
}

impl Default for MovingAverageFilter {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}
