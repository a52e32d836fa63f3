//! KYPHOS Metrics - from landmark frames to classified ergonomic metrics
//!
//! This crate holds the analysis stages downstream of the geometry kernel:
//! - Three-band classifiers and the per-metric band table
//! - Sitting-metric extraction (frame -> SittingMetrics)
//! - The coarse frame-level posture assessment
//! - The rolling neck-angle history buffer
//! - Baseline capture for calibration
//!
//! Every analysis function here is total: degenerate or occluded input
//! yields a structurally valid record with defined fallbacks, never an
//! error (errors exist only at the calibration boundary).

pub mod bands;
pub mod history;
pub mod baseline;
pub mod extract;
pub mod assess;

pub use bands::*;
pub use history::*;
pub use baseline::*;
pub use extract::*;
pub use assess::*;
