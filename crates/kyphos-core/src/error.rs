//! Error types for KYPHOS
//!
//! The analysis path itself is total: degenerate geometry, missing
//! visibility, and missing baseline are defined fallbacks, never errors.
//! Errors exist only at the ingestion/calibration boundary where the
//! caller's contract can genuinely be violated.

use thiserror::Error;

/// Core KYPHOS errors
#[derive(Error, Debug)]
pub enum KyphosError {
    #[error("Malformed landmark frame: expected {expected} landmarks, got {actual}")]
    MalformedFrame { expected: usize, actual: usize },

    #[error("Calibration requires visible trunk landmarks (shoulders and hips)")]
    CalibrationNotVisible,
}

/// Result type for KYPHOS operations
pub type KyphosResult<T> = Result<T, KyphosError>;
