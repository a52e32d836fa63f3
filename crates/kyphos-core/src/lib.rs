//! KYPHOS Core - Fundamental types and primitives
//!
//! This crate defines the core types used throughout the KYPHOS analysis
//! pipeline:
//! - The 33-point body landmark enumeration and frame container
//! - Metric records (MetricValue, SittingMetrics, PostureAnalysis)
//! - Calibration baseline
//! - Time primitives (FrameTime)
//! - Error types

pub mod landmark;
pub mod metric;
pub mod time;
pub mod error;

pub use landmark::*;
pub use metric::*;
pub use time::*;
pub use error::*;
