//! KYPHOS Test Harness - synthetic subjects and scenario validation
//!
//! This crate provides:
//! - A deterministic synthetic-subject simulator (posture profiles,
//!   landmark jitter, occlusion)
//! - Predefined monitoring scenarios
//! - End-to-end integration tests over the full pipeline

pub mod subject;
pub mod scenario;
pub mod integration;

pub use subject::*;
pub use scenario::*;
