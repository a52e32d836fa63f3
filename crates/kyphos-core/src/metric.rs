//! Metric records produced by the analysis pipeline
//!
//! All records here are plain immutable data: recomputed fresh every frame
//! and safe to hand across any boundary (rendering, logging, serialization)
//! without further transformation.

/// Fixed uncertainty proxy for a visible metric
pub const SIGMA_VISIBLE: f32 = 0.1;

/// Fixed uncertainty proxy for a hidden metric
pub const SIGMA_HIDDEN: f32 = 1.0;

/// Rolling neck-angle history capacity (~60 s at 30 FPS)
pub const NECK_HISTORY_CAP: usize = 1800;

/// Classification band for a single metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    Green,
    Yellow,
    Red,
    /// Metric could not be measured (required landmarks not visible)
    NotApplicable,
}

/// One measured, classified metric
///
/// `sigma` is a fixed confidence proxy, not a computed variance. `level` is
/// `NotApplicable` whenever `visible` is false, regardless of `value`
/// (which is then 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricValue {
    pub value: f32,
    pub sigma: f32,
    pub level: Level,
    pub visible: bool,
    pub confidence: Option<f32>,
}

impl MetricValue {
    /// A measured metric with its classified level
    pub fn measured(value: f32, level: Level) -> Self {
        MetricValue {
            value,
            sigma: SIGMA_VISIBLE,
            level,
            visible: true,
            confidence: None,
        }
    }

    /// The not-measurable fallback: value 0, level not-applicable
    pub fn hidden() -> Self {
        MetricValue {
            value: 0.0,
            sigma: SIGMA_HIDDEN,
            level: Level::NotApplicable,
            visible: false,
            confidence: None,
        }
    }

    /// Attach a fixed confidence
    pub fn with_confidence(mut self, confidence: f32) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

/// The fixed-shape detailed metric record, one per analyzed frame
#[derive(Debug, Clone, PartialEq)]
pub struct SittingMetrics {
    /// Craniovertebral angle (forward head posture), degrees
    pub cva_deg: MetricValue,
    /// Trunk flexion from vertical, degrees
    pub trunk_deg: MetricValue,
    /// Pelvic tilt relative to the calibration baseline, degrees
    pub pelvic_tilt_delta_deg: MetricValue,
    /// Absolute pelvic tilt, degrees
    pub pelvic_tilt_abs_deg: MetricValue,
    /// Left elbow angle, degrees
    pub elbow_deg: MetricValue,
    /// Left knee angle, degrees
    pub knee_deg: MetricValue,
    /// Neck-angle variability, degrees per minute
    pub neck_variability_deg_min: MetricValue,
    /// Weighted composite ergonomic score, 0-100
    pub ergo_score: MetricValue,
}

/// Coarse frame-level posture status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostureStatus {
    Good,
    Slouching,
    Borderline,
}

/// Severity attached to a posture status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Raw geometry backing the coarse assessment
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PostureMetrics {
    /// Trunk flexion from vertical, degrees (0 when spine not visible)
    pub trunk_flexion_deg: f32,
    /// Head-neck angle at the shoulder midpoint, degrees
    pub head_neck_deg: f32,
    /// Planar shoulder width in normalized image units
    pub shoulder_width: f32,
    /// Fraction of key landmarks visible, in [0,1]
    pub confidence: f32,
    /// All four trunk landmarks (shoulders, hips) visible
    pub spine_visible: bool,
}

/// Coarse per-frame posture assessment
#[derive(Debug, Clone, PartialEq)]
pub struct PostureAnalysis {
    pub status: PostureStatus,
    pub metrics: PostureMetrics,
    pub severity: Severity,
    pub message: &'static str,
}

/// Calibration baseline captured by an explicit user action
///
/// Absent baseline means pelvic-tilt delta defaults to 0 and that scoring
/// axis behaves as perfectly neutral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Baseline {
    /// Absolute pelvic tilt at calibration time, degrees
    pub pelvic_tilt_deg: f32,
    /// Planar shoulder width at calibration time, normalized units
    pub shoulder_width: f32,
}
