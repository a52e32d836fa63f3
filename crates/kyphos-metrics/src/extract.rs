//! Sitting-metric extraction
//!
//! One pure function maps a landmark frame, an optional calibration
//! baseline, and the caller's neck-angle history into the fixed-shape
//! [`SittingMetrics`] record. Per metric, visibility is gated on a
//! metric-specific landmark subset at the standard threshold; a failed
//! gate yields the hidden fallback (value 0, level not-applicable) and
//! never blocks the other metrics.

use kyphos_core::{Baseline, BodyPoint, Landmark, LandmarkFrame, MetricValue, SittingMetrics};
use kyphos_geom::{angle_degrees, is_visible, midpoint, vertical_reference};

use crate::bands::{
    classify_cva, classify_elbow, classify_knee, classify_neck_variability, classify_pelvic_tilt,
    classify_score, classify_trunk,
};
use crate::history::{sample_std_dev, MIN_VARIABILITY_SAMPLES};

/// Fixed confidence attached to the composite score
pub const ERGO_CONFIDENCE: f32 = 0.8;

/// Composite score weights (sum to 1.0)
pub const ERGO_WEIGHT_HEAD: f32 = 0.25;
pub const ERGO_WEIGHT_TRUNK: f32 = 0.25;
pub const ERGO_WEIGHT_PELVIS: f32 = 0.15;
pub const ERGO_WEIGHT_ELBOW: f32 = 0.20;
pub const ERGO_WEIGHT_KNEE: f32 = 0.15;

/// All four trunk landmarks (shoulders, hips) pass the visibility gate
pub fn trunk_visible(frame: &LandmarkFrame) -> bool {
    is_visible(frame.point(BodyPoint::LeftShoulder))
        && is_visible(frame.point(BodyPoint::RightShoulder))
        && is_visible(frame.point(BodyPoint::LeftHip))
        && is_visible(frame.point(BodyPoint::RightHip))
}

/// Trunk flexion, degrees, spine-midpoint formulation
///
/// Vertex at the spine midpoint (average of shoulder and hip midpoints),
/// rays to the vertical reference and the hip midpoint. Upright reads ~0.
pub fn trunk_angle_deg(frame: &LandmarkFrame) -> f32 {
    let shoulder_mid = midpoint(
        frame.point(BodyPoint::LeftShoulder),
        frame.point(BodyPoint::RightShoulder),
    );
    let hip_mid = midpoint(
        frame.point(BodyPoint::LeftHip),
        frame.point(BodyPoint::RightHip),
    );
    let spine_mid = midpoint(&shoulder_mid, &hip_mid);
    angle_degrees(&vertical_reference(&spine_mid), &spine_mid, &hip_mid)
}

/// Craniovertebral angle, degrees
///
/// Vertex at the shoulder midpoint, rays to the vertical reference and the
/// ear midpoint. Upright (ears above shoulders) reads ~180; forward head
/// posture pulls the angle down.
pub fn cva_angle_deg(frame: &LandmarkFrame) -> f32 {
    let shoulder_mid = midpoint(
        frame.point(BodyPoint::LeftShoulder),
        frame.point(BodyPoint::RightShoulder),
    );
    let ear_mid = midpoint(
        frame.point(BodyPoint::LeftEar),
        frame.point(BodyPoint::RightEar),
    );
    angle_degrees(&vertical_reference(&shoulder_mid), &shoulder_mid, &ear_mid)
}

/// Absolute pelvic tilt, degrees
///
/// Angle at the left hip between the coordinate origin, treated as a
/// fixed pseudo-landmark, and the right hip. The origin dependency makes
/// this sensitive to upstream frame normalization; kept as-is for
/// compatibility, and deltas against a baseline captured the same way
/// cancel the offset.
pub fn absolute_pelvic_tilt_deg(frame: &LandmarkFrame) -> f32 {
    let origin = Landmark::new(0.0, 0.0, 0.0);
    angle_degrees(
        &origin,
        frame.point(BodyPoint::LeftHip),
        frame.point(BodyPoint::RightHip),
    )
}

/// Weighted composite ergonomic score over five classified sub-metrics
///
/// Each sub-metric contributes {1.0, 0.7, 0.4} for {green, yellow, red}
/// and 0 when not visible. The score is always reported (visible, fixed
/// confidence), even when every input is hidden.
pub fn compose_ergo_score(
    cva: &MetricValue,
    trunk: &MetricValue,
    pelvic_delta: &MetricValue,
    elbow: &MetricValue,
    knee: &MetricValue,
) -> MetricValue {
    fn bucket(metric: &MetricValue) -> f32 {
        if !metric.visible {
            return 0.0;
        }
        match metric.level {
            kyphos_core::Level::Green => 1.0,
            kyphos_core::Level::Yellow => 0.7,
            kyphos_core::Level::Red => 0.4,
            kyphos_core::Level::NotApplicable => 0.0,
        }
    }

    let score = 100.0
        * (ERGO_WEIGHT_HEAD * bucket(cva)
            + ERGO_WEIGHT_TRUNK * bucket(trunk)
            + ERGO_WEIGHT_PELVIS * bucket(pelvic_delta)
            + ERGO_WEIGHT_ELBOW * bucket(elbow)
            + ERGO_WEIGHT_KNEE * bucket(knee));

    MetricValue::measured(score, classify_score(score)).with_confidence(ERGO_CONFIDENCE)
}

/// Extract and classify the full sitting-metric record for one frame
///
/// `neck_history` is the caller-owned rolling buffer of recent CVA
/// samples; this function only reads it.
pub fn extract_sitting_metrics(
    frame: &LandmarkFrame,
    baseline: Option<&Baseline>,
    neck_history: &[f32],
) -> SittingMetrics {
    let trunk_gate = trunk_visible(frame);

    let cva_deg = if is_visible(frame.point(BodyPoint::LeftEar))
        && is_visible(frame.point(BodyPoint::RightEar))
        && is_visible(frame.point(BodyPoint::LeftShoulder))
        && is_visible(frame.point(BodyPoint::RightShoulder))
    {
        let deg = cva_angle_deg(frame);
        MetricValue::measured(deg, classify_cva(deg))
    } else {
        MetricValue::hidden()
    };

    let trunk_deg = if trunk_gate {
        let deg = trunk_angle_deg(frame);
        MetricValue::measured(deg, classify_trunk(deg))
    } else {
        MetricValue::hidden()
    };

    let pelvic_tilt_abs_deg = if trunk_gate {
        let deg = absolute_pelvic_tilt_deg(frame);
        MetricValue::measured(deg, classify_pelvic_tilt(deg))
    } else {
        MetricValue::hidden()
    };

    let pelvic_tilt_delta_deg = if trunk_gate {
        let delta = match baseline {
            Some(b) => pelvic_tilt_abs_deg.value - b.pelvic_tilt_deg,
            None => 0.0,
        };
        MetricValue::measured(delta, classify_pelvic_tilt(delta))
    } else {
        MetricValue::hidden()
    };

    let elbow_deg = if is_visible(frame.point(BodyPoint::LeftShoulder))
        && is_visible(frame.point(BodyPoint::LeftElbow))
        && is_visible(frame.point(BodyPoint::LeftWrist))
    {
        let deg = angle_degrees(
            frame.point(BodyPoint::LeftShoulder),
            frame.point(BodyPoint::LeftElbow),
            frame.point(BodyPoint::LeftWrist),
        );
        MetricValue::measured(deg, classify_elbow(deg))
    } else {
        MetricValue::hidden()
    };

    let knee_deg = if is_visible(frame.point(BodyPoint::LeftHip))
        && is_visible(frame.point(BodyPoint::LeftKnee))
        && is_visible(frame.point(BodyPoint::LeftAnkle))
    {
        let deg = angle_degrees(
            frame.point(BodyPoint::LeftHip),
            frame.point(BodyPoint::LeftKnee),
            frame.point(BodyPoint::LeftAnkle),
        );
        MetricValue::measured(deg, classify_knee(deg))
    } else {
        MetricValue::hidden()
    };

    let neck_variability_deg_min = if neck_history.len() >= MIN_VARIABILITY_SAMPLES {
        let per_minute = sample_std_dev(neck_history) * 60.0;
        MetricValue::measured(per_minute, classify_neck_variability(per_minute))
    } else {
        MetricValue::hidden()
    };

    let ergo_score = compose_ergo_score(
        &cva_deg,
        &trunk_deg,
        &pelvic_tilt_delta_deg,
        &elbow_deg,
        &knee_deg,
    );

    SittingMetrics {
        cva_deg,
        trunk_deg,
        pelvic_tilt_delta_deg,
        pelvic_tilt_abs_deg,
        elbow_deg,
        knee_deg,
        neck_variability_deg_min,
        ergo_score,
    }
}
