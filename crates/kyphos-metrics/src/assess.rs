//! Frame-level posture assessment
//!
//! Coarse good/slouching/borderline decision from the raw geometry of the
//! current frame only. Independent of the fine-grained sitting metrics and
//! of any temporal smoothing (the session layer smooths the reported
//! angles separately).

use kyphos_core::{
    BodyPoint, LandmarkFrame, PostureAnalysis, PostureMetrics, PostureStatus, Severity,
};
use kyphos_geom::{angle_degrees, distance, is_visible, midpoint, vertical_reference};

/// Minimum fraction of key landmarks required to attempt an assessment
pub const CONFIDENCE_GATE: f32 = 0.6;

pub const MSG_LOW_VISIBILITY: &str = "Insufficient pose visibility for analysis";
pub const MSG_SPINE_NOT_IN_VIEW: &str = "Spine not in view";
pub const MSG_GOOD: &str = "Posture looks good";
pub const MSG_SLOUCHING: &str = "Slouching detected";
pub const MSG_NEEDS_IMPROVEMENT: &str = "Posture needs improvement";

/// Assess overall posture for one frame
///
/// Total over any well-formed frame: insufficient visibility is a normal
/// borderline outcome with a diagnostic message, not an error.
pub fn analyze_posture(frame: &LandmarkFrame) -> PostureAnalysis {
    let key_points = [
        BodyPoint::LeftShoulder,
        BodyPoint::RightShoulder,
        BodyPoint::LeftHip,
        BodyPoint::RightHip,
        BodyPoint::Nose,
    ];
    let visible_count = key_points
        .iter()
        .filter(|p| is_visible(frame.point(**p)))
        .count();
    let confidence = visible_count as f32 / key_points.len() as f32;

    if confidence < CONFIDENCE_GATE {
        return PostureAnalysis {
            status: PostureStatus::Borderline,
            severity: Severity::Low,
            message: MSG_LOW_VISIBILITY,
            metrics: PostureMetrics {
                confidence,
                ..Default::default()
            },
        };
    }

    let left_shoulder = frame.point(BodyPoint::LeftShoulder);
    let right_shoulder = frame.point(BodyPoint::RightShoulder);
    let shoulder_width = distance(left_shoulder, right_shoulder);
    let shoulder_mid = midpoint(left_shoulder, right_shoulder);
    let hip_mid = midpoint(
        frame.point(BodyPoint::LeftHip),
        frame.point(BodyPoint::RightHip),
    );
    let spine_mid = midpoint(&shoulder_mid, &hip_mid);

    let spine_visible = is_visible(left_shoulder)
        && is_visible(right_shoulder)
        && is_visible(frame.point(BodyPoint::LeftHip))
        && is_visible(frame.point(BodyPoint::RightHip));

    let trunk_flexion_deg = if spine_visible {
        angle_degrees(&vertical_reference(&spine_mid), &spine_mid, &hip_mid)
    } else {
        0.0
    };

    // Head center: ear midpoint when both ears are in view, nose otherwise.
    let head = if is_visible(frame.point(BodyPoint::LeftEar))
        && is_visible(frame.point(BodyPoint::RightEar))
    {
        midpoint(
            frame.point(BodyPoint::LeftEar),
            frame.point(BodyPoint::RightEar),
        )
    } else {
        *frame.point(BodyPoint::Nose)
    };
    let head_neck_deg = angle_degrees(&vertical_reference(&shoulder_mid), &shoulder_mid, &head);

    let metrics = PostureMetrics {
        trunk_flexion_deg,
        head_neck_deg,
        shoulder_width,
        confidence,
        spine_visible,
    };

    // First match wins.
    let (status, severity, message) = if !spine_visible {
        (PostureStatus::Borderline, Severity::Low, MSG_SPINE_NOT_IN_VIEW)
    } else if trunk_flexion_deg <= 15.0 {
        (PostureStatus::Good, Severity::Low, MSG_GOOD)
    } else if trunk_flexion_deg > 25.0 {
        let severity = if trunk_flexion_deg > 35.0 {
            Severity::High
        } else {
            Severity::Medium
        };
        (PostureStatus::Slouching, severity, MSG_SLOUCHING)
    } else {
        (PostureStatus::Borderline, Severity::Low, MSG_NEEDS_IMPROVEMENT)
    };

    PostureAnalysis {
        status,
        metrics,
        severity,
        message,
    }
}
