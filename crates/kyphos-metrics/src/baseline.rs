//! Baseline capture
//!
//! Calibration is an explicit user action: it snapshots the current
//! absolute pelvic tilt and shoulder width so later frames can be scored
//! as deltas. This is the one analysis entry point that can fail, because
//! calibrating against an occluded trunk would bake garbage into every
//! subsequent delta.

use kyphos_core::{Baseline, BodyPoint, KyphosError, KyphosResult, LandmarkFrame};
use kyphos_geom::distance;

use crate::extract::{absolute_pelvic_tilt_deg, trunk_visible};

/// Capture a calibration baseline from the current frame
pub fn capture_baseline(frame: &LandmarkFrame) -> KyphosResult<Baseline> {
    if !trunk_visible(frame) {
        return Err(KyphosError::CalibrationNotVisible);
    }

    Ok(Baseline {
        pelvic_tilt_deg: absolute_pelvic_tilt_deg(frame),
        shoulder_width: distance(
            frame.point(BodyPoint::LeftShoulder),
            frame.point(BodyPoint::RightShoulder),
        ),
    })
}
