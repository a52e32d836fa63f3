//! Synthetic subject simulator
//!
//! Generates landmark frames for a parameterized sitting subject:
//! trunk lean, forward head offset, per-landmark jitter, and group
//! occlusion. Deterministic under a fixed seed.

use kyphos_core::{BodyPoint, Landmark, LandmarkFrame};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Posture profile driving frame generation
#[derive(Debug, Clone, Copy)]
pub struct SubjectProfile {
    /// Forward trunk lean, degrees from vertical
    pub trunk_lean_deg: f32,
    /// Forward head rotation on top of the trunk, degrees
    pub head_forward_deg: f32,
    /// Extra bend applied to the left elbow beyond the neutral 100
    pub elbow_offset_deg: f32,
    /// Uniform jitter amplitude in normalized image units
    pub jitter: f32,
    /// Visibility reported for head landmarks (ears, nose)
    pub head_visibility: f32,
    /// Visibility reported for everything else
    pub body_visibility: f32,
}

impl SubjectProfile {
    /// Level, upright sitter with clean landmarks
    pub fn upright() -> Self {
        SubjectProfile {
            trunk_lean_deg: 0.0,
            head_forward_deg: 0.0,
            elbow_offset_deg: 0.0,
            jitter: 0.0,
            head_visibility: 1.0,
            body_visibility: 1.0,
        }
    }

    /// Heavy forward lean with forward head posture
    pub fn sloucher() -> Self {
        SubjectProfile {
            trunk_lean_deg: 40.0,
            head_forward_deg: 25.0,
            ..Self::upright()
        }
    }

    /// Upright but with the head landmarks below the visibility gate
    pub fn occluded_head() -> Self {
        SubjectProfile {
            head_visibility: 0.1,
            ..Self::upright()
        }
    }

    /// Whole body barely tracked
    pub fn barely_tracked() -> Self {
        SubjectProfile {
            head_visibility: 0.1,
            body_visibility: 0.1,
            ..Self::upright()
        }
    }

    /// Upright with noisy landmark coordinates
    pub fn jittery() -> Self {
        SubjectProfile {
            jitter: 0.01,
            ..Self::upright()
        }
    }
}

/// Deterministic landmark-frame generator for one subject
pub struct SyntheticSubject {
    profile: SubjectProfile,
    rng: StdRng,
}

impl SyntheticSubject {
    pub fn new(profile: SubjectProfile, seed: u64) -> Self {
        SyntheticSubject {
            profile,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Swap the posture profile mid-session (camera and seat stay put)
    pub fn set_profile(&mut self, profile: SubjectProfile) {
        self.profile = profile;
    }

    /// Generate the next frame
    pub fn frame(&mut self) -> LandmarkFrame {
        let p = self.profile;
        let mut frame = LandmarkFrame::default();

        let (lean_s, lean_c) = p.trunk_lean_deg.to_radians().sin_cos();
        let head_total = p.trunk_lean_deg + p.head_forward_deg;
        let (head_s, head_c) = head_total.to_radians().sin_cos();

        // Hips are the anchor; the torso and head rotate forward of them.
        let hip_y = 0.70;
        let torso = 0.20;
        let (sx, sy) = (0.50 + torso * lean_s, hip_y - torso * lean_c);

        let mut set = |frame: &mut LandmarkFrame, point: BodyPoint, x: f32, y: f32, vis: f32| {
            let jx = self.rng.gen_range(-1.0f32..1.0) * p.jitter;
            let jy = self.rng.gen_range(-1.0f32..1.0) * p.jitter;
            *frame.point_mut(point) =
                Landmark::new(x + jx, y + jy, 0.0).with_visibility(vis);
        };

        set(&mut frame, BodyPoint::LeftHip, 0.45, hip_y, p.body_visibility);
        set(&mut frame, BodyPoint::RightHip, 0.55, hip_y, p.body_visibility);
        set(&mut frame, BodyPoint::LeftShoulder, sx - 0.05, sy, p.body_visibility);
        set(&mut frame, BodyPoint::RightShoulder, sx + 0.05, sy, p.body_visibility);

        let neck = 0.10;
        let (ex, ey) = (sx + neck * head_s, sy - neck * head_c);
        set(&mut frame, BodyPoint::LeftEar, ex - 0.05, ey, p.head_visibility);
        set(&mut frame, BodyPoint::RightEar, ex + 0.05, ey, p.head_visibility);
        set(
            &mut frame,
            BodyPoint::Nose,
            sx + (neck + 0.02) * head_s,
            sy - (neck + 0.02) * head_c,
            p.head_visibility,
        );

        // Left arm: upper arm hangs along the trunk, forearm rotated to a
        // neutral ~100 degree elbow plus the profile offset.
        let upper = 0.12;
        let (elx, ely) = (sx - 0.05 + upper * lean_s, sy + upper * lean_c);
        set(&mut frame, BodyPoint::LeftElbow, elx, ely, p.body_visibility);
        let elbow_deg = 100.0 + p.elbow_offset_deg;
        let (fs, fc) = (elbow_deg - p.trunk_lean_deg).to_radians().sin_cos();
        set(
            &mut frame,
            BodyPoint::LeftWrist,
            elx + 0.12 * fs,
            ely - 0.12 * fc,
            p.body_visibility,
        );

        // Left leg: thigh down from the hip, shin at a right angle.
        set(&mut frame, BodyPoint::LeftKnee, 0.45, hip_y + 0.15, p.body_visibility);
        set(&mut frame, BodyPoint::LeftAnkle, 0.55, hip_y + 0.15, p.body_visibility);

        frame
    }
}
