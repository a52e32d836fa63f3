//! Body landmark model
//!
//! A frame is an ordered sequence of exactly 33 landmarks indexed by the
//! fixed body-point enumeration (nose = 0 ... right-foot-index = 32).
//! Index identity is an invariant: producers must never reorder the
//! sequence, and this module enforces arity at construction.

use crate::error::{KyphosError, KyphosResult};

/// Number of landmarks in a pose frame
pub const LANDMARK_COUNT: usize = 33;

/// Visibility threshold applied throughout the pipeline
pub const VISIBILITY_THRESHOLD: f32 = 0.3;

/// Body point identifier, index-aligned with the upstream pose model output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum BodyPoint {
    Nose = 0,
    LeftEyeInner = 1,
    LeftEye = 2,
    LeftEyeOuter = 3,
    RightEyeInner = 4,
    RightEye = 5,
    RightEyeOuter = 6,
    LeftEar = 7,
    RightEar = 8,
    MouthLeft = 9,
    MouthRight = 10,
    LeftShoulder = 11,
    RightShoulder = 12,
    LeftElbow = 13,
    RightElbow = 14,
    LeftWrist = 15,
    RightWrist = 16,
    LeftPinky = 17,
    RightPinky = 18,
    LeftIndex = 19,
    RightIndex = 20,
    LeftThumb = 21,
    RightThumb = 22,
    LeftHip = 23,
    RightHip = 24,
    LeftKnee = 25,
    RightKnee = 26,
    LeftAnkle = 27,
    RightAnkle = 28,
    LeftHeel = 29,
    RightHeel = 30,
    LeftFootIndex = 31,
    RightFootIndex = 32,
}

impl BodyPoint {
    /// All body points in index order
    pub fn all() -> &'static [BodyPoint] {
        &[
            BodyPoint::Nose,
            BodyPoint::LeftEyeInner,
            BodyPoint::LeftEye,
            BodyPoint::LeftEyeOuter,
            BodyPoint::RightEyeInner,
            BodyPoint::RightEye,
            BodyPoint::RightEyeOuter,
            BodyPoint::LeftEar,
            BodyPoint::RightEar,
            BodyPoint::MouthLeft,
            BodyPoint::MouthRight,
            BodyPoint::LeftShoulder,
            BodyPoint::RightShoulder,
            BodyPoint::LeftElbow,
            BodyPoint::RightElbow,
            BodyPoint::LeftWrist,
            BodyPoint::RightWrist,
            BodyPoint::LeftPinky,
            BodyPoint::RightPinky,
            BodyPoint::LeftIndex,
            BodyPoint::RightIndex,
            BodyPoint::LeftThumb,
            BodyPoint::RightThumb,
            BodyPoint::LeftHip,
            BodyPoint::RightHip,
            BodyPoint::LeftKnee,
            BodyPoint::RightKnee,
            BodyPoint::LeftAnkle,
            BodyPoint::RightAnkle,
            BodyPoint::LeftHeel,
            BodyPoint::RightHeel,
            BodyPoint::LeftFootIndex,
            BodyPoint::RightFootIndex,
        ]
    }

    /// Landmark array index for this body point
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// A single tracked body point in normalized image space
///
/// `x`, `y` are nominally in [0,1]; `z` is a depth proxy relative to the
/// hips. `visibility` and `presence` are model-reported confidences in
/// [0,1]; an absent visibility is treated as 0 (invisible).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub visibility: Option<f32>,
    pub presence: Option<f32>,
}

impl Landmark {
    /// Create a landmark with no visibility information
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Landmark {
            x,
            y,
            z,
            visibility: None,
            presence: None,
        }
    }

    /// Create a fully visible landmark (visibility = presence = 1)
    pub fn visible(x: f32, y: f32, z: f32) -> Self {
        Landmark {
            x,
            y,
            z,
            visibility: Some(1.0),
            presence: Some(1.0),
        }
    }

    /// Attach a visibility confidence
    pub fn with_visibility(mut self, visibility: f32) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Visibility with the absent-means-invisible convention
    #[inline]
    pub fn visibility_or_zero(&self) -> f32 {
        self.visibility.unwrap_or(0.0)
    }
}

/// An ordered frame of exactly 33 landmarks
///
/// Construction from a slice validates arity; typed indexing by
/// [`BodyPoint`] cannot go out of bounds.
#[derive(Debug, Clone, PartialEq)]
pub struct LandmarkFrame {
    points: [Landmark; LANDMARK_COUNT],
}

impl LandmarkFrame {
    /// Build a frame from an already-ordered array
    pub fn from_points(points: [Landmark; LANDMARK_COUNT]) -> Self {
        LandmarkFrame { points }
    }

    /// Build a frame from a slice, validating arity
    pub fn from_slice(points: &[Landmark]) -> KyphosResult<Self> {
        if points.len() != LANDMARK_COUNT {
            return Err(KyphosError::MalformedFrame {
                expected: LANDMARK_COUNT,
                actual: points.len(),
            });
        }
        let mut array = [Landmark::default(); LANDMARK_COUNT];
        array.copy_from_slice(points);
        Ok(LandmarkFrame { points: array })
    }

    /// Landmark at a body point
    #[inline]
    pub fn point(&self, point: BodyPoint) -> &Landmark {
        &self.points[point.index()]
    }

    /// Mutable landmark at a body point
    #[inline]
    pub fn point_mut(&mut self, point: BodyPoint) -> &mut Landmark {
        &mut self.points[point.index()]
    }

    /// All landmarks in index order
    #[inline]
    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }
}

impl Default for LandmarkFrame {
    fn default() -> Self {
        LandmarkFrame {
            points: [Landmark::default(); LANDMARK_COUNT],
        }
    }
}

impl std::ops::Index<BodyPoint> for LandmarkFrame {
    type Output = Landmark;

    #[inline]
    fn index(&self, point: BodyPoint) -> &Landmark {
        self.point(point)
    }
}
