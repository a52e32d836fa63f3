//! KYPHOS Geometry Kernel - pure vector math over landmarks
//!
//! All functions here are total: degenerate inputs (zero-length vectors,
//! absent visibility) produce defined fallback values, never errors.
//!
//! Angles are planar: only x and y participate, z is ignored. The vertical
//! convention is a constructed reference point one unit below a vertex in
//! image space (`y + 1`, since image-space y grows downward). Measured
//! against that reference, an upright subject reads ~180 degrees for the
//! craniovertebral/head-neck angle (head above the shoulders) and
//! ~0 degrees for trunk flexion (hips below the spine).

use kyphos_core::{Landmark, VISIBILITY_THRESHOLD};

/// Angle at vertex `b` between rays `b->a` and `b->c`, in degrees [0,180]
///
/// Computed from the planar (x,y) dot product with the cosine clamped to
/// [-1,1] before `acos`. Returns 0 when either ray has zero magnitude.
pub fn angle_degrees(a: &Landmark, b: &Landmark, c: &Landmark) -> f32 {
    let (bax, bay) = (a.x - b.x, a.y - b.y);
    let (bcx, bcy) = (c.x - b.x, c.y - b.y);

    let mag_ba = (bax * bax + bay * bay).sqrt();
    let mag_bc = (bcx * bcx + bcy * bcy).sqrt();
    if mag_ba == 0.0 || mag_bc == 0.0 {
        return 0.0;
    }

    let cos = ((bax * bcx + bay * bcy) / (mag_ba * mag_bc)).clamp(-1.0, 1.0);
    cos.acos().to_degrees()
}

/// Planar Euclidean distance, (x,y) only
#[inline]
pub fn distance(a: &Landmark, b: &Landmark) -> f32 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}

/// Componentwise midpoint of two landmarks
///
/// Visibility of the result is the minimum of the inputs' visibilities
/// (absent treated as 0): the weaker confidence propagates, never the
/// stronger.
pub fn midpoint(a: &Landmark, b: &Landmark) -> Landmark {
    Landmark {
        x: (a.x + b.x) / 2.0,
        y: (a.y + b.y) / 2.0,
        z: (a.z + b.z) / 2.0,
        visibility: Some(a.visibility_or_zero().min(b.visibility_or_zero())),
        presence: None,
    }
}

/// Visibility gate at the standard 0.3 threshold
#[inline]
pub fn is_visible(landmark: &Landmark) -> bool {
    is_visible_at(landmark, VISIBILITY_THRESHOLD)
}

/// Visibility gate at an explicit threshold; absent visibility is 0
#[inline]
pub fn is_visible_at(landmark: &Landmark, threshold: f32) -> bool {
    landmark.visibility_or_zero() >= threshold
}

/// The fixed vertical reference point one unit below `p` in image space
///
/// Every vertical-relative angle in the pipeline is measured against this
/// reference (see the module docs for the resulting conventions).
pub fn vertical_reference(p: &Landmark) -> Landmark {
    Landmark {
        x: p.x,
        y: p.y + 1.0,
        z: p.z,
        visibility: Some(1.0),
        presence: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lm(x: f32, y: f32) -> Landmark {
        Landmark::new(x, y, 0.0)
    }

    #[test]
    fn test_right_angle() {
        let a = lm(1.0, 0.0);
        let b = lm(0.0, 0.0);
        let c = lm(0.0, 1.0);
        assert!((angle_degrees(&a, &b, &c) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_straight_line_is_180() {
        let a = lm(-1.0, 0.0);
        let b = lm(0.0, 0.0);
        let c = lm(1.0, 0.0);
        assert!((angle_degrees(&a, &b, &c) - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_degenerate_vertex_is_zero() {
        let b = lm(0.5, 0.5);
        let c = lm(0.7, 0.1);
        assert_eq!(angle_degrees(&b, &b, &c), 0.0);
        assert_eq!(angle_degrees(&c, &b, &b), 0.0);
        assert_eq!(angle_degrees(&b, &b, &b), 0.0);
    }

    #[test]
    fn test_z_is_ignored() {
        let a = Landmark::new(1.0, 0.0, 5.0);
        let b = Landmark::new(0.0, 0.0, -3.0);
        let c = Landmark::new(0.0, 1.0, 9.0);
        assert!((angle_degrees(&a, &b, &c) - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_distance_planar() {
        let a = Landmark::new(0.0, 3.0, 100.0);
        let b = Landmark::new(4.0, 0.0, -100.0);
        assert!((distance(&a, &b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_midpoint_components_and_visibility() {
        let a = Landmark::visible(0.0, 0.0, 1.0).with_visibility(0.9);
        let b = Landmark::visible(1.0, 0.5, 0.0).with_visibility(0.4);
        let m = midpoint(&a, &b);
        assert_eq!(m.x, 0.5);
        assert_eq!(m.y, 0.25);
        assert_eq!(m.z, 0.5);
        assert_eq!(m.visibility, Some(0.4));
    }

    #[test]
    fn test_midpoint_absent_visibility_is_zero() {
        let a = Landmark::new(0.0, 0.0, 0.0);
        let b = Landmark::visible(1.0, 1.0, 0.0);
        assert_eq!(midpoint(&a, &b).visibility, Some(0.0));
    }

    #[test]
    fn test_visibility_gate() {
        assert!(is_visible(&Landmark::new(0.0, 0.0, 0.0).with_visibility(0.3)));
        assert!(!is_visible(&Landmark::new(0.0, 0.0, 0.0).with_visibility(0.29)));
        assert!(!is_visible(&Landmark::new(0.0, 0.0, 0.0)));
        assert!(is_visible_at(
            &Landmark::new(0.0, 0.0, 0.0).with_visibility(0.1),
            0.1
        ));
    }

    #[test]
    fn test_vertical_reference_upright_conventions() {
        // Head above the shoulder vertex: angle against the downward
        // reference reads 180. Hips below the vertex read 0.
        let vertex = lm(0.5, 0.5);
        let head = lm(0.5, 0.3);
        let hips = lm(0.5, 0.8);
        let reference = vertical_reference(&vertex);
        assert!((angle_degrees(&reference, &vertex, &head) - 180.0).abs() < 1e-3);
        assert!(angle_degrees(&reference, &vertex, &hips).abs() < 1e-3);
    }

    proptest! {
        #[test]
        fn prop_angle_in_bounds(
            ax in -2.0f32..2.0, ay in -2.0f32..2.0,
            bx in -2.0f32..2.0, by in -2.0f32..2.0,
            cx in -2.0f32..2.0, cy in -2.0f32..2.0,
        ) {
            let angle = angle_degrees(&lm(ax, ay), &lm(bx, by), &lm(cx, cy));
            prop_assert!((0.0..=180.0).contains(&angle));
        }

        #[test]
        fn prop_angle_symmetric_in_rays(
            ax in -2.0f32..2.0, ay in -2.0f32..2.0,
            bx in -2.0f32..2.0, by in -2.0f32..2.0,
            cx in -2.0f32..2.0, cy in -2.0f32..2.0,
        ) {
            let a = lm(ax, ay);
            let b = lm(bx, by);
            let c = lm(cx, cy);
            let d = (angle_degrees(&a, &b, &c) - angle_degrees(&c, &b, &a)).abs();
            prop_assert!(d < 1e-3);
        }

        #[test]
        fn prop_midpoint_visibility_is_min(va in 0.0f32..1.0, vb in 0.0f32..1.0) {
            let a = Landmark::new(0.0, 0.0, 0.0).with_visibility(va);
            let b = Landmark::new(1.0, 1.0, 0.0).with_visibility(vb);
            prop_assert_eq!(midpoint(&a, &b).visibility, Some(va.min(vb)));
        }
    }
}
