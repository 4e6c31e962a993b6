use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Camera projection kind reported by the render engine.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Projection {
    Orthographic,
    Perspective {
        /// Vertical field of view in degrees.
        fov_y_deg: f64,
    },
}

/// Distance from the origin at which a unit-radius surface fills the frame.
///
/// For a perspective camera the unit sphere's silhouette spans the vertical
/// field of view exactly when the eye sits `1 / sin(fov/2)` from the
/// origin. The value diverges as the field of view approaches 360 degrees;
/// that boundary is not guarded here.
///
/// # Panics
///
/// On a projection kind this panel was not built against. That is a
/// mismatch between the panel and its renderer, not a runtime condition.
#[allow(unreachable_patterns)] // kinds added behind non_exhaustive must fail loudly
pub fn optimal_distance(projection: Projection) -> f64 {
    match projection {
        Projection::Orthographic => 1.0,
        Projection::Perspective { fov_y_deg } => 1.0 / (fov_y_deg.to_radians() / 2.0).sin(),
        _ => panic!("unsupported camera projection: {projection:?}"),
    }
}

/// Standard eye pose at `distance`: on the +Z axis, looking at the origin,
/// +Y up. Zoom lives in the surface transform, never in the camera, so the
/// pose depends only on the projection.
pub fn eye_pose(distance: f64) -> (DVec3, DVec3, DVec3) {
    (DVec3::new(0.0, 0.0, distance), DVec3::ZERO, DVec3::Y)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orthographic_distance_is_fixed() {
        assert!((optimal_distance(Projection::Orthographic) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_perspective_distance_for_90_degrees() {
        let d = optimal_distance(Projection::Perspective { fov_y_deg: 90.0 });
        assert!((d - 1.0 / (45.0f64.to_radians()).sin()).abs() < 1e-12);
        assert!((d - std::f64::consts::SQRT_2).abs() < 1e-12);
    }

    #[test]
    fn test_eye_pose_looks_at_origin() {
        let (eye, target, up) = eye_pose(2.0);
        assert_eq!(eye, DVec3::new(0.0, 0.0, 2.0));
        assert_eq!(target, DVec3::ZERO);
        assert_eq!(up, DVec3::Y);
    }
}
