use glam::{DMat4, DVec2};

/// Accumulates a 3D orientation from 2D pointer drags.
///
/// Horizontal motion spins the scene about the Y axis, vertical motion
/// about the X axis. Speeds are in degrees per pixel; the panel retunes
/// them on every resize so a drag across the full component is roughly a
/// half turn.
#[derive(Debug, Clone)]
pub struct SphericalDragger {
    rotation: DMat4,
    anchor: DVec2,
    x_speed: f64,
    y_speed: f64,
}

impl SphericalDragger {
    pub fn new() -> Self {
        Self {
            rotation: DMat4::IDENTITY,
            anchor: DVec2::ZERO,
            x_speed: 1.0,
            y_speed: 1.0,
        }
    }

    /// Degrees of rotation per pixel of horizontal drag.
    pub fn set_x_speed(&mut self, degrees_per_pixel: f64) {
        self.x_speed = degrees_per_pixel;
    }

    /// Degrees of rotation per pixel of vertical drag.
    pub fn set_y_speed(&mut self, degrees_per_pixel: f64) {
        self.y_speed = degrees_per_pixel;
    }

    /// Record the anchor of a new drag gesture.
    pub fn start_drag(&mut self, point: DVec2) {
        self.anchor = point;
    }

    /// Rotate by the anchor-to-`point` delta and advance the anchor.
    ///
    /// A zero delta contributes an identity increment. Never fails.
    pub fn drag_to(&mut self, point: DVec2) {
        let delta = point - self.anchor;
        self.anchor = point;

        let yaw = (delta.x * self.x_speed).to_radians();
        let pitch = (delta.y * self.y_speed).to_radians();
        let increment = DMat4::from_rotation_y(yaw) * DMat4::from_rotation_x(pitch);
        self.rotation = increment * self.rotation;
    }

    /// The accumulated orientation.
    pub fn rotation(&self) -> DMat4 {
        self.rotation
    }
}

impl Default for SphericalDragger {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_movement_is_identity() {
        let mut dragger = SphericalDragger::new();
        dragger.start_drag(DVec2::new(0.0, 0.0));
        dragger.drag_to(DVec2::new(0.0, 0.0));
        assert!(dragger.rotation().abs_diff_eq(DMat4::IDENTITY, 1e-12));
    }

    #[test]
    fn test_full_width_drag_is_half_turn() {
        let width = 480.0;
        let mut dragger = SphericalDragger::new();
        dragger.set_x_speed(180.0 / width);
        dragger.set_y_speed(180.0 / width);
        dragger.start_drag(DVec2::new(0.0, 100.0));
        dragger.drag_to(DVec2::new(width, 100.0));

        let expected = DMat4::from_rotation_y(std::f64::consts::PI);
        assert!(dragger.rotation().abs_diff_eq(expected, 1e-9));
    }

    #[test]
    fn test_increments_accumulate_from_last_point() {
        let mut split = SphericalDragger::new();
        split.start_drag(DVec2::new(0.0, 0.0));
        split.drag_to(DVec2::new(10.0, 0.0));
        split.drag_to(DVec2::new(30.0, 0.0));

        let mut whole = SphericalDragger::new();
        whole.start_drag(DVec2::new(0.0, 0.0));
        whole.drag_to(DVec2::new(30.0, 0.0));

        assert!(split.rotation().abs_diff_eq(whole.rotation(), 1e-9));
    }
}
