use glam::{DMat4, DVec3};

/// Zoom step base: one wheel notch or key press multiplies the cumulative
/// scale by this factor (or its inverse).
pub const ZOOM_BASE: f64 = 1.0625;

/// Cumulative uniform-scale transform applied to the surface.
///
/// Composition is multiplicative, so zoom feels exponential regardless of
/// step size, and `scale_by(u)` followed by `scale_by(-u)` is a no-op up
/// to floating-point error. The factor is unbounded in both directions;
/// callers that want limits impose their own.
#[derive(Debug, Clone)]
pub struct ScaleAccumulator {
    matrix: DMat4,
}

impl ScaleAccumulator {
    pub fn new() -> Self {
        Self {
            matrix: DMat4::IDENTITY,
        }
    }

    /// Multiply `ZOOM_BASE^units` into the cumulative scale.
    pub fn scale_by(&mut self, units: f64) {
        let step = ZOOM_BASE.powf(units);
        self.matrix *= DMat4::from_scale(DVec3::splat(step));
    }

    /// Reset to an absolute uniform scale.
    pub fn set_factor(&mut self, factor: f64) {
        self.matrix = DMat4::from_scale(DVec3::splat(factor));
    }

    /// The current uniform scale factor.
    pub fn factor(&self) -> f64 {
        self.matrix.x_axis.x
    }

    /// The scale as a 4x4 transform, ready for the renderer.
    pub fn matrix(&self) -> DMat4 {
        self.matrix
    }
}

impl Default for ScaleAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverse_steps_cancel() {
        let mut scale = ScaleAccumulator::new();
        scale.scale_by(1.0);
        scale.scale_by(-1.0);
        assert!((scale.factor() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_steps_compose_multiplicatively() {
        let mut scale = ScaleAccumulator::new();
        scale.scale_by(1.0);
        scale.scale_by(1.0);
        assert!((scale.factor() - ZOOM_BASE * ZOOM_BASE).abs() < 1e-12);
    }

    #[test]
    fn test_set_factor_is_absolute() {
        let mut scale = ScaleAccumulator::new();
        scale.scale_by(3.0);
        scale.set_factor(2.5);
        assert!((scale.factor() - 2.5).abs() < 1e-12);
        assert!(scale
            .matrix()
            .abs_diff_eq(DMat4::from_scale(DVec3::splat(2.5)), 1e-12));
    }
}
