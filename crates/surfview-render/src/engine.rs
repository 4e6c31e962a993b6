use glam::{DMat4, DVec3};
use serde::{Deserialize, Serialize};

use surfview_core::camera::Projection;
use surfview_core::color::Rgb;

use crate::framebuffer::FrameBuffer;

/// Sampling quality of a render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Quality {
    /// Cheap 2x2 grid, used while the user is interacting.
    Preview,
    /// 4x4 grid, used for the settled final image and for export.
    AntiAliased,
}

impl Quality {
    /// Edge length of the supersampling grid the engine should use.
    pub fn sample_grid(self) -> u32 {
        match self {
            Quality::Preview => 2,
            Quality::AntiAliased => 4,
        }
    }
}

/// The external surface renderer this panel orchestrates.
///
/// Implementations ray-march an implicit polynomial surface into the lent
/// frame buffer. Everything about the surface itself (expression, colors,
/// lighting) is configured on the implementation directly; the panel only
/// drives the camera, the transforms, the quality, and the buffer.
pub trait RenderEngine {
    /// Current camera projection kind.
    fn projection(&self) -> Projection;

    /// Color used to clear the frame and to fill letterbox margins.
    fn background(&self) -> Rgb;

    /// Orientation of the scene. The panel passes the inverse of the
    /// accumulated drag rotation.
    fn set_view_rotation(&mut self, rotation: DMat4);

    /// Transform applied to the surface itself; this is where zoom lives.
    fn set_surface_transform(&mut self, transform: DMat4);

    fn set_quality(&mut self, quality: Quality);

    fn set_camera(&mut self, eye: DVec3, target: DVec3, up: DVec3);

    /// Write packed `0x00RRGGBB` pixels into the buffer, in place. The
    /// buffer stays owned by the caller.
    fn render(&mut self, target: &mut FrameBuffer);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quality_sample_grids() {
        assert_eq!(Quality::Preview.sample_grid(), 2);
        assert_eq!(Quality::AntiAliased.sample_grid(), 4);
    }
}
