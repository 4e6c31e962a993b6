use std::path::Path;

use glam::{DMat4, DVec2};
use serde::{Deserialize, Serialize};

use surfview_core::camera::{eye_pose, optimal_distance};
use surfview_core::rotate::SphericalDragger;
use surfview_core::scale::ScaleAccumulator;
use surfview_io::ExportError;
use surfview_render::compositor::{composite, Placement};
use surfview_render::engine::{Quality, RenderEngine};
use surfview_render::framebuffer::FrameBuffer;
use surfview_render::scheduler::{PassOutcome, RefreshState, RenderScheduler};

use crate::config::PanelConfig;

/// Keyboard zoom gesture the host adapter maps native keys onto.
/// Down/Minus conventionally map to [`ZoomKey::Out`], Up/Plus to
/// [`ZoomKey::In`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomKey {
    In,
    Out,
}

/// Snapshot of the panel's observable state, for persistence and for
/// verifying that operations like export leave interaction state intact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelSnapshot {
    pub render_width: u32,
    pub render_height: u32,
    pub zoom: f64,
    pub auto_resize: bool,
    pub refresh_state: RefreshState,
}

impl PanelSnapshot {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Interactive display panel for a ray-traced algebraic surface.
///
/// The panel owns the rotation/zoom state, the render target, and the
/// refresh schedule; the surface math lives behind `E`. All methods run on
/// the host's event thread — there is no interior locking because there is
/// no concurrent mutation.
pub struct SurferPanel<E: RenderEngine> {
    engine: E,
    dragger: SphericalDragger,
    scale: ScaleAccumulator,
    scheduler: RenderScheduler,
    image: FrameBuffer,
    render_size: (u32, u32),
    component_size: (u32, u32),
    auto_resize: bool,
    full_drag_degrees: f64,
}

impl<E: RenderEngine> SurferPanel<E> {
    pub fn new(engine: E) -> Self {
        Self::with_config(engine, PanelConfig::default())
    }

    pub fn with_config(engine: E, config: PanelConfig) -> Self {
        let render_size = (config.render_width.max(1), config.render_height.max(1));
        let mut dragger = SphericalDragger::new();
        dragger.set_x_speed(config.full_drag_degrees / render_size.0 as f64);
        dragger.set_y_speed(config.full_drag_degrees / render_size.1 as f64);

        Self {
            engine,
            dragger,
            scale: ScaleAccumulator::new(),
            scheduler: RenderScheduler::new(),
            image: FrameBuffer::new(render_size.0, render_size.1),
            render_size,
            component_size: render_size,
            auto_resize: config.auto_resize,
            full_drag_degrees: config.full_drag_degrees,
        }
    }

    // ── Renderer access ──────────────────────────────────────────────

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Mutable access for all renderer settings this panel does not own
    /// (surface expression, colors, lighting). The panel re-renders
    /// whatever the engine holds at the next refresh.
    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    // ── Event handlers ───────────────────────────────────────────────

    /// Pointer pressed: anchor a rotation drag.
    pub fn on_drag_start(&mut self, x: f64, y: f64) {
        self.dragger.start_drag(DVec2::new(x, y));
    }

    /// Pointer dragged: rotate and take the cheap render path.
    pub fn on_drag_move(&mut self, x: f64, y: f64) -> bool {
        self.dragger.drag_to(DVec2::new(x, y));
        self.scheduler.mark_interaction();
        true
    }

    /// Wheel turned by `units` notches; positive units zoom out.
    pub fn on_wheel(&mut self, units: f64) -> bool {
        self.scale.scale_by(units);
        self.scheduler.mark_interaction();
        true
    }

    /// Keyboard zoom, one step per press.
    pub fn on_key(&mut self, key: ZoomKey) -> bool {
        match key {
            ZoomKey::In => self.scale.scale_by(-1.0),
            ZoomKey::Out => self.scale.scale_by(1.0),
        }
        self.scheduler.mark_interaction();
        true
    }

    /// Component resized. Retunes drag speeds so a full drag stays a fixed
    /// sweep, and adopts the component size as the render size when
    /// auto-resize is enabled.
    pub fn on_resize(&mut self, width: u32, height: u32) -> bool {
        self.component_size = (width.max(1), height.max(1));
        self.dragger
            .set_x_speed(self.full_drag_degrees / self.component_size.0 as f64);
        self.dragger
            .set_y_speed(self.full_drag_degrees / self.component_size.1 as f64);

        if self.auto_resize {
            self.render_size = self.component_size;
            self.scheduler.mark_interaction();
            return true;
        }
        false
    }

    /// Run one scheduler pass: recreate the frame buffer if the logical
    /// size changed, then render at the owed quality. Returns whether the
    /// host should schedule another paint (the settled anti-aliased pass
    /// that follows a preview).
    pub fn on_paint_request(&mut self) -> bool {
        self.ensure_buffer();
        let Some(ticket) = self.scheduler.begin_pass() else {
            return false;
        };
        let rotation = self.dragger.rotation().inverse();
        let surface = self.scale.matrix();
        render_scene(
            &mut self.engine,
            rotation,
            surface,
            ticket.quality(),
            &mut self.image,
        );
        match self.scheduler.complete_pass(ticket) {
            PassOutcome::Committed { follow_up } => follow_up,
            PassOutcome::Discarded => true,
        }
    }

    /// Letterboxed, background-filled, bilinearly resampled blit of the
    /// current raster into a host-supplied buffer.
    pub fn composite_into(&self, dst: &mut FrameBuffer) {
        let placement = Placement::compute(
            dst.width(),
            dst.height(),
            self.image.width(),
            self.image.height(),
        );
        composite(&self.image, dst, &placement, self.engine.background());
    }

    // ── Public operations ────────────────────────────────────────────

    /// Change the logical render size. Ignored while auto-resize is
    /// enabled; a genuine change takes the cheap render path first.
    pub fn set_render_size(&mut self, width: u32, height: u32) {
        if self.auto_resize {
            return;
        }
        let size = (width.max(1), height.max(1));
        if size != self.render_size {
            self.render_size = size;
            self.scheduler.mark_interaction();
        }
    }

    pub fn render_size(&self) -> (u32, u32) {
        self.render_size
    }

    /// The size the panel asks its container for: the current render size.
    pub fn preferred_size(&self) -> (u32, u32) {
        self.render_size
    }

    /// Enable or disable following the component size. Enabling adopts the
    /// current (clamped) component size immediately.
    pub fn set_auto_resize(&mut self, auto_resize: bool) -> bool {
        self.auto_resize = auto_resize;
        if auto_resize {
            self.render_size = self.component_size;
            self.scheduler.mark_interaction();
            return true;
        }
        false
    }

    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    /// Absolute zoom; takes effect at the next refresh.
    pub fn set_zoom(&mut self, factor: f64) {
        self.scale.set_factor(factor);
    }

    pub fn zoom(&self) -> f64 {
        self.scale.factor()
    }

    /// Force one full-quality repaint of the current scene.
    pub fn request_refresh(&mut self) -> bool {
        self.scheduler.mark_refresh();
        true
    }

    pub fn refresh_state(&self) -> RefreshState {
        self.scheduler.state()
    }

    pub fn snapshot(&self) -> PanelSnapshot {
        PanelSnapshot {
            render_width: self.render_size.0,
            render_height: self.render_size.1,
            zoom: self.scale.factor(),
            auto_resize: self.auto_resize,
            refresh_state: self.scheduler.state(),
        }
    }

    /// Export the current view at `width` x `height` to `path` as PNG.
    ///
    /// The render happens out of band, at full quality, into a scratch
    /// buffer: the interactive raster, render size, and refresh schedule
    /// are untouched whether the write succeeds or fails.
    pub fn export_image(
        &mut self,
        path: impl AsRef<Path>,
        width: u32,
        height: u32,
    ) -> Result<(), ExportError> {
        let mut frame = FrameBuffer::new(width.max(1), height.max(1));
        let rotation = self.dragger.rotation().inverse();
        let surface = self.scale.matrix();
        render_scene(
            &mut self.engine,
            rotation,
            surface,
            Quality::AntiAliased,
            &mut frame,
        );
        surfview_io::save_png(path, &frame)
    }

    // ── Internals ────────────────────────────────────────────────────

    fn ensure_buffer(&mut self) {
        if self.image.dimensions() != self.render_size {
            log::debug!(
                "recreating frame buffer at {}x{}",
                self.render_size.0,
                self.render_size.1
            );
            self.image = FrameBuffer::new(self.render_size.0, self.render_size.1);
        }
    }
}

/// One render pass: push the transforms and quality, place the camera for
/// the engine's projection, and let the engine write the pixels.
///
/// The camera distance is recomputed every pass even though rotation and
/// zoom never change it; only the engine's projection does.
fn render_scene<E: RenderEngine>(
    engine: &mut E,
    rotation: DMat4,
    surface: DMat4,
    quality: Quality,
    target: &mut FrameBuffer,
) {
    engine.set_view_rotation(rotation);
    engine.set_surface_transform(surface);
    engine.set_quality(quality);

    let distance = optimal_distance(engine.projection());
    let (eye, look_at, up) = eye_pose(distance);
    engine.set_camera(eye, look_at, up);

    engine.render(target);
}
