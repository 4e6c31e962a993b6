//! # SurfView Panel
//!
//! The toolkit-agnostic widget core: a plain state-holding object that
//! displays a ray-traced algebraic surface, rotates it on drag, zooms it
//! on wheel and key events, letterboxes it into the component, and exports
//! it to PNG. A thin adapter per UI framework wires native events to the
//! explicit `on_*` methods of [`SurferPanel`]; every handler reports
//! whether the host should schedule a repaint.
//!
//! Only the surface and camera transforms are driven by this panel. All
//! other rendering settings (the surface expression, colors, lighting)
//! are configured by the embedding application directly on the engine,
//! and the panel simply re-renders whatever the engine currently holds.

pub mod config;
pub mod panel;

pub use config::PanelConfig;
pub use panel::{PanelSnapshot, SurferPanel, ZoomKey};
