//! # SurfView Render
//!
//! The panel's renderer-facing machinery: the [`RenderEngine`] seam behind
//! which the actual ray-marching lives, the exclusively owned
//! [`FrameBuffer`] the engine writes into, the two-phase
//! [`RenderScheduler`], and the [`compositor`] math that maps the
//! fixed-size raster onto a variable-size component without distortion.

pub mod compositor;
pub mod engine;
pub mod framebuffer;
pub mod scheduler;

pub use compositor::Placement;
pub use engine::{Quality, RenderEngine};
pub use framebuffer::FrameBuffer;
pub use scheduler::{PassOutcome, PassTicket, RefreshState, RenderScheduler};
