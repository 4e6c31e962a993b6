//! # SurfView I/O
//!
//! The image-codec boundary: writes rendered frame buffers to disk as
//! lossless PNG. Export is the only blocking file I/O in the workspace;
//! it never touches interactive panel state.

pub mod png;

pub use png::{save_png, write_png, ExportError};
