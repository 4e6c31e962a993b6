use std::fs::File;
use std::io::{self, BufWriter, Seek, Write};
use std::path::Path;

use image::{ImageBuffer, ImageFormat, Rgb};
use thiserror::Error;

use surfview_render::FrameBuffer;

/// Errors surfaced while exporting a rendered frame.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("a {width}x{height} frame buffer cannot back an image")]
    InvalidBuffer { width: u32, height: u32 },
}

/// Encode `frame` as PNG into an arbitrary sink.
pub fn write_png<W: Write + Seek>(writer: &mut W, frame: &FrameBuffer) -> Result<(), ExportError> {
    let (width, height) = frame.dimensions();
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidBuffer { width, height });
    }
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width, height, frame.to_rgb_bytes())
            .ok_or(ExportError::InvalidBuffer { width, height })?;
    img.write_to(writer, ImageFormat::Png)?;
    Ok(())
}

/// Write `frame` to `path` as PNG.
///
/// The output handle lives only inside this call, so it is closed on every
/// path, success or failure.
pub fn save_png(path: impl AsRef<Path>, frame: &FrameBuffer) -> Result<(), ExportError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_png(&mut writer, frame)?;
    writer.flush()?;

    let (width, height) = frame.dimensions();
    log::info!("exported {}x{} frame to {}", width, height, path.display());
    Ok(())
}
