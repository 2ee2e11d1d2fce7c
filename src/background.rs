// Loads the picture that sits underneath the annotation.
// Visual expectation: the returned buffer is exactly what you see at the
// top-left corner of the canvas before any click.

use crate::error::Error;
use crate::types::{FrameBuffer, WHITE};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Decoded background raster, owned by the canvas controller.
/// Released once, when the controller (and so this value) is dropped.
pub struct BackgroundImage {
    frame: FrameBuffer,
    source: PathBuf,
}

impl BackgroundImage {
    /// Read and decode `path` into 0x00RRGGBB pixels.
    /// Transparent areas are blended over the white canvas colour, since
    /// minifb has no alpha channel.
    pub fn load(path: &Path) -> Result<Self, Error> {
        // 1) Decode whatever format the file is in (PNG for the bundled asset).
        let decoded = image::open(path)
            .map_err(|e| Error::ImageLoad(format!("{}: {e}", path.display())))?;

        // 2) Normalise to RGBA so every source format takes the same path below.
        let rgba = decoded.to_rgba8();
        let (w, h) = rgba.dimensions();

        // 3) Pack each pixel as 0x00RRGGBB, compositing alpha over white.
        let mut out = Vec::with_capacity((w as usize) * (h as usize));
        for (_x, _y, pixel) in rgba.enumerate_pixels() {
            let a = pixel[3] as u32;
            let r = over_white(pixel[0], a);
            let g = over_white(pixel[1], a);
            let b = over_white(pixel[2], a);
            out.push((r << 16) | (g << 8) | b);
        }

        info!(path = %path.display(), width = w, height = h, "loaded background image");

        Ok(Self {
            frame: FrameBuffer { width: w as usize, height: h as usize, pixels: out },
            source: path.to_path_buf(),
        })
    }

    /// Wrap an already decoded buffer.
    pub fn from_frame(frame: FrameBuffer, source: impl Into<PathBuf>) -> Self {
        Self { frame, source: source.into() }
    }

    pub fn width(&self) -> usize {
        self.frame.width
    }

    pub fn height(&self) -> usize {
        self.frame.height
    }

    pub fn frame(&self) -> &FrameBuffer {
        &self.frame
    }
}

impl Drop for BackgroundImage {
    fn drop(&mut self) {
        debug!(path = %self.source.display(), "released background image");
    }
}

#[inline]
fn over_white(channel: u8, alpha: u32) -> u32 {
    let bg = WHITE & 0xFF;
    (channel as u32 * alpha + bg * (255 - alpha) + 127) / 255
}
