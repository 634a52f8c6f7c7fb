//! Sprite asset - the player image.
//!
//! Loaded once at startup. A missing or undecodable file is fatal: the error
//! names the path and bubbles up to `main`.

use std::path::Path;

use anyhow::{bail, Context, Result};
use image::{ImageFormat, RgbaImage};

use crate::types::Rgb;

/// Pixels with alpha below this are not drawn.
const ALPHA_CUTOFF: u8 = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sprite {
    width: u32,
    height: u32,
    pixels: Vec<Option<Rgb>>,
}

impl Sprite {
    /// Decode an image file (format from the extension/contents).
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path)
            .with_context(|| format!("failed to load sprite {}", path.display()))?;
        Self::from_rgba(&image.to_rgba8())
            .with_context(|| format!("invalid sprite {}", path.display()))
    }

    pub fn from_png_bytes(bytes: &[u8]) -> Result<Self> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png)
            .context("failed to decode PNG sprite")?;
        Self::from_rgba(&image.to_rgba8())
    }

    pub fn from_rgba(image: &RgbaImage) -> Result<Self> {
        let pixels = image
            .pixels()
            .map(|p| {
                let [r, g, b, a] = p.0;
                (a >= ALPHA_CUTOFF).then_some(Rgb::new(r, g, b))
            })
            .collect();
        Self::from_pixels(image.width(), image.height(), pixels)
    }

    /// Build from row-major pixels; `None` is transparent.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Option<Rgb>>) -> Result<Self> {
        if width == 0 || height == 0 {
            bail!("sprite has no pixels ({width}x{height})");
        }
        if pixels.len() != (width as usize) * (height as usize) {
            bail!(
                "sprite pixel count {} does not match {width}x{height}",
                pixels.len()
            );
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels[(y * self.width + x) as usize]
    }
}
