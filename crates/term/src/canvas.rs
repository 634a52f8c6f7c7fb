//! Pixel canvas - software surfaces for composing and zooming frames.
//!
//! Coordinates are signed so sprites and platforms can be partially (or
//! entirely) off surface; everything is clipped on write.

use crate::sprite::Sprite;
use crate::types::Rgb;

/// RGB pixel buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::default(); (width as usize) * (height as usize)],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Resize, keeping the allocation when the size is unchanged.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        self.pixels
            .resize((width as usize) * (height as usize), Rgb::default());
    }

    #[inline]
    fn idx(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Rgb> {
        self.idx(x, y).map(|i| self.pixels[i])
    }

    pub fn set(&mut self, x: i64, y: i64, color: Rgb) {
        if let Some(i) = self.idx(x, y) {
            self.pixels[i] = color;
        }
    }

    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color);
    }

    /// Fill a rectangle given in (possibly fractional) pixels. Edges are floored.
    pub fn fill_rect(&mut self, x: f32, y: f32, w: f32, h: f32, color: Rgb) {
        let x0 = (x.floor() as i64).max(0);
        let y0 = (y.floor() as i64).max(0);
        let x1 = ((x + w).floor() as i64).min(self.width as i64);
        let y1 = ((y + h).floor() as i64).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for py in y0 as usize..y1 as usize {
            let row = py * stride;
            self.pixels[row + x0 as usize..row + x1 as usize].fill(color);
        }
    }

    /// Draw a sprite with its top-left corner at (x, y). Transparent pixels are skipped.
    pub fn blit_sprite(&mut self, sprite: &Sprite, x: f32, y: f32) {
        let ox = x.floor() as i64;
        let oy = y.floor() as i64;
        for sy in 0..sprite.height() {
            for sx in 0..sprite.width() {
                if let Some(color) = sprite.pixel(sx, sy) {
                    self.set(ox + sx as i64, oy + sy as i64, color);
                }
            }
        }
    }

    /// Copy `src` scaled up by `zoom` (nearest neighbour) with its top-left at (dx, dy).
    ///
    /// Destination pixels outside the scaled source keep their current color.
    pub fn blit_zoomed(&mut self, src: &Canvas, zoom: u32, dx: i64, dy: i64) {
        let zoom = zoom.max(1) as i64;
        let src_w = src.width as i64;
        let src_h = src.height as i64;

        // Destination span covered by the scaled source, clipped to this canvas.
        let x0 = dx.max(0);
        let y0 = dy.max(0);
        let x1 = (dx + src_w * zoom).min(self.width as i64);
        let y1 = (dy + src_h * zoom).min(self.height as i64);
        if x0 >= x1 || y0 >= y1 {
            return;
        }

        let stride = self.width as usize;
        for py in y0..y1 {
            let sy = (py - dy) / zoom;
            let src_row = (sy * src_w) as usize;
            let dst_row = py as usize * stride;
            for px in x0..x1 {
                let sx = (px - dx) / zoom;
                self.pixels[dst_row + px as usize] = src.pixels[src_row + sx as usize];
            }
        }
    }
}
