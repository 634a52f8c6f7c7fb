//! Display target state: window mode and terminal size.
//!
//! The composed frame is blitted onto a display surface measured in pixels.
//! In the terminal every column is `PIXELS_PER_COLUMN` pixels wide and every
//! row holds two pixel rows (upper/lower half block) of `PIXELS_PER_HALF_ROW`
//! pixels each, so an 80x25 window covers the 800x600 screen.

use tracing::info;

use crate::types::{PIXELS_PER_COLUMN, PIXELS_PER_HALF_ROW};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Framed window with a border inside the terminal
    Windowed,
    /// Surface covers the whole terminal
    Fullscreen,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    mode: DisplayMode,
    width: u16,
    height: u16,
}

impl DisplayState {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            mode: DisplayMode::Windowed,
            width,
            height,
        }
    }

    pub fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub fn is_fullscreen(&self) -> bool {
        self.mode == DisplayMode::Fullscreen
    }

    /// Terminal size in cells.
    pub fn terminal_size(&self) -> (u16, u16) {
        (self.width, self.height)
    }

    pub fn toggle_fullscreen(&mut self) -> DisplayMode {
        self.mode = match self.mode {
            DisplayMode::Windowed => DisplayMode::Fullscreen,
            DisplayMode::Fullscreen => DisplayMode::Windowed,
        };
        info!(mode = ?self.mode, "display mode changed");
        self.mode
    }

    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
    }

    /// Drawable surface in cells (the window border is excluded).
    pub fn surface_cells(&self) -> (u16, u16) {
        match self.mode {
            DisplayMode::Windowed => (self.width.saturating_sub(2), self.height.saturating_sub(2)),
            DisplayMode::Fullscreen => (self.width, self.height),
        }
    }

    /// Drawable surface in display pixels.
    pub fn surface_pixels(&self) -> (u32, u32) {
        let (cols, rows) = self.surface_cells();
        (
            cols as u32 * PIXELS_PER_COLUMN,
            rows as u32 * 2 * PIXELS_PER_HALF_ROW,
        )
    }
}
