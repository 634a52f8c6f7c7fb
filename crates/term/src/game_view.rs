//! GameView: maps a composed display canvas into a terminal framebuffer.
//!
//! Every terminal cell shows two display pixels stacked vertically using an
//! upper half block: foreground is the top pixel, background the bottom one.
//! This module is pure (no I/O). It can be unit-tested.

use crate::canvas::Canvas;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PIXELS_PER_COLUMN, PIXELS_PER_HALF_ROW};

const HALF_BLOCK: char = '▀';
const TITLE: &str = " tui-platformer ";
const HINT: &str = " q quit  F11/Esc fullscreen ";

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub struct GameView {
    /// Display pixels per terminal column.
    px_per_col: u32,
    /// Display pixels per half terminal row.
    px_per_half_row: u32,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(PIXELS_PER_COLUMN, PIXELS_PER_HALF_ROW)
    }
}

impl GameView {
    pub fn new(px_per_col: u32, px_per_half_row: u32) -> Self {
        Self {
            px_per_col: px_per_col.max(1),
            px_per_half_row: px_per_half_row.max(1),
        }
    }

    /// Cells needed to show a display canvas (border excluded).
    pub fn surface_cells(&self, display: &Canvas) -> (u16, u16) {
        let cols = display.width() / self.px_per_col;
        let rows = display.height() / (2 * self.px_per_half_row);
        (
            cols.min(u16::MAX as u32) as u16,
            rows.min(u16::MAX as u32) as u16,
        )
    }

    /// Render the display canvas into an existing framebuffer.
    ///
    /// With `framed` the surface starts at (1, 1) inside a titled border;
    /// otherwise it fills the viewport from (0, 0).
    pub fn render_into(
        &self,
        display: &Canvas,
        framed: bool,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (cols, rows) = self.surface_cells(display);
        let origin = if framed { 1 } else { 0 };

        let px_w = self.px_per_col as i64;
        let px_h = self.px_per_half_row as i64;
        for cy in 0..rows {
            let top_y = (2 * cy as i64) * px_h + px_h / 2;
            let bottom_y = top_y + px_h;
            for cx in 0..cols {
                let px = cx as i64 * px_w + px_w / 2;
                let top = display.get(px, top_y).unwrap_or_default();
                let bottom = display.get(px, bottom_y).unwrap_or_default();
                fb.put_char(
                    origin + cx,
                    origin + cy,
                    HALF_BLOCK,
                    CellStyle::colors(top, bottom),
                );
            }
        }

        if framed {
            let w = cols.saturating_add(2);
            let h = rows.saturating_add(2);
            self.draw_border(fb, 0, 0, w, h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, display: &Canvas, framed: bool, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(display, framed, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        if w < 2 || h < 2 {
            return;
        }
        let style = CellStyle::colors(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }

        let label = CellStyle { bold: true, ..style };
        if w as usize > TITLE.chars().count() + 2 {
            fb.put_str(x + 2, y, TITLE, label);
        }
        if w as usize > HINT.chars().count() + 2 {
            fb.put_str(x + 2, y + h - 1, HINT, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SKY: Rgb = Rgb::new(135, 206, 235);
    const RED: Rgb = Rgb::new(255, 0, 0);

    #[test]
    fn half_block_samples_top_and_bottom_pixels() {
        let view = GameView::new(2, 2);
        let mut display = Canvas::new(4, 4);
        display.fill(SKY);
        // Cell (0, 0): top pixel row 1, bottom pixel row 3.
        display.set(1, 3, RED);

        let fb = view.render(&display, false, Viewport::new(2, 1));
        let cell = fb.get(0, 0).unwrap();
        assert_eq!(cell.ch, HALF_BLOCK);
        assert_eq!(cell.style.fg, SKY);
        assert_eq!(cell.style.bg, RED);
    }

    #[test]
    fn surface_cells_follow_pixel_scale() {
        let view = GameView::default();
        assert_eq!(view.surface_cells(&Canvas::new(800, 600)), (80, 25));
        assert_eq!(view.surface_cells(&Canvas::new(5, 5)), (0, 0));
    }
}
