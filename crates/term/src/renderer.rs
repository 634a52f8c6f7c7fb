//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are encoded into a reusable byte buffer and written in one go. After
//! the first full redraw only changed cell runs are re-emitted.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
    key_releases: bool,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(256 * 1024),
            key_releases: false,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;

        // Key release events let held keys end exactly when the key goes up.
        self.key_releases = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if self.key_releases {
            self.buf.queue(PushKeyboardEnhancementFlags(
                KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
                    | KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
            ))?;
        }
        self.flush_buf()?;
        tracing::debug!(key_releases = self.key_releases, "entered terminal");
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        if self.key_releases {
            self.buf.queue(PopKeyboardEnhancementFlags)?;
            self.key_releases = false;
        }
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Whether the terminal reports key release events.
    pub fn reports_key_releases(&self) -> bool {
        self.key_releases
    }

    /// Force the next draw to be a full redraw.
    ///
    /// Useful on terminal resize events.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call `fb` holds the previous frame and can be overwritten.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut shown = match self.last.take() {
            Some(prev) => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            None => {
                encode_full_into(fb, &mut self.buf)?;
                FrameBuffer::new(fb.width(), fb.height())
            }
        };
        self.flush_buf()?;

        // Keep the frame now on screen for the next diff; the caller gets the stale buffer.
        shown.resize(fb.width(), fb.height());
        std::mem::swap(&mut shown, fb);
        self.last = Some(shown);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut pen = Pen::default();
    for y in 0..fb.height() {
        let row = fb.row(y);
        if !row.is_empty() {
            out.queue(cursor::MoveTo(0, y))?;
            pen.print_cells(out, row)?;
        }
    }
    pen.finish(out)
}

/// Encode a diff redraw (changed runs) into `out`.
///
/// Frames of different sizes are redrawn in full. Identical frames encode to
/// nothing.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut pen = Pen::default();
    for y in 0..next.height() {
        let (old, new) = (prev.row(y), next.row(y));
        if old == new {
            continue;
        }
        for (start, end) in ChangedRuns::new(old, new) {
            out.queue(cursor::MoveTo(start as u16, y))?;
            pen.print_cells(out, &new[start..end])?;
        }
    }
    if pen.used() {
        pen.finish(out)?;
    }
    Ok(())
}

/// Tracks the terminal's current style so only deltas are emitted.
#[derive(Default)]
struct Pen {
    current: Option<CellStyle>,
}

impl Pen {
    fn used(&self) -> bool {
        self.current.is_some()
    }

    fn print_cells(&mut self, out: &mut Vec<u8>, cells: &[Cell]) -> Result<()> {
        for cell in cells {
            self.set_style(out, cell.style)?;
            out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
        let prev = self.current.replace(style);
        if prev == Some(style) {
            return Ok(());
        }

        // Resetting attributes also resets colors, so repaint both after it.
        let weight_changed = prev.map_or(true, |p| p.bold != style.bold);
        if weight_changed {
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
        }
        if weight_changed || prev.map_or(true, |p| p.fg != style.fg) {
            out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        }
        if weight_changed || prev.map_or(true, |p| p.bg != style.bg) {
            out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        }
        Ok(())
    }

    fn finish(&mut self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        self.current = None;
        Ok(())
    }
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Half-open `[start, end)` column ranges where two equally long rows differ.
struct ChangedRuns<'a> {
    old: &'a [Cell],
    new: &'a [Cell],
    x: usize,
}

impl<'a> ChangedRuns<'a> {
    fn new(old: &'a [Cell], new: &'a [Cell]) -> Self {
        Self { old, new, x: 0 }
    }

    fn differs(&self, x: usize) -> bool {
        self.old.get(x) != self.new.get(x)
    }
}

impl Iterator for ChangedRuns<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let len = self.new.len();
        while self.x < len && !self.differs(self.x) {
            self.x += 1;
        }
        if self.x >= len {
            return None;
        }
        let start = self.x;
        while self.x < len && self.differs(self.x) {
            self.x += 1;
        }
        Some((start, self.x))
    }
}
