//! Character grid handed from the view to the terminal renderer.

pub use crate::types::Rgb;

/// Colors and weight of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
}

impl CellStyle {
    pub const fn colors(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
        }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::colors(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        CellStyle::default().into_cell(' ')
    }
}

/// Row-major grid of styled cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let mut fb = Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
        };
        fb.resize(width, height);
        fb
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Change the grid size. Same-size calls are free; the allocation is reused.
    pub fn resize(&mut self, width: u16, height: u16) {
        if (self.width, self.height) == (width, height) {
            return;
        }
        self.width = width;
        self.height = height;
        self.cells
            .resize(usize::from(width) * usize::from(height), Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cells of row `y` (empty when out of range).
    pub fn row(&self, y: u16) -> &[Cell] {
        if y >= self.height {
            return &[];
        }
        let w = usize::from(self.width);
        let start = usize::from(y) * w;
        &self.cells[start..start + w]
    }

    fn row_mut(&mut self, y: u16) -> Option<&mut [Cell]> {
        if y >= self.height {
            return None;
        }
        let w = usize::from(self.width);
        let start = usize::from(y) * w;
        Some(&mut self.cells[start..start + w])
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.row(y).get(usize::from(x)).copied()
    }

    /// Out-of-bounds writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(slot) = self.row_mut(y).and_then(|row| row.get_mut(usize::from(x))) {
            *slot = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, style.into_cell(ch));
    }

    /// Write `s` from (x, y), clipped at the right edge.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) {
        let Some(row) = self.row_mut(y) else {
            return;
        };
        let tail = row.get_mut(usize::from(x)..).unwrap_or_default();
        for (slot, ch) in tail.iter_mut().zip(s.chars()) {
            *slot = style.into_cell(ch);
        }
    }

    /// Text content of one row (for tests and debugging).
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|c| c.ch).collect()
    }
}
