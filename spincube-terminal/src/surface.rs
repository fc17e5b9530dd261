/// Fixed-size character grid the cube is rasterized into
use crossterm::{cursor, style::Print, QueueableCommand};
use std::io::Write;

use spincube_core::projection::{GRID_COLS, GRID_ROWS};

const BLANK: char = ' ';

/// A column-by-row grid of glyphs.
///
/// Writes outside the grid are dropped on the floor rather than reported:
/// geometry that leaves the viewport simply disappears, it never aborts a
/// line, a fill, or the frame.
pub struct CharGrid {
    cols: usize,
    rows: usize,
    cells: Vec<char>,
}

impl CharGrid {
    pub fn new(cols: usize, rows: usize) -> Self {
        Self {
            cols,
            rows,
            cells: vec![BLANK; cols * rows],
        }
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Reset every cell to blank
    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Write one cell; out-of-bounds coordinates are a no-op.
    pub fn put(&mut self, row: i32, col: i32, glyph: char) {
        if row < 0 || col < 0 {
            return;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return;
        }
        self.cells[row * self.cols + col] = glyph;
    }

    /// Read one cell, if it is on the grid
    pub fn get(&self, row: usize, col: usize) -> Option<char> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    /// Count of non-blank cells, mostly useful to sanity-check a frame
    pub fn lit_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != BLANK).count()
    }

    /// Queue the whole grid to the writer, one row per terminal line.
    ///
    /// The caller positions the cursor and flushes.
    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for row in 0..self.rows {
            let line: String = self.cells[row * self.cols..(row + 1) * self.cols]
                .iter()
                .collect();
            writer.queue(cursor::MoveTo(0, row as u16))?;
            writer.queue(Print(line))?;
        }
        Ok(())
    }
}

impl Default for CharGrid {
    fn default() -> Self {
        Self::new(GRID_COLS, GRID_ROWS)
    }
}
