//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds the
//! color of a locked piece. Uses a flat row-major vector allocated once; only
//! cell contents change afterwards.
//! Coordinates: (x, y) where x ranges 0..width (left to right) and y ranges
//! 0..height (bottom to top). Row 0 is the bottom row.

use crate::types::{Cell, Rgb, BOARD_HEIGHT, BOARD_WIDTH};

/// The game board
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (y * width + x), bottom row first
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Check if (x, y) lies on the board
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Fill a cell with a color. Returns false if out of bounds.
    pub fn fill(&mut self, x: i32, y: i32, color: Rgb) -> bool {
        self.set(x, y, Some(color))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        y < self.height && self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Indices of all full rows, ascending
    pub fn clearable_rows(&self) -> Vec<usize> {
        (0..self.height).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Remove the given rows and add as many empty rows at the top.
    ///
    /// Rows above a removed row move down by the number of removed rows below
    /// them; the relative order of the surviving rows is unchanged. Indices
    /// are processed from the highest down, so every index refers to the board
    /// as it was before the call. Out-of-range and duplicate indices are ignored.
    pub fn clear_rows(&mut self, rows: &[usize]) {
        let mut rows: Vec<usize> = rows.iter().copied().filter(|&y| y < self.height).collect();
        rows.sort_unstable_by(|a, b| b.cmp(a));
        rows.dedup();

        for &y in &rows {
            let start = y * self.width;
            self.cells.drain(start..start + self.width);
        }
        self.cells.resize(self.width * self.height, None);
    }

    /// Get a reference to the internal cells, bottom row first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}
