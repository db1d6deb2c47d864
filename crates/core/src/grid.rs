//! Grid module - the playfield of locked cells
//!
//! The grid is a COLS x ROWS matrix of cell values where `0` is empty and
//! `1..=7` is the locked piece's type id + 1.
//! Uses a flat row-major vector; line clears compact rows in place.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use crate::error::GridError;
use crate::piece::ActivePiece;
use crate::types::{CellValue, DEFAULT_COLS, DEFAULT_ROWS, EMPTY, MAX_GRID_DIM, MIN_GRID_DIM};

/// Largest valid cell value (type id 6 + 1).
const MAX_CELL_VALUE: CellValue = 7;

/// The playfield - flat row-major storage of locked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cols: u16,
    rows: u16,
    /// Row-major cells (y * cols + x)
    cells: Vec<CellValue>,
}

impl Grid {
    /// Create an empty grid.
    pub fn new(cols: u16, rows: u16) -> Result<Self, GridError> {
        check_dimensions(cols as usize, rows as usize)?;
        Ok(Self {
            cols,
            rows,
            cells: vec![EMPTY; cols as usize * rows as usize],
        })
    }

    /// Build a grid from explicit rows, top row first.
    pub fn from_rows(rows: &[Vec<CellValue>]) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        check_dimensions(width, height)?;

        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    len: row.len(),
                    expected: width,
                });
            }
            for (x, &value) in row.iter().enumerate() {
                if value > MAX_CELL_VALUE {
                    return Err(GridError::CellValue { x, y, value });
                }
            }
            cells.extend_from_slice(row);
        }

        Ok(Self {
            cols: width as u16,
            rows: height as u16,
            cells,
        })
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some((y as usize) * (self.cols as usize) + (x as usize))
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    /// Get cell value at (x, y), `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<CellValue> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y).
    /// Returns false if out of bounds or the value is not a cell value.
    pub fn set(&mut self, x: i32, y: i32, value: CellValue) -> bool {
        if value > MAX_CELL_VALUE {
            return false;
        }
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Whether the cell holds a locked block.
    ///
    /// Callers are expected to bound-check first; out-of-range coordinates
    /// report `false`.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(v) if v != EMPTY)
    }

    /// Cells of row `y`.
    pub fn row(&self, y: usize) -> &[CellValue] {
        let start = y * self.cols as usize;
        &self.cells[start..start + self.cols as usize]
    }

    /// Check if a row has no empty cell.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        self.row(y).iter().all(|&v| v != EMPTY)
    }

    /// Write the piece's cells into the grid as `type id + 1`.
    ///
    /// Cells above the top edge (negative row) are dropped. The piece is
    /// expected to be in a valid position; any other out-of-range cell is
    /// skipped as well.
    pub fn lock(&mut self, piece: &ActivePiece) {
        let value = piece.kind.cell_value();
        for (x, y) in piece.cells() {
            if y < 0 {
                continue;
            }
            self.set(x, y, value);
        }
    }

    /// Remove all full rows and return how many were removed.
    ///
    /// Remaining rows keep their relative order and settle at the bottom;
    /// the freed rows at the top are emptied. Two-pointer scan, no allocation.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.cols as usize;
        let mut write_y = self.rows as usize;
        let mut cleared = 0;

        // Scan from bottom to top
        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, write_y * width);
                }
            }
        }

        self.cells[..write_y * width].fill(EMPTY);

        cleared
    }

    /// Flat row-major cells.
    pub fn cells(&self) -> &[CellValue] {
        &self.cells
    }

    /// Rows as vectors, top row first.
    pub fn to_rows(&self) -> Vec<Vec<CellValue>> {
        self.cells.chunks(self.cols as usize).map(<[_]>::to_vec).collect()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            cells: vec![EMPTY; DEFAULT_COLS as usize * DEFAULT_ROWS as usize],
        }
    }
}

fn check_dimensions(cols: usize, rows: usize) -> Result<(), GridError> {
    let range = MIN_GRID_DIM as usize..=MAX_GRID_DIM as usize;
    if range.contains(&cols) && range.contains(&rows) {
        Ok(())
    } else {
        Err(GridError::Dimensions { cols, rows })
    }
}
