//! Shape module - tetromino cell matrices and the rotation transform
//!
//! A shape is a small rectangular boolean matrix (1-4 cells per axis). The
//! seven canonical shapes are indexed by [`PieceKind`] type id.
//! Rotation is a pure matrix transform with no kick table: callers validate
//! the rotated candidate and either commit it or keep the old shape.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, MAX_SHAPE_DIM};

/// Offset of an occupied cell relative to the shape's top-left corner.
pub type CellOffset = (i32, i32);

/// Occupied offsets of a shape, row-major. Never allocates.
pub type ShapeCells = ArrayVec<CellOffset, { MAX_SHAPE_DIM * MAX_SHAPE_DIM }>;

/// Rectangular cell matrix of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    width: u8,
    height: u8,
    /// `cells[row][col]`; entries outside `width`x`height` stay `false`.
    cells: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from rows of `0`/`1` values.
    ///
    /// Panics (at compile time when used in a const) if the rows are empty,
    /// ragged, larger than 4x4, or contain no occupied cell.
    pub const fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        assert!(height >= 1 && height <= MAX_SHAPE_DIM, "shape height out of range");
        let width = rows[0].len();
        assert!(width >= 1 && width <= MAX_SHAPE_DIM, "shape width out of range");

        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut occupied = 0;
        let mut y = 0;
        while y < height {
            assert!(rows[y].len() == width, "shape rows must be rectangular");
            let mut x = 0;
            while x < width {
                if rows[y][x] != 0 {
                    cells[y][x] = true;
                    occupied += 1;
                }
                x += 1;
            }
            y += 1;
        }
        assert!(occupied > 0, "shape must have an occupied cell");

        Self {
            width: width as u8,
            height: height as u8,
            cells,
        }
    }

    /// Canonical spawn shape for a piece kind.
    pub fn of(kind: PieceKind) -> Self {
        SHAPES[kind.type_id() as usize]
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether the cell at column `x`, row `y` of the matrix is occupied.
    /// Coordinates outside the matrix are unoccupied.
    pub fn is_filled(&self, x: usize, y: usize) -> bool {
        x < self.width as usize && y < self.height as usize && self.cells[y][x]
    }

    /// Occupied cell offsets `(dx, dy)`, row by row.
    pub fn cells(&self) -> ShapeCells {
        let mut out = ShapeCells::new();
        for y in 0..self.height as usize {
            for x in 0..self.width as usize {
                if self.cells[y][x] {
                    out.push((x as i32, y as i32));
                }
            }
        }
        out
    }

    /// Rotate one clockwise step: reverse the row order, then transpose.
    ///
    /// The result is `height` wide and `width` tall. Four applications return
    /// the original matrix.
    pub fn rotated_cw(&self) -> Self {
        let (w, h) = (self.width as usize, self.height as usize);
        let mut cells = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in cells.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - c][r];
            }
        }
        Self {
            width: self.height,
            height: self.width,
            cells,
        }
    }

    /// Rows as `0`/`1` vectors, for debugging and tests.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| self.cells[y][x] as u8)
                    .collect()
            })
            .collect()
    }
}

/// The seven canonical shapes, indexed by type id.
pub const SHAPES: [Shape; 7] = [
    // I
    Shape::from_rows(&[&[1, 1, 1, 1]]),
    // O
    Shape::from_rows(&[&[1, 1], &[1, 1]]),
    // T
    Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
    // J
    Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
    // L
    Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
    // Z
    Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
    // S
    Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_canonical_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).cells().len(), 4, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_has_period_four() {
        for kind in PieceKind::ALL {
            let start = Shape::of(kind);
            let mut s = start;
            for _ in 0..4 {
                s = s.rotated_cw();
            }
            assert_eq!(s, start, "{:?}", kind);
        }
    }

    #[test]
    fn rotation_swaps_dimensions() {
        let i = Shape::of(PieceKind::I);
        let r = i.rotated_cw();
        assert_eq!((r.width(), r.height()), (1, 4));
        assert_eq!(r.to_rows(), vec![vec![1], vec![1], vec![1], vec![1]]);
    }

    #[test]
    fn rotation_is_clockwise() {
        // 100      11
        // 111  ->  10
        //          10
        let j = Shape::of(PieceKind::J).rotated_cw();
        assert_eq!(j.to_rows(), vec![vec![1, 1], vec![1, 0], vec![1, 0]]);
    }

    #[test]
    fn o_shape_is_rotation_invariant() {
        let o = Shape::of(PieceKind::O);
        assert_eq!(o.rotated_cw(), o);
    }

    #[test]
    fn cells_are_row_major_offsets() {
        let t = Shape::of(PieceKind::T);
        assert_eq!(t.cells().as_slice(), &[(1, 0), (0, 1), (1, 1), (2, 1)]);
        assert!(t.is_filled(1, 0));
        assert!(!t.is_filled(0, 0));
        assert!(!t.is_filled(3, 0));
    }
}
