//! Active piece - the single falling tetromino
//!
//! Movement and rotation produce candidate pieces; nothing here checks the
//! grid. [`crate::session::GameSession`] validates each candidate with
//! [`crate::collision::valid_position`] and commits it or drops it.

use crate::shape::{Shape, ShapeCells};
use crate::types::PieceKind;

/// The falling piece: shape matrix, top-left anchor in grid coordinates, kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
    pub kind: PieceKind,
}

impl ActivePiece {
    /// Create a piece at its spawn anchor: horizontally centered, top row 0.
    pub fn spawn(kind: PieceKind, cols: u16) -> Self {
        let shape = Shape::of(kind);
        Self {
            shape,
            x: cols as i32 / 2 - shape.width() as i32 / 2,
            y: 0,
            kind,
        }
    }

    pub fn type_id(&self) -> u8 {
        self.kind.type_id()
    }

    /// Candidate moved by `(dx, dy)`.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Candidate rotated one clockwise step around the same anchor.
    #[must_use]
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotated_cw(),
            ..*self
        }
    }

    /// Absolute grid coordinates of the occupied cells. Rows may be negative.
    pub fn cells(&self) -> ShapeCells {
        let mut cells = self.shape.cells();
        for (dx, dy) in cells.iter_mut() {
            *dx += self.x;
            *dy += self.y;
        }
        cells
    }
}
