//! Collision detection for candidate piece positions.

use crate::grid::Grid;
use crate::piece::ActivePiece;

/// Check a piece's occupied cells against the grid.
///
/// A cell is rejected when its column is outside `0..cols`, its row is at or
/// below the bottom edge, or it overlaps a locked cell. Rows above the top
/// edge (negative) are accepted on their own, so a piece may hang partly off
/// the top of the visible grid.
pub fn valid_position(grid: &Grid, piece: &ActivePiece) -> bool {
    let cols = grid.cols() as i32;
    let rows = grid.rows() as i32;

    piece.cells().iter().all(|&(nx, ny)| {
        if nx < 0 || nx >= cols || ny >= rows {
            return false;
        }
        ny < 0 || !grid.is_occupied(nx, ny)
    })
}
