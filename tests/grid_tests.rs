//! Grid tests - occupancy, locking and line clearing

use tui_gridfall::core::{valid_position, ActivePiece, Grid};
use tui_gridfall::types::{PieceKind, DEFAULT_COLS, DEFAULT_ROWS};

/// A row with every cell set except `hole` (if any).
fn row_with_hole(value: u8, hole: Option<usize>) -> Vec<u8> {
    (0..DEFAULT_COLS as usize)
        .map(|x| if Some(x) == hole { 0 } else { value })
        .collect()
}

#[test]
fn test_grid_new_empty() {
    let grid = Grid::default();
    assert_eq!(grid.cols(), DEFAULT_COLS);
    assert_eq!(grid.rows(), DEFAULT_ROWS);

    for y in 0..DEFAULT_ROWS as i32 {
        for x in 0..DEFAULT_COLS as i32 {
            assert!(!grid.is_occupied(x, y), "Cell ({}, {}) should be empty", x, y);
            assert_eq!(grid.get(x, y), Some(0));
        }
    }
}

#[test]
fn test_grid_get_out_of_bounds() {
    let grid = Grid::default();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(DEFAULT_COLS as i32, 0), None);
    assert_eq!(grid.get(0, DEFAULT_ROWS as i32), None);
}

#[test]
fn test_grid_set_and_occupancy() {
    let mut grid = Grid::default();
    assert!(grid.set(5, 10, 3));
    assert!(grid.is_occupied(5, 10));
    assert!(grid.set(5, 10, 0));
    assert!(!grid.is_occupied(5, 10));
    assert!(!grid.set(-1, 0, 1));
}

#[test]
fn test_lock_writes_type_id_plus_one_only_in_footprint() {
    let mut grid = Grid::default();
    grid.set(0, 19, 7);
    let before = grid.clone();

    // L at (2, 5): cells (4,5), (2,6), (3,6), (4,6).
    let piece = ActivePiece::spawn(PieceKind::L, 10).translated(-2, 5);
    grid.lock(&piece);

    let footprint = [(4, 5), (2, 6), (3, 6), (4, 6)];
    for y in 0..20 {
        for x in 0..10 {
            let expected = if footprint.contains(&(x, y)) {
                PieceKind::L.type_id() + 1
            } else {
                before.get(x, y).unwrap()
            };
            assert_eq!(grid.get(x, y), Some(expected), "cell ({}, {})", x, y);
        }
    }
}

#[test]
fn test_lock_drops_cells_above_top() {
    let mut grid = Grid::default();
    let piece = ActivePiece::spawn(PieceKind::I, 10).rotated().translated(0, -3);
    // Vertical I covering rows -3..=0; only row 0 is written.
    grid.lock(&piece);

    let written: Vec<_> = grid
        .cells()
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0)
        .collect();
    assert_eq!(written.len(), 1);
    assert_eq!(grid.get(piece.x, 0), Some(1));
}

#[test]
fn test_clear_full_lines_none() {
    let mut grid = Grid::default();
    grid.set(0, 19, 1);
    let before = grid.clone();
    assert_eq!(grid.clear_full_lines(), 0);
    assert_eq!(grid, before);
}

#[test]
fn test_clear_full_lines_preserves_order_of_remaining_rows() {
    // Rows 12..20 alternate between full rows and distinct partial rows.
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[12] = row_with_hole(1, Some(0));
    rows[13] = row_with_hole(2, None);
    rows[14] = row_with_hole(3, Some(4));
    rows[15] = row_with_hole(4, None);
    rows[16] = row_with_hole(5, None);
    rows[17] = row_with_hole(6, Some(9));
    rows[18] = row_with_hole(7, None);
    rows[19] = row_with_hole(1, Some(2));

    let mut grid = Grid::from_rows(&rows).unwrap();
    assert_eq!(grid.clear_full_lines(), 4);
    assert_eq!(grid.rows(), 20);

    let after = grid.to_rows();
    let mut expected = vec![vec![0u8; 10]; 20];
    expected[16] = rows[12].clone();
    expected[17] = rows[14].clone();
    expected[18] = rows[17].clone();
    expected[19] = rows[19].clone();
    assert_eq!(after, expected);
}

#[test]
fn test_clear_full_lines_more_than_four() {
    let mut rows = vec![vec![0u8; 10]; 20];
    for row in rows.iter_mut().skip(10) {
        *row = row_with_hole(2, None);
    }
    rows[9] = row_with_hole(3, Some(5));

    let mut grid = Grid::from_rows(&rows).unwrap();
    assert_eq!(grid.clear_full_lines(), 10);
    assert_eq!(grid.to_rows()[19], rows[9]);
    assert!(grid.cells()[..190].iter().all(|&v| v == 0));
}

#[test]
fn test_scenario_b_single_line_clear() {
    // Row 19 filled except column 5; a vertical I drops into the gap.
    let mut rows = vec![vec![0u8; 10]; 20];
    rows[19] = row_with_hole(4, Some(5));
    rows[18] = vec![0, 0, 0, 0, 0, 0, 0, 0, 0, 6];
    let mut grid = Grid::from_rows(&rows).unwrap();

    let mut piece = ActivePiece::spawn(PieceKind::I, 10).rotated();
    piece.x = 5;
    while valid_position(&grid, &piece.translated(0, 1)) {
        piece = piece.translated(0, 1);
    }
    assert_eq!(piece.y, 16);

    grid.lock(&piece);
    assert_eq!(grid.clear_full_lines(), 1);

    let after = grid.to_rows();
    assert_eq!(after[0], vec![0; 10]);
    // Former row 18 (the lone 6 plus the I cell) is now the bottom row.
    assert_eq!(after[19], vec![0, 0, 0, 0, 0, 1, 0, 0, 0, 6]);
    assert_eq!(after[18][5], 1);
    assert_eq!(after[17][5], 1);
    assert_eq!(after[16][5], 0);
}
