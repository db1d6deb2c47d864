use thiserror::Error;

/// Errors raised while constructing a [`crate::Grid`].
///
/// Gameplay itself never fails; these only guard construction from
/// configuration or explicit rows.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must each be within 4..=64, got {cols}x{rows}")]
    Dimensions { cols: usize, rows: usize },

    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },

    #[error("cell ({x}, {y}) holds {value}, expected 0..=7")]
    CellValue { x: usize, y: usize, value: u8 },
}
