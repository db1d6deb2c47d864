//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, headless drivers).
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns by default (indexed 0-9)
//! - **Height**: 20 rows by default (indexed 0-19)
//! - Both are configurable within `MIN_GRID_DIM..=MAX_GRID_DIM`
//!
//! # Gravity Speeds
//!
//! | Speed | Interval |
//! |-------|----------|
//! | `SLOW` | 800ms |
//! | `NORMAL` | 500ms |
//! | `FAST` | 200ms |
//!
//! # Examples
//!
//! ```
//! use gridfall_types::{PieceKind, Speed, DEFAULT_COLS, DEFAULT_ROWS};
//!
//! assert_eq!(PieceKind::from_type_id(2), Some(PieceKind::T));
//! assert_eq!(Speed::from_name("FAST"), Some(Speed::Fast));
//! assert_eq!(Speed::from_name("fast"), None);
//! assert_eq!(PieceKind::T.as_str(), "T");
//!
//! assert_eq!(DEFAULT_COLS, 10);
//! assert_eq!(DEFAULT_ROWS, 20);
//! ```

/// Default grid width in cells (10 columns)
pub const DEFAULT_COLS: u16 = 10;

/// Default grid height in cells (20 rows)
pub const DEFAULT_ROWS: u16 = 20;

/// Smallest accepted grid dimension (the I piece is 4 wide).
pub const MIN_GRID_DIM: u16 = 4;

/// Largest accepted grid dimension.
pub const MAX_GRID_DIM: u16 = 64;

/// Largest shape matrix extent along either axis.
pub const MAX_SHAPE_DIM: usize = 4;

/// Host frame interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Value of an empty grid cell.
pub const EMPTY: u8 = 0;

/// A locked grid cell: `0` is empty, `1..=7` is piece type id + 1.
pub type CellValue = u8;

/// The seven tetromino piece kinds, in type id order.
///
/// The declaration order is the type id, which also selects the color:
/// - **I** (0): cyan, horizontal bar
/// - **O** (1): yellow, 2x2 square
/// - **T** (2): purple
/// - **J** (3): blue
/// - **L** (4): orange
/// - **Z** (5): green
/// - **S** (6): red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    Z,
    S,
}

impl PieceKind {
    /// All kinds, indexed by type id.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::Z,
        PieceKind::S,
    ];

    /// Type id in `0..=6`.
    pub fn type_id(self) -> u8 {
        self as u8
    }

    pub fn from_type_id(id: u8) -> Option<Self> {
        Self::ALL.get(id as usize).copied()
    }

    /// Value written into the grid when a piece of this kind locks.
    pub fn cell_value(self) -> CellValue {
        self.type_id() + 1
    }

    /// Inverse of [`PieceKind::cell_value`]; `None` for empty or out-of-range values.
    pub fn from_cell_value(v: CellValue) -> Option<Self> {
        v.checked_sub(1).and_then(Self::from_type_id)
    }

    /// Display color as an RGB triple.
    pub fn color(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0, 255, 255),
            PieceKind::O => (255, 255, 0),
            PieceKind::T => (128, 0, 128),
            PieceKind::J => (0, 0, 255),
            PieceKind::L => (255, 127, 0),
            PieceKind::Z => (0, 255, 0),
            PieceKind::S => (255, 0, 0),
        }
    }

    /// One-letter name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::Z => "Z",
            PieceKind::S => "S",
        }
    }
}

/// Gravity speed setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Speed {
    Slow,
    #[default]
    Normal,
    Fast,
}

impl Speed {
    pub const ALL: [Speed; 3] = [Speed::Slow, Speed::Normal, Speed::Fast];

    /// Milliseconds between gravity steps.
    pub fn interval_ms(self) -> u32 {
        match self {
            Speed::Slow => 800,
            Speed::Normal => 500,
            Speed::Fast => 200,
        }
    }

    /// Look up a speed by its exact name (`"SLOW"`, `"NORMAL"`, `"FAST"`).
    ///
    /// Matching is case-sensitive; anything else is `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "SLOW" => Some(Speed::Slow),
            "NORMAL" => Some(Speed::Normal),
            "FAST" => Some(Speed::Fast),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Speed::Slow => "SLOW",
            Speed::Normal => "NORMAL",
            Speed::Fast => "FAST",
        }
    }
}

/// Input commands accepted by a game session.
///
/// These are produced by the key map, the headless driver and tests alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down; never locks
    SoftDrop,
    /// Rotate piece 90° clockwise, no wall kicks
    Rotate,
    /// Change the gravity interval
    SelectSpeed(Speed),
}

/// Session lifecycle state. `GameOver` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    #[default]
    Running,
    GameOver,
}
