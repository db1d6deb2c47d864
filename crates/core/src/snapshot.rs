use crate::piece::ActivePiece;
use crate::shape::Shape;
use crate::types::{CellValue, PieceKind, Speed, Status, DEFAULT_COLS, DEFAULT_ROWS, EMPTY};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute coordinates of the occupied cells (rows may be negative).
    pub fn cells(&self) -> impl Iterator<Item = (i32, i32)> + '_ {
        self.shape
            .cells()
            .into_iter()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Read-only projection of a session for renderers and drivers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub cols: u16,
    pub rows: u16,
    /// Row-major cell values, `cols * rows` long.
    pub cells: Vec<CellValue>,
    pub active: Option<ActiveSnapshot>,
    pub status: Status,
    pub speed: Speed,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
}

impl GameSnapshot {
    /// Cell value at (x, y); out-of-range reads as empty.
    pub fn cell(&self, x: usize, y: usize) -> CellValue {
        if x >= self.cols as usize || y >= self.rows as usize {
            return EMPTY;
        }
        self.cells[y * self.cols as usize + x]
    }

    pub fn game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn speed_name(&self) -> &'static str {
        self.speed.name()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            cols: DEFAULT_COLS,
            rows: DEFAULT_ROWS,
            cells: vec![EMPTY; DEFAULT_COLS as usize * DEFAULT_ROWS as usize],
            active: None,
            status: Status::Running,
            speed: Speed::default(),
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }
}
