//! Game session module - owns the playfield and runs the rules
//!
//! This module ties together the grid, the active piece, the gravity clock
//! and the piece source. Every mutation is proposed as a candidate piece and
//! committed only if [`valid_position`] accepts it; rejected moves are silent
//! no-ops. The only terminal outcome is [`Status::GameOver`].

use log::{debug, info, trace};

use crate::clock::GravityClock;
use crate::collision::valid_position;
use crate::grid::Grid;
use crate::piece::ActivePiece;
use crate::rng::{PieceSource, SimpleRng};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Command, Speed, Status};

/// What a call to [`GameSession::tick`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// No gravity step was due, or the session is over.
    Idle,
    /// The piece fell one row.
    Fell,
    /// The piece locked and a new one spawned.
    Locked { lines: usize },
    /// The piece locked and the replacement could not spawn.
    ToppedOut { lines: usize },
}

/// A single game: grid, falling piece, gravity and lifecycle.
#[derive(Debug, Clone)]
pub struct GameSession<S = SimpleRng> {
    grid: Grid,
    active: ActivePiece,
    clock: GravityClock,
    status: Status,
    source: S,
    pieces_locked: u32,
    lines_cleared: u32,
}

impl GameSession<SimpleRng> {
    /// Default 10x20 grid at `NORMAL` speed with a seeded generator.
    pub fn new(seed: u32) -> Self {
        Self::with_source(Grid::default(), Speed::default(), SimpleRng::new(seed))
    }
}

impl<S: PieceSource> GameSession<S> {
    /// Start a running session on `grid` and spawn the first piece.
    ///
    /// The first spawn is not checked. A piece that starts out overlapping
    /// locked cells cannot fall, so it locks on the first gravity step.
    pub fn with_source(grid: Grid, speed: Speed, mut source: S) -> Self {
        let active = ActivePiece::spawn(source.next_kind(), grid.cols());
        trace!("spawned {:?} at ({}, {})", active.kind, active.x, active.y);

        Self {
            grid,
            active,
            clock: GravityClock::new(speed),
            status: Status::Running,
            source,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn clock(&self) -> &GravityClock {
        &self.clock
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == Status::GameOver
    }

    pub fn speed(&self) -> Speed {
        self.clock.speed()
    }

    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    /// Advance gravity by `elapsed_ms` and run a gravity step if one is due.
    ///
    /// The clock restarts from zero after every due step, whether the piece
    /// fell or locked. Once the session is over nothing advances.
    pub fn tick(&mut self, elapsed_ms: u32) -> TickOutcome {
        if self.is_game_over() {
            return TickOutcome::Idle;
        }

        self.clock.advance(elapsed_ms);
        if !self.clock.due_for_tick() {
            return TickOutcome::Idle;
        }

        let outcome = self.gravity_step();
        self.clock.reset();
        outcome
    }

    fn gravity_step(&mut self) -> TickOutcome {
        if self.try_commit(self.active.translated(0, 1)) {
            return TickOutcome::Fell;
        }
        self.lock_and_respawn()
    }

    fn lock_and_respawn(&mut self) -> TickOutcome {
        let locked = self.active;
        self.grid.lock(&locked);
        let lines = self.grid.clear_full_lines();

        self.pieces_locked = self.pieces_locked.wrapping_add(1);
        self.lines_cleared = self.lines_cleared.wrapping_add(lines as u32);
        debug!(
            "locked {:?} at ({}, {}), cleared {} line(s)",
            locked.kind, locked.x, locked.y, lines
        );

        self.active = ActivePiece::spawn(self.source.next_kind(), self.grid.cols());
        trace!("spawned {:?} at ({}, {})", self.active.kind, self.active.x, self.active.y);

        if valid_position(&self.grid, &self.active) {
            TickOutcome::Locked { lines }
        } else {
            self.status = Status::GameOver;
            info!(
                "game over: {:?} has no room to spawn after {} piece(s), {} line(s)",
                self.active.kind, self.pieces_locked, self.lines_cleared
            );
            TickOutcome::ToppedOut { lines }
        }
    }

    /// Apply an input command.
    ///
    /// Returns whether it was accepted: moves and rotation only when the
    /// resulting position is valid, speed selection whenever the session is
    /// running. A failed soft drop never locks the piece.
    pub fn apply(&mut self, command: Command) -> bool {
        if self.is_game_over() {
            return false;
        }

        match command {
            Command::MoveLeft => self.try_commit(self.active.translated(-1, 0)),
            Command::MoveRight => self.try_commit(self.active.translated(1, 0)),
            Command::SoftDrop => self.try_commit(self.active.translated(0, 1)),
            Command::Rotate => self.try_commit(self.active.rotated()),
            Command::SelectSpeed(speed) => {
                if self.clock.speed() != speed {
                    info!("speed set to {}", speed.name());
                }
                self.clock.set_speed(speed);
                true
            }
        }
    }

    /// Select a speed by name. Unknown names are ignored.
    pub fn select_speed(&mut self, name: &str) -> bool {
        match Speed::from_name(name) {
            Some(speed) => self.apply(Command::SelectSpeed(speed)),
            None => {
                debug!("ignoring unknown speed {:?}", name);
                false
            }
        }
    }

    fn try_commit(&mut self, candidate: ActivePiece) -> bool {
        if valid_position(&self.grid, &candidate) {
            self.active = candidate;
            true
        } else {
            false
        }
    }

    /// Write the current state into `out`, reusing its cell buffer.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.cols = self.grid.cols();
        out.rows = self.grid.rows();
        out.cells.clear();
        out.cells.extend_from_slice(self.grid.cells());
        out.active = Some(ActiveSnapshot::from(self.active));
        out.status = self.status;
        out.speed = self.clock.speed();
        out.pieces_locked = self.pieces_locked;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
