//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has no dependencies on terminals or I/O, making it:
//!
//! - **Deterministic**: an injected [`PieceSource`] fixes the piece sequence
//! - **Testable**: every rule is reachable without a host
//! - **Portable**: can run in any host (terminal, headless, GUI)
//!
//! # Module Structure
//!
//! - [`shape`]: the seven tetromino matrices and clockwise rotation
//! - [`piece`]: the active piece and its candidate moves
//! - [`grid`]: the playfield with locking and line clearing
//! - [`collision`]: position validation
//! - [`clock`]: gravity timing
//! - [`rng`]: seeded and scripted piece sources
//! - [`session`]: the game state machine
//! - [`snapshot`]: read-only view for renderers
//!
//! # Game Rules
//!
//! - Pieces are picked uniformly at random
//! - Rotation is a plain clockwise matrix rotation with no wall kicks
//! - Gravity moves the piece down once the elapsed time exceeds the interval;
//!   if it cannot move, it locks immediately
//! - Full rows are removed and the rows above drop down
//! - The game ends when a freshly spawned piece has no room
//!
//! # Example
//!
//! ```
//! use gridfall_core::{GameSession, TickOutcome};
//! use gridfall_types::Command;
//!
//! let mut game = GameSession::new(12345);
//!
//! game.apply(Command::MoveRight);
//! game.apply(Command::Rotate);
//!
//! // 501ms exceeds the 500ms NORMAL interval.
//! assert_eq!(game.tick(501), TickOutcome::Fell);
//! assert!(game.select_speed("FAST"));
//! ```

pub mod clock;
pub mod collision;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use gridfall_types as types;

// Re-export commonly used types for convenience
pub use clock::GravityClock;
pub use collision::valid_position;
pub use error::GridError;
pub use grid::Grid;
pub use piece::ActivePiece;
pub use rng::{PieceSource, ScriptedSource, SimpleRng};
pub use session::{GameSession, TickOutcome};
pub use shape::{Shape, SHAPES};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
