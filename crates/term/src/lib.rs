//! Terminal rendering for gridfall.
//!
//! A [`GameView`] turns a [`crate::core::GameSnapshot`] into a [`FrameBuffer`]
//! of styled characters; a [`TerminalRenderer`] flushes framebuffers to the
//! terminal, sending only the runs that changed since the previous frame.
//!
//! The view never sees a session, only its snapshot.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use gridfall_core as core;
pub use gridfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
