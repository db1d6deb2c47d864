//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm`
//! key events into [`crate::types::Command`] values and recognizes the host
//! keys (quit, restart) that never reach a session.

pub mod map;

pub use gridfall_types as types;

pub use map::{handle_key_event, should_quit, should_restart};
