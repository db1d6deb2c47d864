//! gridfall (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_gridfall::{core,input,term,types}`
//! and hosts the pieces shared by the binary and its tests: the configuration
//! layer and the headless driver.

pub use gridfall_core as core;
pub use gridfall_input as input;
pub use gridfall_term as term;
pub use gridfall_types as types;

pub mod config;
pub mod headless;
