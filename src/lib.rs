//! Four Blocks (workspace facade crate).
//!
//! Re-exports the engine, input and terminal crates under
//! `four_blocks::{core,input,term,types}` and hosts the binary's configuration
//! and logging setup.

pub mod config;
pub mod logging;

pub use four_blocks_core as core;
pub use four_blocks_input as input;
pub use four_blocks_term as term;
pub use four_blocks_types as types;
