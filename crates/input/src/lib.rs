//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It decodes
//! `crossterm` key events into [`crate::types::GameAction`]s, one action per
//! key press. The engine has no soft drop, so the vertical arrows rotate.

pub mod map;

pub use four_blocks_types as types;

pub use map::{handle_key_event, should_quit};
