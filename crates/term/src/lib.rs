//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to the terminal
//! backend. The engine only hands over cell contents; every color and glyph
//! decision lives here.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use four_blocks_core as core;
pub use four_blocks_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{
    compose_playfield, empty_background, piece_color, AnchorY, BoardLayout, GameView, Playfield,
    Viewport,
};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
