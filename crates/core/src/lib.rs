//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the falling-block rules and state. It has **no
//! dependencies** on UI, input devices, or timers:
//!
//! - **Deterministic**: pieces come from an injected [`PieceSource`]; a seeded
//!   source replays the same game
//! - **Synchronous**: every operation runs to completion, bounded by the
//!   10x15 board
//! - **Pure reads**: collision checks never touch the board, which only ever
//!   holds landed blocks
//!
//! # Module Structure
//!
//! - [`board`]: 10x15 grid of landed blocks, collision queries, line clearing
//! - [`pieces`]: five-piece catalog and the quarter-turn rotation transform
//! - [`game_state`]: active piece, commands, gravity tick, lock and spawn
//! - [`gravity`]: elapsed-time accumulator that schedules gravity ticks
//! - [`rng`]: piece sources (seeded uniform, fixed cycle)
//! - [`snapshot`]: plain-data copy of the state for renderers
//!
//! # Example
//!
//! ```
//! use four_blocks_core::{GameState, TickOutcome};
//! use four_blocks_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! assert_eq!(game.tick(), TickOutcome::Falling);
//!
//! let outcome = game.apply_action(GameAction::HardDrop);
//! assert!(outcome.restarts_gravity());
//! assert_eq!(game.locked_count(), 1);
//! ```

pub mod board;
pub mod game_state;
pub mod gravity;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use four_blocks_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use game_state::{ActionOutcome, GameState, Piece, TickOutcome, MAX_DROP_TICKS};
pub use gravity::GravityClock;
pub use pieces::{get_shape, offsets, resolve_cells};
pub use rng::{CyclePieces, PieceSource, UniformPieces};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
