//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine logic, terminal rendering, input decoding).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 15 rows (indexed 0-14, **bottom to top**)
//! - **Spawn pivot**: (5, 13), near the top and horizontally centered
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Input poll / redraw interval (~60 FPS) |
//! | `DEFAULT_GRAVITY_MS` | 1000 | Interval between automatic gravity ticks |
//!
//! # Examples
//!
//! ```
//! use four_blocks_types::{GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::from_index(2), Some(PieceKind::S));
//! assert_eq!(PieceKind::S.index(), 2);
//!
//! // Rotating backward from the spawn orientation wraps around.
//! assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
//! assert_eq!(Rotation::from_steps(-1), Rotation::West);
//!
//! assert_eq!(GameAction::HardDrop.as_str(), "hardDrop");
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 15);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (15 rows)
pub const BOARD_HEIGHT: u8 = 15;

/// Pivot column for newly spawned pieces
pub const SPAWN_X: i8 = 5;

/// Pivot row for newly spawned pieces
pub const SPAWN_Y: i8 = 13;

/// Input poll / redraw interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Default interval between automatic gravity ticks (1 second per row)
pub const DEFAULT_GRAVITY_MS: u32 = 1000;

/// The five piece kinds of the catalog.
///
/// The discriminant doubles as the color index written into the board when a
/// piece locks:
/// - **I** (0): 4-tall bar
/// - **O** (1): 2x2 block
/// - **S** (2): S-shaped
/// - **Z** (3): Z-shaped (mirror of S)
/// - **L** (4): L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    S,
    Z,
    L,
}

impl PieceKind {
    /// Number of entries in the catalog
    pub const COUNT: usize = 5;

    /// All kinds in catalog order
    pub const ALL: [PieceKind; Self::COUNT] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
    ];

    /// Catalog (and color) index of this kind
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look up a kind by catalog index
    ///
    /// # Examples
    ///
    /// ```
    /// use four_blocks_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_index(0), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_index(4), Some(PieceKind::L));
    /// assert_eq!(PieceKind::from_index(5), None);
    /// ```
    pub fn from_index(index: u8) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }
}

/// Rotation states, one per quarter turn clockwise from spawn.
///
/// - **North** (0): spawn orientation
/// - **East** (1): rotated 90° clockwise
/// - **South** (2): rotated 180°
/// - **West** (3): rotated 270° clockwise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation state for a signed number of clockwise quarter turns.
    ///
    /// Negative step counts wrap to the equivalent positive residue, so `-1`
    /// is `West`, never an out-of-range state.
    ///
    /// # Examples
    ///
    /// ```
    /// use four_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::from_steps(0), Rotation::North);
    /// assert_eq!(Rotation::from_steps(5), Rotation::East);
    /// assert_eq!(Rotation::from_steps(-2), Rotation::South);
    /// ```
    pub fn from_steps(steps: i32) -> Self {
        match steps.rem_euclid(4) {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Number of clockwise quarter turns from `North` (0..=3)
    pub fn steps(self) -> u8 {
        self as u8
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use four_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotate counter-clockwise (-90° or 270°)
    pub fn rotate_ccw(&self) -> Self {
        match self {
            Rotation::North => Rotation::West,
            Rotation::West => Rotation::South,
            Rotation::South => Rotation::East,
            Rotation::East => Rotation::North,
        }
    }

    /// Apply this rotation to a pivot-relative offset.
    ///
    /// Each quarter turn maps `(dx, dy)` to `(dy, -dx)`, which is clockwise with
    /// the y axis pointing up.
    ///
    /// # Examples
    ///
    /// ```
    /// use four_blocks_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.apply((1, 2)), (1, 2));
    /// assert_eq!(Rotation::East.apply((1, 2)), (2, -1));
    /// assert_eq!(Rotation::South.apply((1, 2)), (-1, -2));
    /// assert_eq!(Rotation::West.apply((1, 2)), (-2, 1));
    /// ```
    pub fn apply(self, (dx, dy): (i8, i8)) -> (i8, i8) {
        match self {
            Rotation::North => (dx, dy),
            Rotation::East => (dy, -dx),
            Rotation::South => (-dx, -dy),
            Rotation::West => (-dy, dx),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Produced by the input decoder and consumed by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece until it locks
    HardDrop,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Rotate piece 90° counter-clockwise
    RotateCcw,
    /// Toggle pause state
    Pause,
    /// Restart the game (when game over or at any time)
    Restart,
}

impl GameAction {
    /// camelCase name used in log records
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Landed block; its color index is `kind.index()`
pub type Cell = Option<PieceKind>;
