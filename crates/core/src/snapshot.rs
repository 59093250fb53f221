use crate::game_state::Piece;
use crate::pieces::resolve_cells;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board cells covered by the piece, resolved from its pose
    pub fn cells(&self) -> [(i8, i8); 4] {
        resolve_cells(self.kind, self.rotation, self.x, self.y)
    }

    /// Color index of the piece
    pub fn color_index(&self) -> u8 {
        self.kind.index()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Read-only copy of everything a renderer needs.
///
/// `board` is indexed `[y][x]` with row 0 at the bottom; 0 is empty and
/// `kind.index() + 1` is a landed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub paused: bool,
    pub game_over: bool,
    pub locked_count: u32,
    pub lines_cleared: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            paused: false,
            game_over: false,
            locked_count: 0,
            lines_cleared: 0,
        }
    }
}
