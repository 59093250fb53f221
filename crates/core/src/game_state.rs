//! Game state module - the board and the active piece
//!
//! This module ties together the board, the piece catalog and the piece source.
//! It owns the gravity tick with its lock-clear-spawn transition, the player
//! commands, and the game lifecycle (pause, top-out, restart).
//!
//! Every command follows the same pattern: build the candidate pose, check it
//! against the landed blocks, and only then commit it. A rejected command
//! leaves the state untouched, so the active piece is never in an invalid pose.

use crate::board::{Board, ClearedRows};
use crate::pieces::{resolve_cells, SPAWN_POSITION};
use crate::rng::{PieceSource, UniformPieces};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Upper bound on ticks in one hard drop: a piece falls at most `H - 1` rows
/// before the locking tick.
pub const MAX_DROP_TICKS: u32 = BOARD_HEIGHT as u32 + 1;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a new piece at the spawn pose
    pub fn new(kind: PieceKind) -> Self {
        let (x, y) = SPAWN_POSITION;
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
        }
    }

    /// Absolute board cells covered by this pose
    pub fn cells(&self) -> [(i8, i8); 4] {
        resolve_cells(self.kind, self.rotation, self.x, self.y)
    }

    /// Check if all blocks are inside the board and on empty cells
    pub fn is_valid(&self, board: &Board) -> bool {
        self.cells().iter().all(|&(x, y)| board.is_valid(x, y))
    }

    /// Color index written into the board when this piece locks
    pub fn color_index(&self) -> u8 {
        self.kind.index()
    }

    fn shifted(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }

    fn rotated(self, clockwise: bool) -> Self {
        let rotation = if clockwise {
            self.rotation.rotate_cw()
        } else {
            self.rotation.rotate_ccw()
        };
        Self { rotation, ..self }
    }
}

/// Result of one gravity tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The piece moved down one row
    Falling,
    /// The piece landed, was written into the board, full rows were cleared
    /// and the next piece spawned
    Locked,
    /// Nothing happened: the game is paused or over
    Idle,
}

/// Result of applying a [`GameAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action had no effect
    Rejected,
    /// The action changed the state
    Applied,
    /// A hard drop ran to completion
    Dropped,
    /// A new game started
    Restarted,
}

impl ActionOutcome {
    /// Whether the gravity timer must start a fresh interval
    pub fn restarts_gravity(&self) -> bool {
        matches!(self, ActionOutcome::Dropped | ActionOutcome::Restarted)
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = UniformPieces> {
    board: Board,
    active: Option<Piece>,
    source: S,
    /// Monotonic id for spawned pieces (increments only on successful spawn).
    piece_id: u32,
    locked_count: u32,
    lines_cleared: u32,
    /// Rows removed by the most recent lock.
    last_cleared: ClearedRows,
    paused: bool,
    game_over: bool,
}

impl GameState<UniformPieces> {
    /// Create a new game whose piece sequence is fixed by `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_source(UniformPieces::seeded(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game on an empty board drawing pieces from `source`
    pub fn with_source(source: S) -> Self {
        Self::from_parts(Board::new(), source)
    }

    /// Create a game on a prepared board and spawn the first piece.
    ///
    /// If the spawn pose is already blocked the game starts over.
    pub fn from_parts(board: Board, source: S) -> Self {
        let mut state = Self {
            board,
            active: None,
            source,
            piece_id: 0,
            locked_count: 0,
            lines_cleared: 0,
            last_cleared: ClearedRows::new(),
            paused: false,
            game_over: false,
        };
        state.spawn_piece();
        state
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    /// Cells of the active piece, resolved fresh on every call
    pub fn active_cells(&self) -> Option<[(i8, i8); 4]> {
        self.active.map(|p| p.cells())
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn locked_count(&self) -> u32 {
        self.locked_count
    }

    pub fn lines_cleared(&self) -> u32 {
        self.lines_cleared
    }

    pub fn last_cleared(&self) -> &[usize] {
        &self.last_cleared
    }

    fn is_running(&self) -> bool {
        !self.paused && !self.game_over
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.locked_count = self.locked_count;
        out.lines_cleared = self.lines_cleared;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Spawn a new piece from the source at the spawn pose
    fn spawn_piece(&mut self) -> bool {
        let piece = Piece::new(self.source.next_piece());

        if !piece.is_valid(&self.board) {
            log::info!(
                "spawn of {:?} blocked after {} locks, game over",
                piece.kind,
                self.locked_count
            );
            self.active = None;
            self.game_over = true;
            return false;
        }

        self.active = Some(piece);
        self.piece_id = self.piece_id.wrapping_add(1);
        log::trace!("spawned {:?} (piece {})", piece.kind, self.piece_id);

        true
    }

    /// Replace the active piece with `piece` if its pose is valid.
    ///
    /// Returns false and leaves the state unchanged otherwise, or when the game
    /// is not running.
    pub fn try_place(&mut self, piece: Piece) -> bool {
        if !self.is_running() || !piece.is_valid(&self.board) {
            return false;
        }
        self.active = Some(piece);
        true
    }

    /// Commit a transformed pose of the active piece if it is valid
    fn try_transform(&mut self, transform: impl FnOnce(Piece) -> Piece) -> bool {
        if !self.is_running() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let candidate = transform(active);
        if !candidate.is_valid(&self.board) {
            return false;
        }

        self.active = Some(candidate);
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_transform(|p| p.shifted(-1, 0))
    }

    pub fn move_right(&mut self) -> bool {
        self.try_transform(|p| p.shifted(1, 0))
    }

    pub fn rotate_cw(&mut self) -> bool {
        self.try_transform(|p| p.rotated(true))
    }

    pub fn rotate_ccw(&mut self) -> bool {
        self.try_transform(|p| p.rotated(false))
    }

    /// One gravity step.
    ///
    /// Moves the piece down a row if it can; otherwise locks it where it is,
    /// clears full rows and spawns the next piece before returning.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Idle;
        }
        let Some(active) = self.active else {
            return TickOutcome::Idle;
        };

        let fallen = active.shifted(0, -1);
        if fallen.is_valid(&self.board) {
            self.active = Some(fallen);
            return TickOutcome::Falling;
        }

        self.lock_piece();
        TickOutcome::Locked
    }

    /// Tick until the piece locks.
    ///
    /// Returns the number of ticks run (0 if the game is not running). Never
    /// exceeds [`MAX_DROP_TICKS`].
    pub fn hard_drop(&mut self) -> u32 {
        if !self.is_running() {
            return 0;
        }

        for ticks in 1..=MAX_DROP_TICKS {
            if self.tick() != TickOutcome::Falling {
                return ticks;
            }
        }

        MAX_DROP_TICKS
    }

    /// Lock the active piece onto the board, clear full rows, spawn the next one
    fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };

        let written = self.board.lock_cells(&active.cells(), active.kind);
        debug_assert!(written, "active piece overlapped the board at lock");

        let cleared_rows = self.board.clear_full_rows();
        self.locked_count = self.locked_count.wrapping_add(1);
        self.lines_cleared = self.lines_cleared.wrapping_add(cleared_rows.len() as u32);

        log::debug!(
            "locked {:?} at ({}, {}) {:?}, cleared rows {:?}",
            active.kind,
            active.x,
            active.y,
            active.rotation,
            cleared_rows.as_slice()
        );
        self.last_cleared = cleared_rows;

        self.spawn_piece();
    }

    /// Start a new game on an empty board, keeping the piece source
    pub fn restart(&mut self) {
        log::info!(
            "restart after {} locks, {} lines",
            self.locked_count,
            self.lines_cleared
        );
        self.board.clear();
        self.active = None;
        self.piece_id = 0;
        self.locked_count = 0;
        self.lines_cleared = 0;
        self.last_cleared.clear();
        self.paused = false;
        self.game_over = false;
        self.spawn_piece();
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> ActionOutcome {
        let applied = match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::RotateCw => self.rotate_cw(),
            GameAction::RotateCcw => self.rotate_ccw(),
            GameAction::HardDrop => {
                return if self.hard_drop() > 0 {
                    ActionOutcome::Dropped
                } else {
                    ActionOutcome::Rejected
                };
            }
            GameAction::Pause => {
                if self.game_over {
                    false
                } else {
                    self.paused = !self.paused;
                    true
                }
            }
            GameAction::Restart => {
                self.restart();
                return ActionOutcome::Restarted;
            }
        };

        if applied {
            ActionOutcome::Applied
        } else {
            ActionOutcome::Rejected
        }
    }
}

impl Default for GameState<UniformPieces> {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::CyclePieces;

    fn game_with(kinds: &[PieceKind]) -> GameState<CyclePieces> {
        GameState::with_source(CyclePieces::new(kinds.to_vec()))
    }

    fn assert_disjoint(state: &GameState<CyclePieces>) {
        if let Some(cells) = state.active_cells() {
            for (x, y) in cells {
                assert!(!state.board().is_occupied(x, y), "({}, {}) overlaps", x, y);
            }
        }
    }

    #[test]
    fn test_new_game_state() {
        let state = GameState::new(12345);

        assert!(!state.game_over());
        assert!(!state.paused());
        assert_eq!(state.piece_id(), 1);
        assert_eq!(state.locked_count(), 0);
        assert_eq!(state.board().filled_count(), 0);

        let active = state.active().unwrap();
        assert_eq!((active.x, active.y), (SPAWN_X, SPAWN_Y));
        assert_eq!(active.rotation, Rotation::North);
    }

    #[test]
    fn test_tick_gravity() {
        let mut state = game_with(&[PieceKind::I]);

        assert_eq!(state.tick(), TickOutcome::Falling);
        let active = state.active().unwrap();
        assert_eq!(active.y, SPAWN_Y - 1);
        assert_eq!(active.cells(), [(5, 10), (5, 11), (5, 12), (5, 13)]);
    }

    #[test]
    fn test_tick_locks_at_floor_and_respawns() {
        let mut state = game_with(&[PieceKind::I, PieceKind::O]);

        let mut falls = 0;
        while state.tick() == TickOutcome::Falling {
            falls += 1;
        }

        // Bottom block starts at row 11.
        assert_eq!(falls, 11);
        for y in 0..4 {
            assert_eq!(state.board().get(5, y), Some(Some(PieceKind::I)));
        }
        assert_eq!(state.board().filled_count(), 4);

        let next = state.active().unwrap();
        assert_eq!(next.kind, PieceKind::O);
        assert_eq!((next.x, next.y, next.rotation), (SPAWN_X, SPAWN_Y, Rotation::North));
        assert_eq!(state.piece_id(), 2);
        assert_eq!(state.locked_count(), 1);
    }

    #[test]
    fn test_move_stops_at_walls() {
        let mut state = game_with(&[PieceKind::I]);

        for _ in 0..5 {
            assert!(state.move_left());
        }
        let at_wall = state.active();
        assert!(!state.move_left());
        assert_eq!(state.active(), at_wall);

        for _ in 0..9 {
            assert!(state.move_right());
        }
        let at_wall = state.active();
        assert_eq!(at_wall.unwrap().x, 9);
        assert!(!state.move_right());
        assert_eq!(state.active(), at_wall);
    }

    #[test]
    fn test_move_blocked_by_landed_blocks() {
        let mut board = Board::new();
        board.set(4, 12, Some(PieceKind::Z));
        let mut state = GameState::from_parts(board, CyclePieces::new([PieceKind::I]));

        let before = state.active();
        assert!(!state.move_left());
        assert_eq!(state.active(), before);
        assert!(state.move_right());
    }

    #[test]
    fn test_rotate_against_wall_is_rejected() {
        let mut state = game_with(&[PieceKind::I]);
        for _ in 0..5 {
            state.move_left();
        }

        let before = state.active();
        assert!(!state.rotate_cw());
        assert_eq!(state.active(), before);

        // Counter-clockwise puts the bar at x-1..x+2, which is also off the board.
        assert!(!state.rotate_ccw());
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_rotate_ccw_wraps_to_west() {
        let mut state = game_with(&[PieceKind::L]);

        assert!(state.rotate_ccw());
        assert_eq!(state.active().unwrap().rotation, Rotation::West);
        assert!(state.rotate_cw());
        assert_eq!(state.active().unwrap().rotation, Rotation::North);
    }

    #[test]
    fn test_four_rotations_restore_pose() {
        let mut state = game_with(&[PieceKind::S]);
        state.tick();
        let before = state.active().unwrap();

        for _ in 0..4 {
            assert!(state.rotate_cw());
        }

        assert_eq!(state.active().unwrap(), before);
    }

    #[test]
    fn test_hard_drop() {
        let mut state = game_with(&[PieceKind::O]);

        let ticks = state.hard_drop();

        // Pivot 13 -> 1 is twelve falls plus the locking tick.
        assert_eq!(ticks, 13);
        assert!(ticks <= MAX_DROP_TICKS);
        for (x, y) in [(4, 0), (4, 1), (5, 0), (5, 1)] {
            assert_eq!(state.board().get(x, y), Some(Some(PieceKind::O)));
        }
    }

    #[test]
    fn test_lock_piece_clears_lines() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH as i8 {
            if x != 4 && x != 5 {
                board.set(x, 0, Some(PieceKind::L));
            }
        }
        let mut state = GameState::from_parts(board, CyclePieces::new([PieceKind::O]));

        state.hard_drop();

        assert_eq!(state.last_cleared(), &[0]);
        assert_eq!(state.lines_cleared(), 1);
        // The top half of the block drops into row 0.
        assert_eq!(state.board().get(4, 0), Some(Some(PieceKind::O)));
        assert_eq!(state.board().get(5, 0), Some(Some(PieceKind::O)));
        assert_eq!(state.board().filled_count(), 2);
    }

    #[test]
    fn test_board_never_holds_active_piece() {
        let mut state = game_with(&PieceKind::ALL);

        for step in 0..200 {
            assert_disjoint(&state);
            match step % 5 {
                0 => {
                    state.move_left();
                }
                1 => {
                    state.rotate_cw();
                }
                2 => {
                    state.move_right();
                }
                3 => {
                    state.rotate_ccw();
                }
                _ => {
                    state.tick();
                }
            }
            if state.game_over() {
                break;
            }
        }
    }

    #[test]
    fn test_game_over_detection() {
        let mut board = Board::new();
        board.set(5, 13, Some(PieceKind::Z));

        let mut state = GameState::from_parts(board, CyclePieces::new([PieceKind::I]));

        assert!(state.game_over());
        assert!(state.active().is_none());
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert!(!state.move_left());
        assert_eq!(state.hard_drop(), 0);
        assert_eq!(state.apply_action(GameAction::Pause), ActionOutcome::Rejected);
    }

    #[test]
    fn test_stacking_tops_out() {
        let mut state = game_with(&[PieceKind::I]);

        let mut drops = 0;
        while !state.game_over() {
            state.hard_drop();
            drops += 1;
            assert!(drops < 10, "bars should stack out quickly");
        }

        // Three bars fill rows 0..=11 of column 5; the 4th spawn needs row 11.
        assert_eq!(state.locked_count(), 3);
        assert_eq!(state.tick(), TickOutcome::Idle);
    }

    #[test]
    fn test_pause_stops_game() {
        let mut state = game_with(&[PieceKind::O]);

        assert_eq!(state.apply_action(GameAction::Pause), ActionOutcome::Applied);
        assert!(state.paused());

        let before = state.active();
        assert_eq!(state.tick(), TickOutcome::Idle);
        assert_eq!(state.apply_action(GameAction::MoveLeft), ActionOutcome::Rejected);
        assert_eq!(state.apply_action(GameAction::HardDrop), ActionOutcome::Rejected);
        assert_eq!(state.active(), before);

        state.apply_action(GameAction::Pause);
        assert_eq!(state.tick(), TickOutcome::Falling);
    }

    #[test]
    fn test_apply_action_restart() {
        let mut state = game_with(&[PieceKind::O]);
        state.hard_drop();
        assert_eq!(state.board().filled_count(), 4);

        let outcome = state.apply_action(GameAction::Restart);

        assert_eq!(outcome, ActionOutcome::Restarted);
        assert!(outcome.restarts_gravity());
        assert_eq!(state.board().filled_count(), 0);
        assert_eq!(state.piece_id(), 1);
        assert_eq!(state.locked_count(), 0);
        assert!(state.active().is_some());
    }

    #[test]
    fn test_hard_drop_restarts_gravity() {
        let mut state = game_with(&[PieceKind::S]);

        let outcome = state.apply_action(GameAction::HardDrop);
        assert_eq!(outcome, ActionOutcome::Dropped);
        assert!(outcome.restarts_gravity());

        assert!(!ActionOutcome::Applied.restarts_gravity());
        assert!(!ActionOutcome::Rejected.restarts_gravity());
    }

    #[test]
    fn test_try_place_rejects_invalid_pose() {
        let mut state = game_with(&[PieceKind::I]);
        let before = state.active();

        let off_board = Piece {
            y: 0,
            ..Piece::new(PieceKind::I)
        };
        assert!(!state.try_place(off_board));
        assert_eq!(state.active(), before);

        let low = Piece {
            y: 2,
            ..Piece::new(PieceKind::I)
        };
        assert!(state.try_place(low));
        assert_eq!(state.tick(), TickOutcome::Locked);
    }

    #[test]
    fn test_try_place_rejects_pose_at_coordinate_limits() {
        let mut state = game_with(&[PieceKind::L]);
        let before = state.active();

        for (x, y) in [(i8::MAX, 5), (i8::MIN, 5), (5, i8::MAX), (5, i8::MIN)] {
            let far = Piece {
                x,
                y,
                ..Piece::new(PieceKind::L)
            };
            assert!(!far.is_valid(state.board()));
            assert!(!state.try_place(far));
        }
        assert_eq!(state.active(), before);
    }

    #[test]
    fn test_snapshot_matches_state() {
        let mut state = game_with(&[PieceKind::Z, PieceKind::L]);
        state.hard_drop();

        let snap = state.snapshot();
        let active = snap.active.unwrap();

        assert_eq!(active.kind, PieceKind::L);
        assert_eq!(active.cells(), state.active_cells().unwrap());
        assert_eq!(active.color_index(), 4);
        assert_eq!(snap.locked_count, 1);
        let z_value = PieceKind::Z.index() + 1;
        let filled = snap.board.iter().flatten().filter(|&&v| v == z_value).count();
        assert_eq!(filled, 4);
    }
}
