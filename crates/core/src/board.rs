//! Board module - manages the grid of landed blocks
//!
//! The board is a 10x15 grid where each cell is empty or holds the kind of the
//! piece that landed there. Uses a flat array for cache locality and
//! zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right) and y ranges 0..14
//! (**bottom to top**). The falling piece is never stored here.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

const WIDTH: usize = BOARD_WIDTH as usize;
const HEIGHT: usize = BOARD_HEIGHT as usize;

/// Row indices removed by one compaction pass, bottom to top
pub type ClearedRows = ArrayVec<usize, HEIGHT>;

/// The game board - 10 columns x 15 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), row 0 at the bottom
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * WIDTH + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> &[Cell] {
        let start = y * WIDTH;
        &self.cells[start..start + WIDTH]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_some())
    }

    /// Check if a row is completely empty
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= HEIGHT {
            return false;
        }
        self.row(y).iter().all(|cell| cell.is_none())
    }

    /// Remove all full rows and shift the rows above them down.
    ///
    /// Scans bottom to top with a write cursor: full rows are skipped, every
    /// other row is copied down to the cursor, and the rows left above the
    /// cursor are emptied. Returns the removed row indices (pre-compaction,
    /// sorted bottom to top).
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let mut write_y = 0;

        for read_y in 0..HEIGHT {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
                continue;
            }
            if write_y != read_y {
                let src_start = read_y * WIDTH;
                self.cells
                    .copy_within(src_start..src_start + WIDTH, write_y * WIDTH);
            }
            write_y += 1;
        }

        // Rows vacated by the shift.
        self.cells[write_y * WIDTH..].fill(None);

        cleared_rows
    }

    /// Write a piece's blocks into the board.
    ///
    /// Returns false (and writes nothing) if any cell is out of bounds or
    /// already occupied.
    pub fn lock_cells(&mut self, cells: &[(i8, i8)], kind: PieceKind) -> bool {
        if !cells.iter().all(|&(x, y)| self.is_valid(x, y)) {
            return false;
        }

        for &(x, y) in cells {
            self.set(x, y, Some(kind));
        }

        true
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of occupied cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write the board into a color-index grid: 0 = empty, `index + 1` = kind.
    pub fn write_u8_grid(&self, out: &mut [[u8; WIDTH]; HEIGHT]) {
        for (y, row) in out.iter_mut().enumerate() {
            for (x, v) in row.iter_mut().enumerate() {
                *v = match self.cells[y * WIDTH + x] {
                    Some(kind) => kind.index() + 1,
                    None => 0,
                };
            }
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Build a board from rows given bottom first.
    ///
    /// Rows beyond the board height and columns beyond the width are ignored.
    pub fn from_rows(rows: &[[Cell; WIDTH]]) -> Self {
        let mut board = Self::new();
        for (y, row) in rows.iter().take(HEIGHT).enumerate() {
            board.cells[y * WIDTH..(y + 1) * WIDTH].copy_from_slice(row);
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
