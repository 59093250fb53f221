//! Pieces module - the piece catalog and rotation transform
//!
//! Every piece is four blocks given as offsets from a pivot at (0, 0), with
//! y pointing up. Rotated shapes are not tabulated; they are derived from the
//! spawn offsets through [`Rotation::apply`].

use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// Offset of a single block relative to the piece pivot
pub type BlockOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the pivot
pub type PieceShape = [BlockOffset; 4];

const I_OFFSETS: PieceShape = [(0, -2), (0, -1), (0, 0), (0, 1)];
const O_OFFSETS: PieceShape = [(-1, -1), (-1, 0), (0, -1), (0, 0)];
const S_OFFSETS: PieceShape = [(-1, -1), (0, -1), (0, 0), (1, 0)];
const Z_OFFSETS: PieceShape = [(0, -1), (1, -1), (-1, 0), (0, 0)];
const L_OFFSETS: PieceShape = [(-1, -1), (-1, 0), (0, 0), (1, 0)];

/// Catalog entry for a piece kind, unrotated
pub fn offsets(kind: PieceKind) -> &'static PieceShape {
    match kind {
        PieceKind::I => &I_OFFSETS,
        PieceKind::O => &O_OFFSETS,
        PieceKind::S => &S_OFFSETS,
        PieceKind::Z => &Z_OFFSETS,
        PieceKind::L => &L_OFFSETS,
    }
}

/// Get the shape (block offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    let shape = *offsets(kind);
    shape.map(|offset| rotation.apply(offset))
}

/// Absolute board cells of a piece posed at pivot `(x, y)`.
///
/// Coordinates saturate at the `i8` limits, which are far outside the board,
/// so an extreme pose resolves to out-of-bounds cells.
pub fn resolve_cells(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> [(i8, i8); 4] {
    get_shape(kind, rotation).map(|(dx, dy)| (x.saturating_add(dx), y.saturating_add(dy)))
}

/// Spawn pivot for new pieces (x, y)
pub const SPAWN_POSITION: (i8, i8) = (SPAWN_X, SPAWN_Y);
