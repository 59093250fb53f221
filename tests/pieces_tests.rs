//! Pieces module tests - catalog and rotation transform

use four_blocks::core::pieces::{get_shape, offsets, resolve_cells, SPAWN_POSITION};
use four_blocks::types::{PieceKind, Rotation};

// ============== Catalog Tests ==============

#[test]
fn test_catalog_entries() {
    assert_eq!(offsets(PieceKind::I), &[(0, -2), (0, -1), (0, 0), (0, 1)]);
    assert_eq!(offsets(PieceKind::O), &[(-1, -1), (-1, 0), (0, -1), (0, 0)]);
    assert_eq!(offsets(PieceKind::S), &[(-1, -1), (0, -1), (0, 0), (1, 0)]);
    assert_eq!(offsets(PieceKind::Z), &[(0, -1), (1, -1), (-1, 0), (0, 0)]);
    assert_eq!(offsets(PieceKind::L), &[(-1, -1), (-1, 0), (0, 0), (1, 0)]);
}

#[test]
fn test_every_piece_contains_pivot() {
    for kind in PieceKind::ALL {
        assert!(offsets(kind).contains(&(0, 0)), "{:?}", kind);
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_rotation_transform_per_state() {
    // The S catalog entry under each rotation state.
    assert_eq!(
        get_shape(PieceKind::S, Rotation::East),
        [(-1, 1), (-1, 0), (0, 0), (0, -1)]
    );
    assert_eq!(
        get_shape(PieceKind::S, Rotation::South),
        [(1, 1), (0, 1), (0, 0), (-1, 0)]
    );
    assert_eq!(
        get_shape(PieceKind::S, Rotation::West),
        [(1, -1), (1, 0), (0, 0), (0, 1)]
    );
}

#[test]
fn test_backward_rotation_matches_three_forward() {
    for kind in PieceKind::ALL {
        let backward = get_shape(kind, Rotation::North.rotate_ccw());
        let forward = get_shape(kind, Rotation::from_steps(3));
        assert_eq!(backward, forward);
    }
}

#[test]
fn test_o_piece_rotates_about_pivot_corner() {
    // The 2x2 block pivots on its upper-right cell, so it shifts under rotation.
    let north = get_shape(PieceKind::O, Rotation::North);
    let east = get_shape(PieceKind::O, Rotation::East);
    assert_ne!(north, east);

    let mut east_sorted = east;
    east_sorted.sort();
    assert_eq!(east_sorted, [(-1, 0), (-1, 1), (0, 0), (0, 1)]);
}

#[test]
fn test_resolve_cells_adds_pivot() {
    let (x, y) = SPAWN_POSITION;
    assert_eq!((x, y), (5, 13));
    assert_eq!(
        resolve_cells(PieceKind::I, Rotation::North, x, y),
        [(5, 11), (5, 12), (5, 13), (5, 14)]
    );
    assert_eq!(
        resolve_cells(PieceKind::I, Rotation::East, 2, 0),
        [(0, 0), (1, 0), (2, 0), (3, 0)]
    );
}
