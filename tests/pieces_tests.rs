//! Piece integration tests - shape tables and the pure transform API

use tui_blockfall::core::{get_shape, Piece};
use tui_blockfall::types::{PieceKind, Rotation, Spin};

const ROTATIONS: [Rotation; 4] = [
    Rotation::North,
    Rotation::East,
    Rotation::South,
    Rotation::West,
];

#[test]
fn test_all_kinds_have_four_minos_in_every_rotation() {
    for kind in PieceKind::ALL {
        for rotation in ROTATIONS {
            let shape = get_shape(kind, rotation);
            assert_eq!(shape.len(), 4);
            for &(dx, dy) in &shape {
                assert!((0..4).contains(&dx), "{:?} {:?}", kind, rotation);
                assert!((0..4).contains(&dy), "{:?} {:?}", kind, rotation);
            }
        }
    }
}

#[test]
fn test_rotation_wraps_modulo_four() {
    for kind in PieceKind::ALL {
        for start in ROTATIONS {
            let piece = Piece {
                kind,
                rotation: start,
                x: 3,
                y: 2,
            };
            let mut rotated = piece;
            for _ in 0..4 {
                rotated = rotated.rotated(Spin::Cw);
            }
            assert_eq!(rotated, piece);
            assert_eq!(rotated.cells(), piece.cells());
        }
    }
}

#[test]
fn test_four_ccw_rotations_also_return_home() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, 12);
        let mut rotated = piece;
        for _ in 0..4 {
            rotated = rotated.rotated(Spin::Ccw);
        }
        assert_eq!(rotated.cells(), piece.cells());
    }
}

#[test]
fn test_square_rotation_is_identity() {
    for rotation in ROTATIONS {
        assert_eq!(
            get_shape(PieceKind::O, rotation),
            get_shape(PieceKind::O, Rotation::North)
        );
    }
}

#[test]
fn test_rotate_keeps_origin_fixed() {
    let piece = Piece::spawn(PieceKind::L, 12);
    let rotated = piece.rotated(Spin::Cw);
    assert_eq!((rotated.x, rotated.y), (piece.x, piece.y));
    assert_eq!(rotated.rotation, Rotation::East);
}

#[test]
fn test_translate_does_not_validate() {
    // Translation is pure; the board decides validity later.
    let piece = Piece::spawn(PieceKind::T, 12);
    let moved = piece.translated(-100, -100);
    assert_eq!(moved.x, piece.x - 100);
    assert_eq!(moved.y, piece.y - 100);
}

#[test]
fn test_spawn_rotation_is_north() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, 12);
        assert_eq!(piece.rotation, Rotation::North);
        assert_eq!(piece.y, 0);
    }
}

#[test]
fn test_i_piece_rotation_layouts() {
    assert_eq!(
        get_shape(PieceKind::I, Rotation::North),
        [(0, 1), (1, 1), (2, 1), (3, 1)]
    );
    assert_eq!(
        get_shape(PieceKind::I, Rotation::East),
        [(2, 0), (2, 1), (2, 2), (2, 3)]
    );
}

#[test]
fn test_color_follows_kind() {
    for kind in PieceKind::ALL {
        let piece = Piece::spawn(kind, 12);
        assert_eq!(piece.color(), kind.color());
    }
}
