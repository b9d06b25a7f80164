//! Pieces module tests - catalog constants and rotation cycle

use blockfall::core::pieces::{cells_at, get_shape, rotation_states, ROTATION_COUNT};
use blockfall::core::{ActivePiece, Board, SessionConfig};
use blockfall::types::{Coord, PieceKind};

// ============== Shape Tests ==============

#[test]
fn test_spawn_shapes() {
    assert_eq!(get_shape(PieceKind::L, 0), [(0, 0), (0, 1), (0, 2), (1, 2)]);
    assert_eq!(get_shape(PieceKind::J, 0), [(0, 0), (0, 1), (0, 2), (-1, 2)]);
    assert_eq!(get_shape(PieceKind::Line, 0), [(0, 0), (-1, 0), (1, 0), (2, 0)]);
    assert_eq!(get_shape(PieceKind::Z, 0), [(0, 0), (-1, 0), (0, 1), (1, 1)]);
    assert_eq!(get_shape(PieceKind::S, 0), [(0, 0), (1, 0), (0, 1), (-1, 1)]);
    assert_eq!(get_shape(PieceKind::O, 0), [(0, 0), (1, 0), (0, 1), (1, 1)]);
    assert_eq!(get_shape(PieceKind::T, 0), [(0, 0), (-1, 0), (1, 0), (0, 1)]);
}

#[test]
fn test_o_piece_same_in_every_state() {
    let north = get_shape(PieceKind::O, 0);
    for r in 1..ROTATION_COUNT {
        assert_eq!(get_shape(PieceKind::O, r), north);
    }
}

#[test]
fn test_states_are_clockwise_turns() {
    for kind in PieceKind::ALL {
        if kind == PieceKind::O {
            continue;
        }
        let states = rotation_states(kind);
        for r in 0..4 {
            let mut turned: Vec<_> = states[r].iter().map(|&(dx, dy)| (-dy, dx)).collect();
            let mut next: Vec<_> = states[(r + 1) % 4].to_vec();
            turned.sort();
            next.sort();
            assert_eq!(turned, next, "{kind:?} state {r} -> {}", (r + 1) % 4);
        }
    }
}

#[test]
fn test_spawn_shapes_fit_reference_grid() {
    let board = Board::new(SessionConfig::default().validate().unwrap());
    for kind in PieceKind::ALL {
        let piece = ActivePiece::spawn(kind, board.dims());
        assert!(piece.fits(&board), "{kind:?} does not fit at spawn");
    }
}

// ============== Rotation Tests ==============

#[test]
fn test_four_rotations_restore_piece() {
    for kind in PieceKind::ALL {
        let start = ActivePiece::new(kind, Coord::new(4, 7));
        let mut piece = start;
        for _ in 0..4 {
            let next = piece.rotated();
            assert_eq!(next.anchor, start.anchor);
            piece = next;
        }
        assert_eq!(piece, start);
        assert_eq!(piece.shape(), start.shape());
    }
}

#[test]
fn test_cells_follow_anchor() {
    let cells = cells_at(&get_shape(PieceKind::T, 0), Coord::new(5, 0));
    assert_eq!(
        cells,
        [
            Coord::new(5, 0),
            Coord::new(4, 0),
            Coord::new(6, 0),
            Coord::new(5, 1)
        ]
    );
}
