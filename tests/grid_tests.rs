//! Grid tests - bounds and occupancy queries

use std::collections::BTreeSet;

use blockfall::core::{in_bounds, occupied, Board, GridDims, SessionConfig};
use blockfall::types::Coord;

fn reference_dims() -> GridDims {
    SessionConfig::default().validate().unwrap()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new(reference_dims());
    assert_eq!(board.width(), 10);
    assert_eq!(board.height(), 16);
    assert!(board.is_empty());

    for y in 0..16 {
        for x in 0..10 {
            let c = Coord::new(x, y);
            assert!(board.is_valid(c), "Cell ({}, {}) should be valid", x, y);
            assert!(!board.is_occupied(c));
        }
    }
}

#[test]
fn test_in_bounds_matches_half_open_ranges() {
    let dims = reference_dims();
    for y in -2..18 {
        for x in -2..12 {
            let expected = (0..10).contains(&x) && (0..16).contains(&y);
            assert_eq!(in_bounds(dims, Coord::new(x, y)), expected, "({x}, {y})");
        }
    }
}

#[test]
fn test_occupied_is_set_membership() {
    let frozen: BTreeSet<Coord> = [Coord::new(3, 4), Coord::new(0, 15)].into_iter().collect();
    assert!(occupied(&frozen, Coord::new(3, 4)));
    assert!(occupied(&frozen, Coord::new(0, 15)));
    assert!(!occupied(&frozen, Coord::new(4, 3)));
}

#[test]
fn test_board_out_of_bounds_is_not_valid() {
    let board = Board::new(reference_dims());
    assert!(!board.is_valid(Coord::new(-1, 0)));
    assert!(!board.is_valid(Coord::new(0, -1)));
    assert!(!board.is_valid(Coord::new(10, 0)));
    assert!(!board.is_valid(Coord::new(0, 16)));
    // Out of bounds is never occupied
    assert!(!board.is_occupied(Coord::new(-1, 0)));
}

#[test]
fn test_board_freeze_and_clear() {
    let mut board = Board::new(reference_dims());
    board.freeze([Coord::new(5, 10), Coord::new(6, 10)]);
    assert!(board.is_occupied(Coord::new(5, 10)));
    assert!(!board.is_valid(Coord::new(6, 10)));
    assert_eq!(board.row_count(10), 2);

    board.clear();
    assert!(board.is_empty());
    assert!(board.is_valid(Coord::new(5, 10)));
}

#[test]
fn test_narrow_grid_spawn_coord() {
    let dims = SessionConfig::new(1, 4, 100).validate().unwrap();
    assert_eq!(dims.spawn_coord(), Coord::new(0, 0));
    let dims = SessionConfig::new(7, 4, 100).validate().unwrap();
    assert_eq!(dims.spawn_coord(), Coord::new(3, 0));
}
