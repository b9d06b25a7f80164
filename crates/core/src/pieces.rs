//! Pieces module - Tetromino shapes and rotation states
//!
//! Every kind has four rotation states of four offsets, each anchored at `(0, 0)`.
//! For all kinds but O, state `n + 1` is state `n` turned 90° clockwise about the anchor
//! (screen coordinates: `(dx, dy) -> (-dy, dx)`). The O piece looks the same in every state.
//!
//! Rotation here is a plain state swap: there are no wall kicks and no collision test.

use rand::Rng;

use crate::types::{Coord, PieceKind};

/// Offset of a single mino relative to the piece anchor
pub type MinoOffset = (i32, i32);

/// Shape of a piece - 4 mino offsets from the anchor
pub type PieceShape = [MinoOffset; 4];

/// The four rotation states of a kind, indexed by rotation
pub type RotationStates = [PieceShape; 4];

const L_STATES: RotationStates = [
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (-1, 0), (-2, 0), (-2, 1)],
    [(0, 0), (0, -1), (0, -2), (-1, -2)],
    [(0, 0), (1, 0), (2, 0), (2, -1)],
];

const J_STATES: RotationStates = [
    [(0, 0), (0, 1), (0, 2), (-1, 2)],
    [(0, 0), (-1, 0), (-2, 0), (-2, -1)],
    [(0, 0), (0, -1), (0, -2), (1, -2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
];

const LINE_STATES: RotationStates = [
    [(0, 0), (-1, 0), (1, 0), (2, 0)],
    [(0, 0), (0, -1), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (-1, 0), (-2, 0)],
    [(0, 0), (0, 1), (0, -1), (0, -2)],
];

const Z_STATES: RotationStates = [
    [(0, 0), (-1, 0), (0, 1), (1, 1)],
    [(0, 0), (0, -1), (-1, 0), (-1, 1)],
    [(0, 0), (1, 0), (0, -1), (-1, -1)],
    [(0, 0), (0, 1), (1, 0), (1, -1)],
];

const S_STATES: RotationStates = [
    [(0, 0), (1, 0), (0, 1), (-1, 1)],
    [(0, 0), (0, 1), (-1, 0), (-1, -1)],
    [(0, 0), (-1, 0), (0, -1), (1, -1)],
    [(0, 0), (0, -1), (1, 0), (1, 1)],
];

const O_STATES: RotationStates = [[(0, 0), (1, 0), (0, 1), (1, 1)]; 4];

const T_STATES: RotationStates = [
    [(0, 0), (-1, 0), (1, 0), (0, 1)],
    [(0, 0), (0, -1), (0, 1), (-1, 0)],
    [(0, 0), (1, 0), (-1, 0), (0, -1)],
    [(0, 0), (0, 1), (0, -1), (1, 0)],
];

/// Number of rotation states per kind
pub const ROTATION_COUNT: u8 = 4;

/// All four rotation states for a kind
pub fn rotation_states(kind: PieceKind) -> &'static RotationStates {
    match kind {
        PieceKind::L => &L_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::Line => &LINE_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
    }
}

/// Get the shape (mino offsets) for a piece kind and rotation index.
///
/// The index wraps, so any `u8` is accepted.
pub fn get_shape(kind: PieceKind, rotation: u8) -> PieceShape {
    rotation_states(kind)[(rotation % ROTATION_COUNT) as usize]
}

/// Absolute cells of `shape` placed at `anchor`
pub fn cells_at(shape: &PieceShape, anchor: Coord) -> [Coord; 4] {
    shape.map(|offset| anchor.offset(offset))
}

/// Uniform choice over the seven kinds
pub fn random_kind<R: Rng + ?Sized>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.random_range(0..PieceKind::ALL.len())]
}
