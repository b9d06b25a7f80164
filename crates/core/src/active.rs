//! Active piece module - the falling piece and its controller
//!
//! States: `EMPTY` (no active piece) -> `FALLING` (spawned) -> `EMPTY` (frozen).
//! [`PieceController`] is the only writer of the active piece.

use crate::grid::{Board, GridDims};
use crate::pieces::{cells_at, get_shape, PieceShape, ROTATION_COUNT};
use crate::sequence::{PieceSequence, PieceSource};
use crate::types::{Coord, Direction, PieceKind};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Rotation index in `0..4`
    pub rotation: u8,
    pub anchor: Coord,
}

impl ActivePiece {
    /// Create a piece in rotation state 0 at `anchor`
    pub fn new(kind: PieceKind, anchor: Coord) -> Self {
        Self {
            kind,
            rotation: 0,
            anchor,
        }
    }

    /// Create a piece at the spawn coordinate of `dims`
    pub fn spawn(kind: PieceKind, dims: GridDims) -> Self {
        Self::new(kind, dims.spawn_coord())
    }

    /// Get the offsets for the current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute occupied cells
    pub fn cells(&self) -> [Coord; 4] {
        cells_at(&self.shape(), self.anchor)
    }

    /// Same piece moved one cell in `direction`
    pub fn shifted(&self, direction: Direction) -> Self {
        Self {
            anchor: self.anchor.shifted(direction),
            ..*self
        }
    }

    /// Same piece in the next rotation state, anchor unchanged
    pub fn rotated(&self) -> Self {
        Self {
            rotation: (self.rotation + 1) % ROTATION_COUNT,
            ..*self
        }
    }

    /// Check if all cells are inside the grid
    pub fn is_in_bounds(&self, board: &Board) -> bool {
        self.cells().iter().all(|&c| board.in_bounds(c))
    }

    /// Check if all cells are inside the grid and not frozen
    pub fn fits(&self, board: &Board) -> bool {
        self.cells().iter().all(|&c| board.is_valid(c))
    }

    /// Check if the piece rests on the floor or on the stack.
    ///
    /// Requires the piece to be fully in bounds.
    pub fn is_at_bottom(&self, board: &Board) -> bool {
        if !self.is_in_bounds(board) {
            return false;
        }
        let last_row = board.dims().last_row();
        self.cells().iter().any(|&c| {
            c.y == last_row || board.is_occupied(c.shifted(Direction::Down))
        })
    }
}

/// Owns the currently falling piece
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PieceController {
    active: Option<ActivePiece>,
}

impl PieceController {
    pub fn new() -> Self {
        Self { active: None }
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    /// `true` while a piece is falling
    pub fn is_falling(&self) -> bool {
        self.active.is_some()
    }

    /// Spawn the next piece from `sequence`.
    ///
    /// No-op (returns `false`) while a piece is already falling.
    pub fn spawn<S: PieceSource>(
        &mut self,
        sequence: &mut PieceSequence<S>,
        dims: GridDims,
    ) -> bool {
        if self.active.is_some() {
            return false;
        }
        let (current, _next) = sequence.advance();
        self.active = Some(ActivePiece::spawn(current, dims));
        true
    }

    /// Try to move the active piece one cell.
    ///
    /// The move is applied only if every shifted cell is in bounds and not frozen.
    pub fn translate(&mut self, board: &Board, direction: Direction) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(direction);
        if moved.fits(board) {
            self.active = Some(moved);
            return true;
        }

        false
    }

    /// Advance the rotation state.
    ///
    /// No collision check: the rotated piece may overlap walls or frozen cells until
    /// the next translate re-validates it.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        self.active = Some(active.rotated());
        true
    }

    /// Check if the active piece is on the ground
    pub fn is_at_bottom(&self, board: &Board) -> bool {
        match self.active {
            Some(ref piece) => piece.is_at_bottom(board),
            None => false,
        }
    }

    /// Apply gravity once, then freeze if the piece is at the bottom.
    ///
    /// Returns `true` if the piece was frozen.
    pub fn drop_one_step(&mut self, board: &mut Board) -> bool {
        self.translate(board, Direction::Down);
        if self.is_at_bottom(board) {
            self.freeze(board);
            return true;
        }
        false
    }

    /// Lock the active piece into the frozen set
    pub fn freeze(&mut self, board: &mut Board) {
        if let Some(active) = self.active.take() {
            board.freeze(active.cells());
        }
    }

    /// Drop the active piece without freezing it
    pub fn clear(&mut self) {
        self.active = None;
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }
}
