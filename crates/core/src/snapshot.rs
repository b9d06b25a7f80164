//! Snapshot module - read-only render state for one frame
//!
//! Filled by [`GameSession::snapshot_into`](crate::game_state::GameSession::snapshot_into),
//! which reuses the frozen-cell buffer between frames.

use crate::active::ActivePiece;
use crate::types::{Coord, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    pub anchor: Coord,
    pub cells: [Coord; 4],
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            anchor: value.anchor,
            cells: value.cells(),
        }
    }
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub width: i32,
    pub height: i32,
    pub active: Option<ActiveSnapshot>,
    /// Frozen cells in `(x, y)` order
    pub frozen: Vec<Coord>,
    pub next: Option<PieceKind>,
    pub score: u32,
    pub rows_cleared: u32,
    pub pieces_spawned: u32,
}

impl GameSnapshot {
    /// What occupies `(x, y)`, active piece first
    pub fn cell_at(&self, coord: Coord) -> Option<CellView> {
        if let Some(active) = self.active {
            if active.cells.contains(&coord) {
                return Some(CellView::Active(active.kind));
            }
        }
        self.frozen
            .binary_search(&coord)
            .ok()
            .map(|_| CellView::Frozen)
    }
}

/// Occupancy of one cell as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Active(PieceKind),
    Frozen,
}
