//! Grid module - bounds and occupancy over the playfield
//!
//! The board is a `width x height` grid. Locked cells are kept as a set of coordinates
//! (the "frozen set") rather than a dense array, so grid dimensions are chosen at runtime.
//! Coordinates: (x, y) where x ranges 0..width (left to right), y ranges 0..height (top to bottom).
//!
//! A per-row cell count is kept alongside the set so full-row checks are O(1).

use std::collections::BTreeSet;

use crate::types::Coord;

/// Validated grid dimensions (both strictly positive)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDims {
    width: i32,
    height: i32,
}

impl GridDims {
    /// Returns `None` unless both sides are positive
    pub fn new(width: i32, height: i32) -> Option<Self> {
        (width > 0 && height > 0).then_some(Self { width, height })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Index of the bottom row
    pub fn last_row(&self) -> i32 {
        self.height - 1
    }

    /// Where new pieces are anchored: horizontally centered, top row
    pub fn spawn_coord(&self) -> Coord {
        Coord::new(self.width / 2, 0)
    }
}

/// True iff `0 <= x < width` and `0 <= y < height`
#[inline]
pub fn in_bounds(dims: GridDims, coord: Coord) -> bool {
    coord.x >= 0 && coord.x < dims.width && coord.y >= 0 && coord.y < dims.height
}

/// True iff `coord` is a frozen cell
#[inline]
pub fn occupied(frozen: &BTreeSet<Coord>, coord: Coord) -> bool {
    frozen.contains(&coord)
}

/// The playfield: dimensions plus the set of frozen cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: GridDims,
    frozen: BTreeSet<Coord>,
    /// `row_counts[y]` is the number of frozen cells in row `y`
    row_counts: Vec<usize>,
}

impl Board {
    /// Create a new empty board
    pub fn new(dims: GridDims) -> Self {
        Self {
            dims,
            frozen: BTreeSet::new(),
            row_counts: vec![0; dims.height as usize],
        }
    }

    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// Get width of the board
    pub fn width(&self) -> i32 {
        self.dims.width
    }

    /// Get height of the board
    pub fn height(&self) -> i32 {
        self.dims.height
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        in_bounds(self.dims, coord)
    }

    /// Check if position holds a frozen cell
    pub fn is_occupied(&self, coord: Coord) -> bool {
        occupied(&self.frozen, coord)
    }

    /// Check if position is valid for an active cell (within bounds and not frozen)
    pub fn is_valid(&self, coord: Coord) -> bool {
        self.in_bounds(coord) && !self.is_occupied(coord)
    }

    /// Lock cells into the frozen set.
    ///
    /// Out-of-bounds cells are skipped; returns how many cells were newly inserted.
    pub fn freeze(&mut self, cells: impl IntoIterator<Item = Coord>) -> usize {
        let mut inserted = 0;
        for cell in cells {
            if self.in_bounds(cell) && self.frozen.insert(cell) {
                self.row_counts[cell.y as usize] += 1;
                inserted += 1;
            }
        }
        inserted
    }

    /// Number of frozen cells in row `y`
    pub fn row_count(&self, y: i32) -> usize {
        usize::try_from(y)
            .ok()
            .and_then(|row| self.row_counts.get(row))
            .copied()
            .unwrap_or(0)
    }

    /// Check if any of `cells` would land on a frozen cell
    pub fn is_spawn_blocked(&self, cells: &[Coord]) -> bool {
        cells.iter().any(|&c| self.is_occupied(c))
    }

    /// Iterate over frozen cells in `(x, y)` order
    pub fn cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.frozen.iter().copied()
    }

    pub fn frozen(&self) -> &BTreeSet<Coord> {
        &self.frozen
    }

    /// Swap in a new frozen set; every cell must be in bounds
    pub(crate) fn replace_frozen(&mut self, frozen: BTreeSet<Coord>) {
        self.row_counts.fill(0);
        for cell in &frozen {
            self.row_counts[cell.y as usize] += 1;
        }
        self.frozen = frozen;
    }

    pub fn len(&self) -> usize {
        self.frozen.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frozen.is_empty()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.frozen.clear();
        self.row_counts.fill(0);
    }
}
