//! Line clear module - full-row detection, compaction and scoring
//!
//! Scoring is flat: every cleared row is worth [`ROW_CLEAR_POINTS`], with no
//! multi-row, level or combo bonuses.

use std::collections::BTreeSet;

use crate::grid::Board;
use crate::types::{Coord, ROW_CLEAR_POINTS};

/// Check if a row is completely filled
pub fn is_row_full(board: &Board, y: i32) -> bool {
    board.row_count(y) == board.width() as usize
}

/// Remove row `y` and shift every cell above it down by one.
///
/// Cells below `y` are untouched.
pub fn clear_row(frozen: &BTreeSet<Coord>, y: i32) -> BTreeSet<Coord> {
    frozen
        .iter()
        .filter(|c| c.y != y)
        .map(|&c| if c.y < y { Coord::new(c.x, c.y + 1) } else { c })
        .collect()
}

/// Clear every full row, adding points to `score`.
///
/// Clearing one row never changes whether another row is full, so every row that is full
/// on entry goes in a single compaction pass. The result matches clearing bottom to top
/// with [`clear_row`] and re-checking each index. Returns the number of rows cleared.
pub fn process_rows(board: &mut Board, score: &mut u32) -> u32 {
    let full: Vec<i32> = (0..board.height())
        .filter(|&y| is_row_full(board, y))
        .collect();
    if full.is_empty() {
        return 0;
    }

    let next = collapse_rows(board.frozen(), &full);
    board.replace_frozen(next);

    let cleared = full.len() as u32;
    *score = score.saturating_add(ROW_CLEAR_POINTS.saturating_mul(cleared));
    cleared
}

/// Drop the rows in `full` (ascending) and move each remaining cell down by the number
/// of removed rows beneath it.
fn collapse_rows(frozen: &BTreeSet<Coord>, full: &[i32]) -> BTreeSet<Coord> {
    frozen
        .iter()
        .filter(|c| full.binary_search(&c.y).is_err())
        .map(|&c| {
            let below = full.len() - full.partition_point(|&y| y <= c.y);
            Coord::new(c.x, c.y + below as i32)
        })
        .collect()
}
