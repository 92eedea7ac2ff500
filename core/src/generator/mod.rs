use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Strategy for laying mines onto an empty board.
pub trait MineGenerator {
    /// Returns a copy of `board` with mines laid and neighbor counts filled in, together with the
    /// mine coordinates in the order they were placed.
    fn generate(self, board: &Board) -> (Board, Vec<Coord2>);
}

/// Lays `mine_count` mines onto a copy of `board`, never on `safe_cell`.
///
/// A non-empty `fixed_locations` replays a previous layout verbatim instead of sampling a new one;
/// `seed` only drives the random layout.
pub fn place_mines(
    board: &Board,
    mine_count: CellCount,
    safe_cell: Coord2,
    fixed_locations: Option<&[Coord2]>,
    seed: u64,
) -> (Board, Vec<Coord2>) {
    match fixed_locations {
        Some(locations) if !locations.is_empty() => FixedMineGenerator::new(locations).generate(board),
        _ => RandomMineGenerator::new(seed, mine_count, safe_cell).generate(board),
    }
}

/// Recomputes `neighbor_count` for every safe cell, mine cells are left untouched.
pub(crate) fn fill_neighbor_counts(board: &mut Board) {
    let (rows, cols) = board.size();
    for row in 0..rows {
        for col in 0..cols {
            let coords = (row, col);
            if !board[coords].is_mine {
                board[coords].neighbor_count = board.adjacent_mine_count(coords);
            }
        }
    }
}
