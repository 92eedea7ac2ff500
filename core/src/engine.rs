use alloc::collections::VecDeque;

use crate::*;

/// Reveals `coords` on a copy of `board` and flood-fills through zero-count cells.
///
/// A revealed or flagged start cell yields an unchanged copy. Mines stop the fill at the start
/// cell, detecting the loss is up to the caller. Flagged cells are never opened by the cascade.
pub fn reveal_region(board: &Board, coords: Coord2) -> Board {
    let mut board = board.clone();
    let mut to_visit = VecDeque::from([coords]);

    while let Some(visit_coords) = to_visit.pop_front() {
        let cell = &mut board[visit_coords];
        if cell.is_revealed || cell.is_flagged {
            continue;
        }

        cell.is_revealed = true;
        log::trace!(
            "Revealed cell at {:?}, mine: {}, count: {}",
            visit_coords,
            cell.is_mine,
            cell.neighbor_count
        );

        if cell.is_mine || cell.neighbor_count > 0 {
            continue;
        }

        let neighbors = board
            .iter_neighbors(visit_coords)
            .filter(|&pos| !board[pos].is_revealed && !board[pos].is_flagged);
        to_visit.extend(neighbors);
    }

    board
}

/// Flips the flag on `coords` of a copy of `board`, whatever the cell's state.
pub fn toggle_flag(board: &Board, coords: Coord2) -> Board {
    let mut board = board.clone();
    let cell = &mut board[coords];
    cell.is_flagged = !cell.is_flagged;
    board
}

/// True iff every safe cell is revealed and no mine is.
pub fn check_win_condition(board: &Board) -> bool {
    board.iter().all(|cell| cell.is_mine != cell.is_revealed)
}

/// Reveals every mine, leaving flags and safe cells alone.
pub fn reveal_all_mines(board: &Board) -> Board {
    let mut board = board.clone();
    for cell in board.iter_mut().filter(|cell| cell.is_mine) {
        cell.is_revealed = true;
    }
    board
}

/// Flags every mine, used to display a won board.
pub fn flag_all_mines(board: &Board) -> Board {
    let mut board = board.clone();
    for cell in board.iter_mut().filter(|cell| cell.is_mine) {
        cell.is_flagged = true;
    }
    board
}
