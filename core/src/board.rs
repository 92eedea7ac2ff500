use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Full grid of cells for one moment of a game.
///
/// Cloning a board deep-copies every cell, so a stored snapshot never observes
/// later moves.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    /// Builds a `rows` x `cols` board with every cell hidden, unflagged and mine-free.
    pub fn new_empty(rows: Coord, cols: Coord) -> Self {
        let cells = Array2::from_shape_fn((usize::from(rows), usize::from(cols)), |(row, col)| {
            // both indices are bounded by the Coord-sized shape
            Cell::new((row as Coord, col as Coord))
        });
        Self { cells }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        let (rows, cols) = self.size();
        row < rows && col < cols
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Option<&Cell> {
        self.cells.get(coords.to_nd_index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut()
    }

    /// Cells in row-major order, one slice-like row at a time.
    pub fn rows_iter(&self) -> impl Iterator<Item = ndarray::ArrayView1<'_, Cell>> {
        self.cells.rows().into_iter()
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    pub fn mine_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_mine)
    }

    pub fn flagged_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_flagged)
    }

    pub fn revealed_count(&self) -> CellCount {
        self.count_where(|cell| cell.is_revealed)
    }

    /// Coordinates of every mine in row-major order.
    pub fn mine_coords(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter().filter(|cell| cell.is_mine).map(Cell::coords)
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords).filter(|&pos| self[pos].is_mine).count() as u8
    }

    fn count_where(&self, pred: impl Fn(&Cell) -> bool) -> CellCount {
        // boards are capped at Coord::MAX squared cells, which fits CellCount
        self.iter().filter(|cell| pred(cell)).count() as CellCount
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

/// Free-function form of [`Board::new_empty`].
pub fn create_empty_board(rows: Coord, cols: Coord) -> Board {
    Board::new_empty(rows, cols)
}
