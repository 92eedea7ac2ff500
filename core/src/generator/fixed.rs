use super::*;

/// Reproduces a previously recorded layout, used when retrying the same level.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator<'a> {
    locations: &'a [Coord2],
}

impl<'a> FixedMineGenerator<'a> {
    pub fn new(locations: &'a [Coord2]) -> Self {
        Self { locations }
    }
}

impl MineGenerator for FixedMineGenerator<'_> {
    fn generate(self, board: &Board) -> (Board, Vec<Coord2>) {
        let mut board = board.clone();
        let mut mines = Vec::with_capacity(self.locations.len());

        for &coords in self.locations {
            if !board.contains(coords) {
                log::warn!("Skipping mine outside the board at {:?}", coords);
                continue;
            }
            if board[coords].is_mine {
                continue;
            }
            board[coords].is_mine = true;
            mines.push(coords);
        }

        fill_neighbor_counts(&mut board);
        (board, mines)
    }
}
