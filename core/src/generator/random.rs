use super::*;

/// Uniform rejection sampling that keeps the start cell free of mines, other than that it is
/// purely random.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
    mine_count: CellCount,
    safe_cell: Coord2,
}

impl RandomMineGenerator {
    pub fn new(seed: u64, mine_count: CellCount, safe_cell: Coord2) -> Self {
        Self {
            seed,
            mine_count,
            safe_cell,
        }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, board: &Board) -> (Board, Vec<Coord2>) {
        use rand::prelude::*;

        let mut board = board.clone();
        let (rows, cols) = board.size();

        let free_cells = board
            .iter()
            .filter(|cell| !cell.is_mine && cell.coords() != self.safe_cell)
            .count();
        let mine_count = if usize::from(self.mine_count) > free_cells {
            log::warn!(
                "Not enough room for mines, requested {} but only {} cells are free",
                self.mine_count,
                free_cells
            );
            free_cells
        } else {
            usize::from(self.mine_count)
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mines = Vec::with_capacity(mine_count);
        while mines.len() < mine_count {
            let coords = (rng.random_range(0..rows), rng.random_range(0..cols));
            if coords == self.safe_cell || board[coords].is_mine {
                continue;
            }
            board[coords].is_mine = true;
            mines.push(coords);
        }
        log::debug!(
            "Placed {} mines with seed {}, safe cell {:?}",
            mines.len(),
            self.seed,
            self.safe_cell
        );

        fill_neighbor_counts(&mut board);
        (board, mines)
    }
}
