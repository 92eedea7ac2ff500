use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

/// What a single square looks like to the player.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    Hidden,
    Flagged,
    Revealed(u8),
    /// A mine that has been uncovered.
    Mine,
    /// A hidden mine hinted by god or cheat mode.
    GhostMine,
}

impl CellView {
    pub const fn of(cell: &Cell, show_mines: bool) -> Self {
        if cell.is_flagged {
            Self::Flagged
        } else if cell.is_revealed {
            if cell.is_mine {
                Self::Mine
            } else {
                Self::Revealed(cell.neighbor_count)
            }
        } else if show_mines && cell.is_mine {
            Self::GhostMine
        } else {
            Self::Hidden
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayView {
    pub cursor: usize,
    pub steps: usize,
    pub playing: bool,
    pub god_mode: bool,
}

/// Everything a front end needs to draw the current frame.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionView {
    pub difficulty: Difficulty,
    pub status: GameStatus,
    pub cells: Vec<Vec<CellView>>,
    pub elapsed_secs: u32,
    /// `None` while replaying, the counter is meaningless for past steps.
    pub mines_left: Option<isize>,
    pub history_len: usize,
    pub cheat_mode: bool,
    pub game_over: bool,
    pub replay: Option<ReplayView>,
}

impl SessionView {
    pub fn from_session(session: &Session) -> Self {
        let replay = session.replay();
        let show_mines = match replay {
            Some(replay) => replay.is_god_mode(),
            None => session.is_cheat_mode(),
        };
        let cells = session
            .display_board()
            .rows_iter()
            .map(|row| row.iter().map(|cell| CellView::of(cell, show_mines)).collect())
            .collect();

        Self {
            difficulty: session.difficulty(),
            status: session.status(),
            cells,
            elapsed_secs: session.elapsed_secs(),
            mines_left: replay.is_none().then_some(session.mines_left()),
            history_len: session.history().len(),
            cheat_mode: session.is_cheat_mode(),
            game_over: session.is_game_over_shown(),
            replay: replay.map(|replay| ReplayView {
                cursor: replay.cursor(),
                steps: replay.len(),
                playing: replay.is_playing(),
                god_mode: replay.is_god_mode(),
            }),
        }
    }
}
