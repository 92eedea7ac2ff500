use alloc::vec::Vec;
use serde::Serialize;

use crate::*;

/// Append-only log of board snapshots, one per state-changing action.
///
/// Index 0 is always the board the game started from. Entries are owned
/// copies, so nothing appended later can alter them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct History {
    entries: Vec<Board>,
}

impl History {
    pub fn new(initial: Board) -> Self {
        Self {
            entries: Vec::from([initial]),
        }
    }

    pub(crate) fn push(&mut self, board: Board) {
        self.entries.push(board);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.entries.len().saturating_sub(1)
    }

    pub fn first(&self) -> &Board {
        &self.entries[0]
    }

    pub fn last(&self) -> &Board {
        &self.entries[self.last_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Board> {
        self.entries.iter()
    }
}

impl core::ops::Index<usize> for History {
    type Output = Board;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}
