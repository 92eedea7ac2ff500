use core::time::Duration;

use crate::*;

/// Delay between two steps while a replay plays on its own.
pub const REPLAY_STEP: Duration = Duration::from_millis(800);

/// Read-only cursor over a snapshot of a game's history.
///
/// The replay owns its copy of the history taken when it started, later moves
/// in the session never show up here.
#[derive(Clone, Debug, PartialEq)]
pub struct Replay {
    history: History,
    cursor: usize,
    god_mode: bool,
    autoplay: Ticker,
}

impl Replay {
    pub fn start(history: History) -> Self {
        log::debug!("Replay started with {} steps", history.len());
        Self {
            history,
            cursor: 0,
            god_mode: false,
            autoplay: Ticker::new(REPLAY_STEP),
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn last_index(&self) -> usize {
        self.history.last_index()
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor >= self.last_index()
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_running()
    }

    pub fn is_god_mode(&self) -> bool {
        self.god_mode
    }

    /// Board at the cursor.
    pub fn board(&self) -> &Board {
        &self.history[self.cursor]
    }

    /// Display state of one cell at the cursor, ghosting hidden mines in god mode.
    pub fn cell_view(&self, coords: Coord2) -> CellView {
        CellView::of(&self.board()[coords], self.god_mode)
    }

    /// Moves the cursor to `index`, which must lie in `0..len()`; other values are ignored.
    ///
    /// Landing on the last step stops auto-play.
    pub fn seek(&mut self, index: usize) -> bool {
        if index >= self.len() {
            log::warn!("Replay seek to {} outside of {} steps", index, self.len());
            return false;
        }

        self.cursor = index;
        if self.is_at_end() {
            self.pause();
        }
        true
    }

    /// Moves one step back, returns `false` when already on the first step.
    pub fn step_back(&mut self) -> bool {
        match self.cursor.checked_sub(1) {
            Some(index) => self.seek(index),
            None => false,
        }
    }

    /// Moves one step forward, returns `false` when already on the last step.
    pub fn step_forward(&mut self) -> bool {
        if self.is_at_end() {
            return false;
        }
        self.seek(self.cursor + 1)
    }

    pub fn play(&mut self) {
        if !self.autoplay.is_running() {
            self.autoplay.start();
        }
    }

    pub fn pause(&mut self) {
        self.autoplay.stop();
    }

    pub fn toggle_playback(&mut self) {
        if self.is_playing() {
            self.pause();
        } else {
            self.play();
        }
    }

    pub fn toggle_god_mode(&mut self) {
        self.god_mode = !self.god_mode;
    }

    /// Feeds elapsed time to auto-play, returns whether the cursor moved.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let ticks = self.autoplay.advance(elapsed);
        let start = self.cursor;

        for _ in 0..ticks {
            if self.is_at_end() {
                break;
            }
            self.cursor += 1;
        }
        if self.is_at_end() {
            self.pause();
        }

        self.cursor != start
    }
}
