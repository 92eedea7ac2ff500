use alloc::vec::Vec;
use core::time::Duration;
use rand::prelude::*;
use serde::{Deserialize, Serialize};

use crate::*;

/// Period of the play clock.
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// Valid transitions:
/// - Idle -> Playing
/// - Playing -> Won
/// - Playing -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Board is empty, mines are laid on the first reveal
    Idle,
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_idle(self) -> bool {
        matches!(self, Self::Idle)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Idle
    }
}

/// One live game together with everything needed to review or retry it.
#[derive(Clone, Debug)]
pub struct Session {
    difficulty: Difficulty,
    custom_config: DifficultyConfig,
    board: Board,
    status: GameStatus,
    elapsed_secs: u32,
    clock: Ticker,
    mines_left: isize,
    mine_locations: Option<Vec<Coord2>>,
    history: History,
    cheat_mode: bool,
    game_over_shown: bool,
    replay: Option<Replay>,
    rng: SmallRng,
}

impl Session {
    /// Starts a fresh game; `seed` drives every random layout of this session.
    pub fn new(difficulty: Difficulty, seed: u64) -> Self {
        let config = difficulty.config();
        let board = Board::new_empty(config.rows, config.cols);
        let custom_config = match difficulty {
            Difficulty::Custom(config) => config,
            _ => Difficulty::DEFAULT_CUSTOM,
        };

        let mut session = Self {
            difficulty,
            custom_config,
            history: History::new(board.clone()),
            board,
            status: GameStatus::Idle,
            elapsed_secs: 0,
            clock: Ticker::new(CLOCK_TICK),
            mines_left: config.mines as isize,
            mine_locations: None,
            cheat_mode: false,
            game_over_shown: false,
            replay: None,
            rng: SmallRng::seed_from_u64(seed),
        };
        session.reset(None);
        session
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn config(&self) -> DifficultyConfig {
        self.difficulty.config()
    }

    /// Last accepted custom configuration, used to prefill the custom form.
    pub fn custom_config(&self) -> DifficultyConfig {
        self.custom_config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board to draw: the replay cursor while reviewing, the live board otherwise.
    pub fn display_board(&self) -> &Board {
        match &self.replay {
            Some(replay) => replay.board(),
            None => &self.board,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.elapsed_secs
    }

    /// Configured mines minus placed flags, negative when over-flagged.
    pub fn mines_left(&self) -> isize {
        self.mines_left
    }

    pub fn mine_locations(&self) -> Option<&[Coord2]> {
        self.mine_locations.as_deref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn is_cheat_mode(&self) -> bool {
        self.cheat_mode
    }

    pub fn is_game_over_shown(&self) -> bool {
        self.game_over_shown
    }

    pub fn is_clock_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn replay(&self) -> Option<&Replay> {
        self.replay.as_ref()
    }

    pub fn replay_mut(&mut self) -> Option<&mut Replay> {
        self.replay.as_mut()
    }

    pub fn is_replaying(&self) -> bool {
        self.replay.is_some()
    }

    /// Discards the current game and starts over with a new random layout.
    pub fn new_game(&mut self) {
        self.reset(None);
    }

    /// Starts over with `mines` as the layout the first reveal will use.
    pub fn new_game_with_mines(&mut self, mines: Vec<Coord2>) {
        self.reset(Some(mines));
    }

    /// Starts over on the same layout as the game that was just played.
    ///
    /// When no mines were laid yet the next game gets a random layout.
    pub fn retry(&mut self) {
        let fixed = self.mine_locations.take();
        self.reset(fixed);
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        if let Difficulty::Custom(config) = difficulty {
            self.custom_config = config;
        }
        self.difficulty = difficulty;
        self.reset(None);
    }

    /// Validates and applies a custom board, keeping the current one on failure.
    pub fn apply_custom(
        &mut self,
        rows: u32,
        cols: u32,
        mines: u32,
    ) -> core::result::Result<(), ConfigError> {
        let config = DifficultyConfig::custom(rows, cols, mines)?;
        self.set_difficulty(Difficulty::Custom(config));
        Ok(())
    }

    pub fn toggle_cheat_mode(&mut self) {
        self.cheat_mode = !self.cheat_mode;
        log::debug!("cheat mode: {}", self.cheat_mode);
    }

    pub fn dismiss_game_over(&mut self) {
        self.game_over_shown = false;
    }

    pub fn reveal(&mut self, coords: Coord2) -> RevealOutcome {
        use RevealOutcome::*;

        if self.replay.is_some() || self.status.is_finished() {
            return NoChange;
        }
        let Some(cell) = self.board.cell_at(coords) else {
            log::warn!("Reveal outside the board at {:?}", coords);
            return NoChange;
        };
        // an open cell still records a snapshot, the board is simply unchanged
        if cell.is_flagged {
            return NoChange;
        }

        if self.status.is_idle() {
            self.start_game(coords);
        }

        let board = reveal_region(&self.board, coords);
        self.history.push(board.clone());

        if board[coords].is_mine {
            let board = reveal_all_mines(&board);
            self.history.push(board.clone());
            self.board = board;
            self.end_game(GameStatus::Lost);
            HitMine
        } else if check_win_condition(&board) {
            let board = flag_all_mines(&board);
            self.history.push(board.clone());
            self.board = board;
            self.mines_left = 0;
            self.end_game(GameStatus::Won);
            Won
        } else {
            self.board = board;
            Revealed
        }
    }

    pub fn toggle_flag(&mut self, coords: Coord2) -> FlagOutcome {
        use FlagOutcome::*;

        if self.replay.is_some() || self.status != GameStatus::Playing {
            return NoChange;
        }
        let Some(cell) = self.board.cell_at(coords) else {
            log::warn!("Flag outside the board at {:?}", coords);
            return NoChange;
        };
        if cell.is_revealed {
            return NoChange;
        }

        let board = toggle_flag(&self.board, coords);
        self.history.push(board.clone());
        self.board = board;
        self.mines_left = (self.config().mines as isize) - (self.board.flagged_count() as isize);
        Changed
    }

    /// Feeds elapsed wall time to the play clock and to replay auto-play.
    pub fn advance(&mut self, elapsed: Duration) {
        let ticks = self.clock.advance(elapsed);
        if ticks > 0 && self.status == GameStatus::Playing {
            self.elapsed_secs = self.elapsed_secs.saturating_add(ticks);
        }
        if let Some(replay) = &mut self.replay {
            replay.advance(elapsed);
        }
    }

    /// Enters review of the history recorded so far.
    ///
    /// A game still in play keeps its clock running while it is reviewed.
    pub fn start_replay(&mut self) {
        self.game_over_shown = false;
        self.replay = Some(Replay::start(self.history.clone()));
    }

    /// Leaves review, which always begins a brand-new game.
    pub fn exit_replay(&mut self) {
        log::debug!("Replay exited");
        self.reset(None);
    }

    fn start_game(&mut self, safe_cell: Coord2) {
        let config = self.config();
        let seed = self.rng.random();
        let (board, mines) = place_mines(
            &self.board,
            config.mines,
            safe_cell,
            self.mine_locations.as_deref(),
            seed,
        );

        self.board = board;
        self.mine_locations = Some(mines);
        self.status = GameStatus::Playing;
        self.clock.start();
        log::debug!("Game started at {:?} on {:?}", safe_cell, config);
    }

    fn end_game(&mut self, status: GameStatus) {
        self.status = status;
        self.clock.stop();
        self.game_over_shown = true;
        log::debug!("Game ended: {:?} after {}s", status, self.elapsed_secs);
    }

    fn reset(&mut self, fixed: Option<Vec<Coord2>>) {
        // tickers go first so nothing fires against the fresh state
        self.clock.stop();
        if let Some(replay) = &mut self.replay {
            replay.pause();
        }

        let config = self.config();
        let board = Board::new_empty(config.rows, config.cols);
        self.history = History::new(board.clone());
        self.board = board;
        self.status = GameStatus::Idle;
        self.elapsed_secs = 0;
        self.mines_left = config.mines as isize;
        self.mine_locations = fixed;
        self.cheat_mode = false;
        self.game_over_shown = false;
        self.replay = None;
        log::debug!("New game on {:?}", config);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Session on a 5x5 custom board whose next game uses `mines` as its layout.
    fn session_with_mines(mines: &[Coord2]) -> Session {
        let config = DifficultyConfig::custom(5, 5, mines.len() as u32).unwrap();
        let mut session = Session::new(Difficulty::Custom(config), 0);
        session.new_game_with_mines(mines.to_vec());
        session
    }

    #[test]
    fn new_session_is_idle_with_pristine_history() {
        let session = Session::new(Difficulty::Intermediate, 3);

        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.mines_left(), 40);
        assert_eq!(session.history().len(), 1);
        assert_eq!(session.history().first(), &Board::new_empty(16, 16));
        assert!(session.mine_locations().is_none());
    }

    #[test]
    fn first_reveal_is_always_safe() {
        for seed in 0..100 {
            let mut session = Session::new(Difficulty::Expert, seed);

            let outcome = session.reveal((8, 15));

            assert_ne!(outcome, RevealOutcome::HitMine, "seed {seed}");
            assert_eq!(session.board().mine_count(), 99);
            assert_eq!(session.mine_locations().map(<[_]>::len), Some(99));
        }
    }

    #[test]
    fn first_reveal_starts_playing_and_clock() {
        let mut session = session_with_mines(&[(4, 4), (4, 3)]);

        assert_eq!(session.reveal((3, 3)), RevealOutcome::Revealed);
        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.is_clock_running());
        assert_eq!(session.history().len(), 2);

        session.advance(Duration::from_millis(2500));
        assert_eq!(session.elapsed_secs(), 2);
    }

    #[test]
    fn clock_does_not_run_while_idle() {
        let mut session = Session::new(Difficulty::Beginner, 0);

        session.advance(Duration::from_secs(30));

        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn hitting_a_mine_loses_and_shows_every_mine() {
        let mut session = session_with_mines(&[(0, 0), (4, 4)]);
        session.reveal((1, 1));

        let outcome = session.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::HitMine);
        assert_eq!(session.status(), GameStatus::Lost);
        assert!(!session.is_clock_running());
        assert!(session.is_game_over_shown());
        assert!(session.board()[(0, 0)].is_revealed);
        assert!(session.board()[(4, 4)].is_revealed);
        // pristine, first reveal, mine reveal, reveal-all
        assert_eq!(session.history().len(), 4);
        let hit = &session.history()[2];
        assert!(hit[(0, 0)].is_revealed && !hit[(4, 4)].is_revealed);
    }

    #[test]
    fn winning_flags_every_mine() {
        let mut session = session_with_mines(&[(4, 4)]);

        let outcome = session.reveal((0, 0));

        assert_eq!(outcome, RevealOutcome::Won);
        assert_eq!(session.status(), GameStatus::Won);
        assert_eq!(session.mines_left(), 0);
        assert!(session.board()[(4, 4)].is_flagged);
        assert!(!session.board()[(4, 4)].is_revealed);
        assert_eq!(session.history().len(), 3);
        assert!(!session.is_clock_running());
    }

    #[test]
    fn game_over_notice_can_be_dismissed() {
        let mut session = session_with_mines(&[(4, 4)]);
        session.reveal((0, 0));
        assert!(session.is_game_over_shown());

        session.dismiss_game_over();

        assert!(!session.is_game_over_shown());
        assert_eq!(session.status(), GameStatus::Won);
    }

    #[test]
    fn finished_games_reject_moves() {
        let mut session = session_with_mines(&[(4, 4)]);
        session.reveal((0, 0));
        let history_len = session.history().len();

        assert_eq!(session.reveal((4, 4)), RevealOutcome::NoChange);
        assert_eq!(session.toggle_flag((4, 4)), FlagOutcome::NoChange);
        assert_eq!(session.history().len(), history_len);
    }

    #[test]
    fn flagged_cells_reject_reveal() {
        let mut session = session_with_mines(&[(2, 2), (2, 3)]);
        session.reveal((0, 0));
        assert_eq!(session.toggle_flag((2, 4)), FlagOutcome::Changed);
        let history_len = session.history().len();

        assert_eq!(session.reveal((2, 4)), RevealOutcome::NoChange);
        assert_eq!(session.history().len(), history_len);
    }

    #[test]
    fn revealing_an_open_cell_records_an_unchanged_snapshot() {
        let mut session = session_with_mines(&[(4, 4), (4, 3)]);
        assert_eq!(session.reveal((3, 3)), RevealOutcome::Revealed);
        let before = session.board().clone();

        assert_eq!(session.reveal((3, 3)), RevealOutcome::Revealed);

        assert_eq!(session.history().len(), 3);
        assert_eq!(session.history().last(), &before);
        assert_eq!(session.board(), &before);
        assert_eq!(session.status(), GameStatus::Playing);
    }

    #[test]
    fn flags_need_a_running_game() {
        let mut session = Session::new(Difficulty::Beginner, 0);

        assert_eq!(session.toggle_flag((0, 0)), FlagOutcome::NoChange);
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn revealed_cells_cannot_be_flagged() {
        let mut session = session_with_mines(&[(2, 2)]);
        session.reveal((1, 1));

        assert_eq!(session.toggle_flag((1, 1)), FlagOutcome::NoChange);
    }

    #[test]
    fn mines_left_tracks_flags_and_goes_negative() {
        let mut session = session_with_mines(&[(2, 2)]);
        session.reveal((1, 1));

        assert_eq!(session.toggle_flag((2, 2)), FlagOutcome::Changed);
        assert_eq!(session.mines_left(), 0);
        session.toggle_flag((4, 4));
        session.toggle_flag((4, 3));
        assert_eq!(session.mines_left(), -2);

        session.toggle_flag((4, 4));
        assert_eq!(session.mines_left(), -1);
        // pristine, reveal, four flag toggles
        assert_eq!(session.history().len(), 6);
    }

    #[test]
    fn retry_reproduces_the_layout() {
        let mut session = Session::new(Difficulty::Beginner, 9);
        session.reveal((4, 4));
        let first_board = session.history()[1].clone();
        let mines = session.mine_locations().map(<[_]>::to_vec);

        session.retry();
        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.history().len(), 1);
        // a different first click still gets the recorded layout
        session.reveal((0, 0));

        assert_eq!(session.mine_locations().map(<[_]>::to_vec), mines);
        assert_eq!(session.board().mine_coords().count(), 10);
        for cell in first_board.iter() {
            let retried = &session.board()[cell.coords()];
            assert_eq!(retried.is_mine, cell.is_mine);
            if !cell.is_mine {
                assert_eq!(retried.neighbor_count, cell.neighbor_count);
            }
        }
    }

    #[test]
    fn retry_before_any_move_keeps_random_layout() {
        let mut session = Session::new(Difficulty::Beginner, 9);

        session.retry();

        assert!(session.mine_locations().is_none());
        assert_ne!(session.reveal((0, 0)), RevealOutcome::HitMine);
    }

    #[test]
    fn new_game_resets_everything() {
        let mut session = session_with_mines(&[(2, 2)]);
        session.reveal((1, 1));
        session.toggle_flag((2, 2));
        session.toggle_cheat_mode();
        session.advance(Duration::from_secs(3));

        session.new_game();

        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.elapsed_secs(), 0);
        assert_eq!(session.mines_left(), 1);
        assert_eq!(session.history().len(), 1);
        assert!(session.mine_locations().is_none());
        assert!(!session.is_cheat_mode());
        assert!(!session.is_clock_running());
        session.advance(Duration::from_secs(3));
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn history_entries_never_change() {
        let mut session = Session::new(Difficulty::Intermediate, 21);
        let mut seen: Vec<Board> = Vec::new();

        let moves = [(0, 0), (15, 15), (0, 15), (15, 0), (8, 8), (3, 12)];
        for coords in moves {
            session.reveal(coords);
            session.toggle_flag((coords.0, 7));
            for (index, board) in seen.iter().enumerate() {
                assert_eq!(&session.history()[index], board);
            }
            seen = session.history().iter().cloned().collect();
        }
    }

    #[test]
    fn invalid_custom_config_keeps_the_current_one() {
        let mut session = Session::new(Difficulty::Expert, 0);

        let err = session.apply_custom(10, 10, 100).unwrap_err();

        assert_eq!(err, ConfigError::TooManyMines { total: 100 });
        assert_eq!(session.difficulty(), Difficulty::Expert);
        assert_eq!(session.custom_config(), Difficulty::DEFAULT_CUSTOM);
    }

    #[test]
    fn valid_custom_config_starts_a_new_game() {
        let mut session = Session::new(Difficulty::Beginner, 0);
        session.reveal((4, 4));

        session.apply_custom(20, 12, 30).unwrap();

        let config = DifficultyConfig::new_unchecked(20, 12, 30);
        assert_eq!(session.difficulty(), Difficulty::Custom(config));
        assert_eq!(session.custom_config(), config);
        assert_eq!(session.board().size(), (20, 12));
        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.mines_left(), 30);
    }

    #[test]
    fn replay_snapshots_history_and_blocks_moves() {
        let mut session = session_with_mines(&[(2, 2), (0, 4)]);
        session.reveal((1, 1));
        session.toggle_flag((2, 2));

        session.start_replay();

        let replay = session.replay().unwrap();
        assert_eq!(replay.len(), 3);
        assert_eq!(replay.cursor(), 0);
        assert!(!session.is_game_over_shown());
        assert_eq!(session.display_board(), &session.history()[0]);
        assert_eq!(session.reveal((0, 0)), RevealOutcome::NoChange);
        assert_eq!(session.toggle_flag((0, 0)), FlagOutcome::NoChange);
    }

    #[test]
    fn clock_keeps_running_while_reviewing_a_live_game() {
        let mut session = session_with_mines(&[(4, 4), (4, 3)]);
        session.reveal((3, 3));
        session.advance(Duration::from_secs(2));

        session.start_replay();
        session.advance(Duration::from_secs(5));

        assert_eq!(session.status(), GameStatus::Playing);
        assert!(session.is_clock_running());
        assert_eq!(session.elapsed_secs(), 7);

        session.exit_replay();
        assert!(!session.is_clock_running());
        assert_eq!(session.elapsed_secs(), 0);
    }

    #[test]
    fn replay_autoplay_runs_through_session_ticks() {
        let mut session = session_with_mines(&[(0, 0)]);
        session.reveal((0, 0));
        assert_eq!(session.status(), GameStatus::Lost);

        session.start_replay();
        session.replay_mut().unwrap().toggle_playback();
        session.advance(REPLAY_STEP * 10);

        let replay = session.replay().unwrap();
        assert_eq!(replay.cursor(), replay.last_index());
        assert!(!replay.is_playing());
        assert_eq!(session.display_board(), session.history().last());
    }

    #[test]
    fn exit_replay_starts_a_new_game() {
        let mut session = session_with_mines(&[(4, 4)]);
        session.reveal((0, 0));
        session.start_replay();
        session.replay_mut().unwrap().toggle_god_mode();

        session.exit_replay();

        assert!(!session.is_replaying());
        assert_eq!(session.status(), GameStatus::Idle);
        assert_eq!(session.history().len(), 1);
        assert!(session.mine_locations().is_none());
    }
}
