use std::io::{BufRead, Write};
use std::thread;
use std::time::{Duration, Instant};

use sweeper_core::{Difficulty, Replay, Session, SessionView};

use crate::command::Command;
use crate::render;
use crate::settings::Settings;

/// How often auto-play checks the replay ticker.
const PLAYBACK_POLL: Duration = Duration::from_millis(50);

/// Line-driven front end: one command per line, one frame after each command.
pub(crate) struct App {
    session: Session,
    json: bool,
    allow_cheats: bool,
    last_tick: Instant,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Redraw,
    Quit,
}

impl App {
    pub(crate) fn new(settings: Settings) -> Self {
        Self {
            session: Session::new(settings.difficulty, settings.seed),
            json: settings.json,
            allow_cheats: settings.allow_cheats,
            last_tick: Instant::now(),
        }
    }

    pub(crate) fn run(mut self, input: impl BufRead, mut output: impl Write) -> anyhow::Result<()> {
        self.draw(&mut output)?;
        writeln!(output, "type `help` for commands")?;

        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            self.tick();

            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(output, "{}", err)?;
                    continue;
                }
            };
            log::trace!("command: {:?}", command);

            match self.apply(command, &mut output)? {
                Flow::Continue => {}
                Flow::Redraw => {
                    self.draw(&mut output)?;
                    // the notice is shown once, the next frame is the plain board
                    if self.session.is_game_over_shown() {
                        self.session.dismiss_game_over();
                    }
                }
                Flow::Quit => break,
            }
        }
        Ok(())
    }

    /// Feeds wall time since the previous call to the session clocks.
    fn tick(&mut self) {
        let now = Instant::now();
        self.session.advance(now - self.last_tick);
        self.last_tick = now;
    }

    fn draw(&self, output: &mut impl Write) -> anyhow::Result<()> {
        let view = SessionView::from_session(&self.session);
        if self.json {
            writeln!(output, "{}", render::render_json(&view)?)?;
        } else {
            write!(output, "{}", render::render_text(&view)?)?;
        }
        output.flush()?;
        Ok(())
    }

    fn apply(&mut self, command: Command, output: &mut impl Write) -> anyhow::Result<Flow> {
        use Command::*;

        let replaying = self.session.is_replaying();
        let flow = match command {
            Reveal(coords) | Flag(coords) if !replaying => {
                if let Err(err) = self.session.board().validate_coords(coords) {
                    writeln!(output, "{}: {:?}", err, coords)?;
                    return Ok(Flow::Continue);
                }
                let updated = match command {
                    Reveal(_) => {
                        let outcome = self.session.reveal(coords);
                        if outcome.ends_game() {
                            log::info!("game over: {:?}", outcome);
                        }
                        outcome.has_update()
                    }
                    _ => self.session.toggle_flag(coords).has_update(),
                };
                if updated {
                    Flow::Redraw
                } else {
                    writeln!(output, "nothing to do at {:?}", coords)?;
                    Flow::Continue
                }
            }
            NewGame if !replaying => {
                self.session.new_game();
                Flow::Redraw
            }
            Retry if !replaying => {
                self.session.retry();
                Flow::Redraw
            }
            Difficulty(preset) if !replaying => {
                self.session.set_difficulty(preset.into());
                Flow::Redraw
            }
            Custom { rows, cols, mines } if !replaying => {
                match self.session.apply_custom(rows, cols, mines) {
                    Ok(()) => Flow::Redraw,
                    Err(err) => {
                        writeln!(output, "{}", err)?;
                        Flow::Continue
                    }
                }
            }
            Cheat if !replaying && !self.allow_cheats => {
                writeln!(output, "cheats are disabled")?;
                Flow::Continue
            }
            Cheat if !replaying => {
                self.session.toggle_cheat_mode();
                Flow::Redraw
            }
            Review if !replaying => {
                self.session.start_replay();
                Flow::Redraw
            }
            Play if replaying => {
                self.play(output)?;
                Flow::Continue
            }
            Seek(step) if replaying => self.with_replay(|replay| replay.seek(step)),
            Next if replaying => self.with_replay(|replay| replay.step_forward()),
            Prev if replaying => self.with_replay(|replay| replay.step_back()),
            God if replaying => self.with_replay(|replay| {
                replay.toggle_god_mode();
                true
            }),
            Exit if replaying => {
                self.session.exit_replay();
                Flow::Redraw
            }
            Show => Flow::Redraw,
            Help => {
                writeln!(output, "{}", Command::HELP)?;
                Flow::Continue
            }
            Quit => Flow::Quit,
            _ if replaying => {
                writeln!(output, "not available while reviewing, `exit` first")?;
                Flow::Continue
            }
            _ => {
                writeln!(output, "only available while reviewing")?;
                Flow::Continue
            }
        };
        Ok(flow)
    }

    fn with_replay(&mut self, action: impl FnOnce(&mut Replay) -> bool) -> Flow {
        match self.session.replay_mut().map(action) {
            Some(true) => Flow::Redraw,
            _ => Flow::Continue,
        }
    }

    /// Plays the replay to its last step, drawing each step as the ticker fires.
    fn play(&mut self, output: &mut impl Write) -> anyhow::Result<()> {
        if let Some(replay) = self.session.replay_mut() {
            replay.toggle_playback();
        }
        self.draw(output)?;

        while self.session.replay().is_some_and(|replay| replay.is_playing()) {
            thread::sleep(PLAYBACK_POLL);
            let before = self.session.replay().map(|replay| replay.cursor());
            self.tick();
            if self.session.replay().map(|replay| replay.cursor()) != before {
                self.draw(output)?;
            }
        }
        Ok(())
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Settings {
            difficulty: Difficulty::default(),
            seed: 0,
            json: false,
            allow_cheats: true,
        })
    }
}
