use std::str::FromStr;

use sweeper_core::{Coord, Coord2};
use thiserror::Error;

use crate::settings::Preset;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParseError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command: {0}")]
    Unknown(String),
    #[error("Expected {expected} arguments for {command}")]
    Arity {
        command: &'static str,
        expected: &'static str,
    },
    #[error("Not a number: {0}")]
    Number(String),
    #[error("Unknown difficulty: {0}")]
    Difficulty(String),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Command {
    Reveal(Coord2),
    Flag(Coord2),
    NewGame,
    Retry,
    Difficulty(Preset),
    Custom { rows: u32, cols: u32, mines: u32 },
    Cheat,
    Review,
    Play,
    Seek(usize),
    Next,
    Prev,
    God,
    Exit,
    Show,
    Help,
    Quit,
}

impl Command {
    pub(crate) const HELP: &'static str = "\
commands:
  r <row> <col>           reveal a cell
  f <row> <col>           toggle a flag
  n                       new game
  retry                   replay the same mine layout
  d <beginner|intermediate|expert>
  custom <rows> <cols> <mines>
  cheat                   toggle mine hints
  review                  step through the finished game
replay commands:
  play                    play or pause, plays until the last step
  seek <step> | next | prev
  god                     toggle god mode
  exit                    leave the replay and start a new game
  show | help | quit";
}

fn number<T: FromStr>(word: &str) -> Result<T, ParseError> {
    word.parse().map_err(|_| ParseError::Number(word.to_string()))
}

fn coords(command: &'static str, args: &[&str]) -> Result<Coord2, ParseError> {
    match args {
        [row, col] => Ok((number::<Coord>(row)?, number::<Coord>(col)?)),
        _ => Err(ParseError::Arity {
            command,
            expected: "<row> <col>",
        }),
    }
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        use Command::*;

        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((&name, args)) = words.split_first() else {
            return Err(ParseError::Empty);
        };

        Ok(match (name.to_ascii_lowercase().as_str(), args) {
            ("r" | "reveal", args) => Reveal(coords("reveal", args)?),
            ("f" | "flag", args) => Flag(coords("flag", args)?),
            ("n" | "new", []) => NewGame,
            ("retry", []) => Retry,
            ("d" | "difficulty", [level]) => {
                let preset = <Preset as clap::ValueEnum>::from_str(level, true)
                    .map_err(|_| ParseError::Difficulty(level.to_string()))?;
                Difficulty(preset)
            }
            ("custom", [rows, cols, mines]) => Custom {
                rows: number(rows)?,
                cols: number(cols)?,
                mines: number(mines)?,
            },
            ("custom", _) => {
                return Err(ParseError::Arity {
                    command: "custom",
                    expected: "<rows> <cols> <mines>",
                });
            }
            ("cheat", []) => Cheat,
            ("review", []) => Review,
            ("play" | "pause", []) => Play,
            ("seek", [step]) => Seek(number(step)?),
            ("next", []) => Next,
            ("prev", []) => Prev,
            ("god", []) => God,
            ("exit", []) => Exit,
            ("show", []) => Show,
            ("h" | "help", []) => Help,
            ("q" | "quit", []) => Quit,
            _ => return Err(ParseError::Unknown(line.trim().to_string())),
        })
    }
}
