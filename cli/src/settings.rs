use std::path::Path;

use serde::Deserialize;
use sweeper_core::{Difficulty, DifficultyConfig};

use crate::Args;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Preset {
    Beginner,
    Intermediate,
    Expert,
}

impl From<Preset> for Difficulty {
    fn from(preset: Preset) -> Self {
        match preset {
            Preset::Beginner => Difficulty::Beginner,
            Preset::Intermediate => Difficulty::Intermediate,
            Preset::Expert => Difficulty::Expert,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize)]
pub(crate) struct CustomBoard {
    rows: u32,
    cols: u32,
    mines: u32,
}

impl CustomBoard {
    fn difficulty(self) -> anyhow::Result<Difficulty> {
        let config = DifficultyConfig::custom(self.rows, self.cols, self.mines)?;
        Ok(Difficulty::Custom(config))
    }
}

/// Optional defaults read from a TOML file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct FileSettings {
    difficulty: Option<Preset>,
    custom: Option<CustomBoard>,
    seed: Option<u64>,
    json: Option<bool>,
    allow_cheats: Option<bool>,
}

impl FileSettings {
    pub(crate) fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Settings {
    pub difficulty: Difficulty,
    pub seed: u64,
    pub json: bool,
    pub allow_cheats: bool,
}

impl Settings {
    /// Merges the command line over the file, a custom board beats a preset from the same source.
    pub(crate) fn resolve(args: &Args, file: FileSettings) -> anyhow::Result<Self> {
        let args_custom = match (args.rows, args.cols, args.mines) {
            (Some(rows), Some(cols), Some(mines)) => Some(CustomBoard { rows, cols, mines }),
            _ => None,
        };

        let difficulty = if let Some(custom) = args_custom {
            custom.difficulty()?
        } else if let Some(preset) = args.difficulty {
            preset.into()
        } else if let Some(custom) = file.custom {
            custom.difficulty()?
        } else {
            file.difficulty.map(Into::into).unwrap_or_default()
        };

        Ok(Self {
            difficulty,
            seed: args.seed.or(file.seed).unwrap_or_else(random_seed),
            json: args.json || file.json.unwrap_or(false),
            allow_cheats: !args.no_cheats && file.allow_cheats.unwrap_or(true),
        })
    }
}

fn random_seed() -> u64 {
    rand::random()
}
