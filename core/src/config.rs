use serde::{Deserialize, Serialize};

use crate::*;

/// Smallest side length accepted for a custom board.
pub const MIN_SIDE: Coord = 5;

/// Largest side length accepted for a custom board.
pub const MAX_SIDE: Coord = 50;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
}

impl DifficultyConfig {
    pub const BEGINNER: Self = Self::new_unchecked(9, 9, 10);
    pub const INTERMEDIATE: Self = Self::new_unchecked(16, 16, 40);
    pub const EXPERT: Self = Self::new_unchecked(16, 30, 99);

    pub const fn new_unchecked(rows: Coord, cols: Coord, mines: CellCount) -> Self {
        Self { rows, cols, mines }
    }

    /// Validates raw user input for a custom board.
    ///
    /// Rules are checked in order and the first failure is reported: minimum
    /// size, maximum size, minimum mines, then mines strictly below the cell
    /// count.
    pub fn custom(rows: u32, cols: u32, mines: u32) -> core::result::Result<Self, ConfigError> {
        let (min, max) = (u32::from(MIN_SIDE), u32::from(MAX_SIDE));

        if rows < min || cols < min {
            return Err(ConfigError::TooSmall);
        }
        if rows > max || cols > max {
            return Err(ConfigError::TooLarge);
        }
        if mines < 1 {
            return Err(ConfigError::TooFewMines);
        }

        let (rows, cols) = (rows as Coord, cols as Coord);
        let total = mult(rows, cols);
        if mines >= u32::from(total) {
            return Err(ConfigError::TooManyMines { total });
        }

        Ok(Self::new_unchecked(rows, cols, mines as CellCount))
    }
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self::BEGINNER
    }
}

/// Which difficulty slot is selected.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Expert,
    Custom(DifficultyConfig),
}

impl Difficulty {
    /// Starting value of the custom slot before the player edits it.
    pub const DEFAULT_CUSTOM: DifficultyConfig = DifficultyConfig::new_unchecked(10, 10, 10);

    pub const fn config(self) -> DifficultyConfig {
        use Difficulty::*;
        match self {
            Beginner => DifficultyConfig::BEGINNER,
            Intermediate => DifficultyConfig::INTERMEDIATE,
            Expert => DifficultyConfig::EXPERT,
            Custom(config) => config,
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::Beginner
    }
}
