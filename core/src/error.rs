use thiserror::Error;

use crate::CellCount;

/// Reasons a custom board configuration is refused, checked in declaration order.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Board size must be at least 5x5")]
    TooSmall,
    #[error("Board size cannot exceed 50x50")]
    TooLarge,
    #[error("There must be at least 1 mine")]
    TooFewMines,
    #[error("Mines must be less than total cells ({total})")]
    TooManyMines { total: CellCount },
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
}

pub type Result<T> = core::result::Result<T, GameError>;
