use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    #[error("Mine layout does not match the board size")]
    LayoutMismatch,
}

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid needs at least one row and one column")]
    EmptyGrid,
    #[error("at least one mine is required")]
    NoMines,
    #[error("exclusion radius must be at least 1")]
    ZeroRadius,
    #[error("too many mines, requested {requested} but only {available} cells are usable")]
    TooManyMines {
        requested: CellCount,
        available: CellCount,
    },
}

pub type Result<T> = core::result::Result<T, GameError>;
