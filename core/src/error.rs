use thiserror::Error;

use crate::{Rank, TileCount};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Tile count must be a whole number")]
    NotANumber,
    #[error("Tile count {count} is outside {min}..={max}")]
    TileCountOutOfRange {
        count: i64,
        min: TileCount,
        max: TileCount,
    },
    #[error("Shuffling in progress, a new round cannot start yet")]
    Busy,
    #[error("No tile with rank {0} in this round")]
    UnknownTile(Rank),
    #[error("Arena surface is unavailable")]
    ArenaUnavailable,
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid color {0:?}, expected #RRGGBB")]
    InvalidColor(String),
    #[error("Duplicate palette color {0}")]
    DuplicateColor(String),
    #[error("Tile range {min}..={max} is empty or starts at zero")]
    InvalidTileRange { min: TileCount, max: TileCount },
    #[error("Palette has {available} colors but up to {requested} tiles are allowed")]
    PaletteTooSmall { available: usize, requested: TileCount },
    #[error("{field} must be between 1 and {max} ms, got {ms}")]
    InvalidTiming {
        field: &'static str,
        ms: u64,
        max: u64,
    },
}
