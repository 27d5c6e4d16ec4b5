//! Error types for configuration and gameplay.

use super::player::PlayerId;

/// Errors that prevent a game from being constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    ZeroSize { field: &'static str },

    #[error("at least one player is required")]
    NoPlayers,

    #[error("at most 255 players are supported (got {0})")]
    TooManyPlayers(usize),

    #[error("symbol {0:?} is not a single printable character")]
    MalformedSymbol(String),

    #[error("symbol '{0}' is used more than once")]
    DuplicateSymbol(char),
}

/// Errors raised while reading or mutating a game in progress.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("square ({x}, {y}) is off a {size}x{size} board")]
    OutOfRange { x: i64, y: i64, size: usize },

    #[error("sub-board {index} does not exist (valid: 0..{count})")]
    InvalidSubBoard { index: usize, count: usize },

    #[error("square ({x}, {y}) is already occupied by {occupant}")]
    OccupiedSquare { x: usize, y: usize, occupant: PlayerId },

    #[error("symbol '{0}' does not belong to any player")]
    UnknownSymbol(char),

    #[error("cell value {value} is out of range (max {max})")]
    InvalidCellValue { value: u8, max: u8 },

    #[error("invalid board: {0}")]
    InvalidBoard(&'static str),
}
