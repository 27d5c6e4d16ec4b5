//! # pentago
//!
//! A game engine for Pentago and its parametrized variants: an N×N grid of
//! K×K sub-boards, where each turn places a marker and then turns one
//! sub-board a quarter turn, and a run of R same-colored markers in a line
//! wins.
//!
//! ## Design Principles
//!
//! 1. **Configured, not hardcoded**: board shape, run length and player
//!    symbols all come from `GameConfig`. Classic Pentago is the default.
//!
//! 2. **N-Player**: any number of players from 1 to 255 take turns
//!    round-robin, and simultaneous wins are reported as such.
//!
//! 3. **Atomic moves**: `Session::make_move` validates everything before it
//!    writes, so a rejected move never leaves partial state behind.
//!
//! ## Modules
//!
//! - `core`: Configuration, player IDs, errors
//! - `board`: Geometry, cell storage, sub-board rotation, line table
//! - `rules`: Win scanning and game results
//! - `game`: `Session`, the state-transition entry point
//! - `render`: Plain-text board view
//! - `input`: Parsing typed move lines

pub mod core;
pub mod board;
pub mod rules;
pub mod game;
pub mod render;
pub mod input;

// Re-export commonly used types
pub use crate::core::{ConfigError, GameConfig, GameError, PlayerId};

pub use crate::board::{Board, Direction, Geometry, Line, LineKind, LineTable, Square};

pub use crate::rules::{winning_players, GameResult};

pub use crate::game::Session;

pub use crate::render::{render, RenderFlags};

pub use crate::input::{MoveInput, ParseMoveError};
