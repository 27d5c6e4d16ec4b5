//! Core engine types: configuration, player identifiers, errors.
//!
//! Everything else in the crate is parametrized by a validated `GameConfig`.

pub mod config;
pub mod error;
pub mod player;

pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use player::PlayerId;
