//! Game configuration.
//!
//! A `GameConfig` fixes the board shape, the winning run length and the
//! player symbols for the lifetime of a game:
//! - `sub_board_size`: side length of one rotatable sub-board
//! - `board_size`: number of sub-boards along each side
//! - `row_length`: markers in a line needed to win
//! - `players`: one symbol per player, in turn order
//! - `empty_symbol`: symbol shown for unoccupied squares
//!
//! Classic Pentago is the default: a 2x2 arrangement of 3x3 sub-boards,
//! five in a row, players `X` and `O`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::PlayerId;

/// Complete game configuration. Immutable once a game is created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of one sub-board.
    pub sub_board_size: usize,

    /// Number of sub-boards per side.
    pub board_size: usize,

    /// Markers in a line needed to win.
    pub row_length: usize,

    /// Player symbols in turn order. Index `i` is `PlayerId(i)`.
    pub players: Vec<char>,

    /// Symbol for an empty square.
    pub empty_symbol: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            sub_board_size: 3,
            board_size: 2,
            row_length: 5,
            players: vec!['X', 'O'],
            empty_symbol: '.',
        }
    }
}

impl GameConfig {
    /// Create the default (classic Pentago) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the sub-board side length.
    #[must_use]
    pub fn with_sub_board_size(mut self, size: usize) -> Self {
        self.sub_board_size = size;
        self
    }

    /// Set the number of sub-boards per side.
    #[must_use]
    pub fn with_board_size(mut self, size: usize) -> Self {
        self.board_size = size;
        self
    }

    /// Set the winning run length.
    #[must_use]
    pub fn with_row_length(mut self, length: usize) -> Self {
        self.row_length = length;
        self
    }

    /// Replace the player symbols.
    #[must_use]
    pub fn with_players(mut self, players: impl IntoIterator<Item = char>) -> Self {
        self.players = players.into_iter().collect();
        self
    }

    /// Set the empty-square symbol.
    #[must_use]
    pub fn with_empty_symbol(mut self, symbol: char) -> Self {
        self.empty_symbol = symbol;
        self
    }

    /// Check that this configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sub_board_size == 0 {
            return Err(ConfigError::ZeroSize {
                field: "sub_board_size",
            });
        }
        if self.board_size == 0 {
            return Err(ConfigError::ZeroSize {
                field: "board_size",
            });
        }
        if self.row_length == 0 {
            return Err(ConfigError::ZeroSize {
                field: "row_length",
            });
        }
        if self.players.is_empty() {
            return Err(ConfigError::NoPlayers);
        }
        if self.players.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.players.len()));
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for &symbol in self.players.iter().chain(std::iter::once(&self.empty_symbol)) {
            if symbol.is_whitespace() || symbol.is_control() {
                return Err(ConfigError::MalformedSymbol(symbol.to_string()));
            }
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol));
            }
        }

        Ok(())
    }

    /// Number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Squares along one side of the whole board.
    #[must_use]
    pub fn squares_per_side(&self) -> usize {
        self.board_size * self.sub_board_size
    }

    /// Total number of sub-boards.
    #[must_use]
    pub fn sub_board_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// Cell value that marks an empty square: one past the last player index.
    #[must_use]
    pub fn empty_id(&self) -> u8 {
        self.players.len() as u8
    }

    /// Smallest power-of-two bit width able to hold every cell value
    /// (each player plus empty).
    ///
    /// ```
    /// use pentago::core::GameConfig;
    ///
    /// // X, O and empty need two bits.
    /// assert_eq!(GameConfig::default().cell_bit_width(), 2);
    /// // Four players plus empty need three bits, rounded up to four.
    /// assert_eq!(GameConfig::default().with_players(['A', 'B', 'C', 'D']).cell_bit_width(), 4);
    /// ```
    #[must_use]
    pub fn cell_bit_width(&self) -> u32 {
        let values = self.players.len() + 1;
        let bits = usize::BITS - (values - 1).leading_zeros();
        bits.max(1).next_power_of_two()
    }

    /// Symbol of a player.
    #[must_use]
    pub fn symbol_of(&self, player: PlayerId) -> Option<char> {
        self.players.get(player.index()).copied()
    }
}
