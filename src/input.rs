//! Parsing typed move lines.
//!
//! A move line holds four tokens separated by whitespace and/or commas:
//! `x y sub_board direction`. The direction token's first letter is mapped
//! with [`Direction::from_letter`]; `-` keeps the sub-board as it is.
//!
//! ```
//! use pentago::board::Direction;
//! use pentago::input::MoveInput;
//!
//! let input: MoveInput = "3, 4, 1, a".parse().unwrap();
//! assert_eq!((input.x, input.y, input.sub_board), (3, 4, 1));
//! assert_eq!(input.direction, Direction::CounterClockwise);
//! ```

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::board::Direction;

/// One parsed move: where to place and which sub-board to turn how.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveInput {
    pub x: usize,
    pub y: usize,
    pub sub_board: usize,
    pub direction: Direction,
}

/// Why a move line could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseMoveError {
    #[error("expected 4 values (x y sub-board direction), got {0}")]
    WrongTokenCount(usize),

    #[error("{field} must be a non-negative integer, got {token:?}")]
    NotANumber { field: &'static str, token: String },
}

impl FromStr for MoveInput {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        let [x, y, sub_board, direction] = tokens[..] else {
            return Err(ParseMoveError::WrongTokenCount(tokens.len()));
        };

        let number = |field: &'static str, token: &str| {
            token.parse::<usize>().map_err(|_| ParseMoveError::NotANumber {
                field,
                token: token.to_string(),
            })
        };

        let direction = match direction.chars().next() {
            Some('-') | None => Direction::None,
            Some(letter) => Direction::from_letter(letter),
        };

        Ok(MoveInput {
            x: number("x", x)?,
            y: number("y", y)?,
            sub_board: number("sub-board", sub_board)?,
            direction,
        })
    }
}
