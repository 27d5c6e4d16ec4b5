//! Board geometry: coordinates, sub-board layout and rotation offsets.
//!
//! ## Half units
//!
//! A sub-board with an even side length has its center between squares.
//! Centers and ring offsets are therefore measured in *half units* (twice
//! the square distance), which keeps every computation integral:
//!
//! ```
//! use pentago::board::Geometry;
//! use pentago::core::GameConfig;
//!
//! let geometry = Geometry::new(&GameConfig::default());
//! // 3x3 sub-boards: center of sub-board 0 is square (1, 1).
//! assert_eq!(geometry.sub_board_center(0).unwrap(), (2, 2));
//! assert_eq!(geometry.ring_offsets(), vec![-2, 0, 2]);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{GameConfig, GameError};

/// An on-board square. Column `x`, row `y`, both 0-based from the top-left.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub x: usize,
    pub y: usize,
}

impl Square {
    /// Create a square. Does not check bounds; see [`Geometry::square`].
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Shape of a board: sub-board side length and sub-boards per side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Geometry {
    sub_board_size: usize,
    board_size: usize,
}

impl Geometry {
    /// Take the board shape from a configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self {
            sub_board_size: config.sub_board_size,
            board_size: config.board_size,
        }
    }

    #[must_use]
    pub fn sub_board_size(&self) -> usize {
        self.sub_board_size
    }

    #[must_use]
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    #[must_use]
    pub fn squares_per_side(&self) -> usize {
        self.board_size * self.sub_board_size
    }

    #[must_use]
    pub fn square_count(&self) -> usize {
        self.squares_per_side() * self.squares_per_side()
    }

    #[must_use]
    pub fn sub_board_count(&self) -> usize {
        self.board_size * self.board_size
    }

    /// True iff both coordinates lie in `[0, squares_per_side)`.
    #[must_use]
    pub fn is_on_board(&self, x: i64, y: i64) -> bool {
        let side = self.squares_per_side() as i64;
        (0..side).contains(&x) && (0..side).contains(&y)
    }

    /// Bounds-checked conversion from signed coordinates to a square.
    pub fn square(&self, x: i64, y: i64) -> Result<Square, GameError> {
        if self.is_on_board(x, y) {
            Ok(Square::new(x as usize, y as usize))
        } else {
            Err(GameError::OutOfRange {
                x,
                y,
                size: self.squares_per_side(),
            })
        }
    }

    /// Row-major index of a square in flat storage.
    #[must_use]
    pub(crate) fn index_of(&self, square: Square) -> usize {
        square.y * self.squares_per_side() + square.x
    }

    /// Fail unless `index` names a sub-board.
    pub fn check_sub_board(&self, index: usize) -> Result<(), GameError> {
        if index < self.sub_board_count() {
            Ok(())
        } else {
            Err(GameError::InvalidSubBoard {
                index,
                count: self.sub_board_count(),
            })
        }
    }

    /// Center of a sub-board in half units.
    ///
    /// Sub-boards are numbered row-major from 0 at the top-left.
    pub fn sub_board_center(&self, index: usize) -> Result<(i64, i64), GameError> {
        self.check_sub_board(index)?;
        let size = self.sub_board_size as i64;
        let column = (index % self.board_size) as i64;
        let row = (index / self.board_size) as i64;
        Ok((
            2 * size * column + (size - 1),
            2 * size * row + (size - 1),
        ))
    }

    /// Offsets from a sub-board center to each of its columns (or rows), in
    /// half units, ascending. There are exactly `sub_board_size` of them.
    #[must_use]
    pub fn ring_offsets(&self) -> Vec<i64> {
        let size = self.sub_board_size as i64;
        (0..size).map(|i| 2 * i - (size - 1)).collect()
    }

    /// Square at `center + offset`, both in half units.
    pub(crate) fn offset_square(&self, center: (i64, i64), dx: i64, dy: i64) -> Square {
        let x = (center.0 + dx) / 2;
        let y = (center.1 + dy) / 2;
        debug_assert!(self.is_on_board(x, y));
        Square::new(x as usize, y as usize)
    }
}
