//! Sub-board rotation.
//!
//! A counter-clockwise quarter turn is performed in place as two
//! reflections about the sub-board center, each applied as cell swaps:
//! 1. across the horizontal axis: `(dx, dy) <-> (dx, -dy)` for `dy > 0`,
//! 2. across the anti-diagonal: `(dx, dy) <-> (-dy, -dx)` for `dx + dy < 0`.
//!
//! Composed, a marker at offset `(a, b)` ends up at `(b, -a)`, which on a
//! board whose `y` grows downward is a counter-clockwise turn. A clockwise
//! turn is three counter-clockwise turns.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::storage::Board;
use crate::core::GameError;

/// How to turn a sub-board after placing a marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Leave the sub-board as is.
    #[default]
    None,
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Map a direction letter: `a`/`A` (anti-clockwise) turns
    /// counter-clockwise, any other letter turns clockwise.
    ///
    /// ```
    /// use pentago::board::Direction;
    ///
    /// assert_eq!(Direction::from_letter('a'), Direction::CounterClockwise);
    /// assert_eq!(Direction::from_letter('c'), Direction::Clockwise);
    /// ```
    #[must_use]
    pub fn from_letter(letter: char) -> Self {
        if letter.eq_ignore_ascii_case(&'a') {
            Direction::CounterClockwise
        } else {
            Direction::Clockwise
        }
    }

    /// Number of counter-clockwise quarter turns this direction performs.
    #[must_use]
    pub const fn quarter_turns(self) -> usize {
        match self {
            Direction::None => 0,
            Direction::CounterClockwise => 1,
            Direction::Clockwise => 3,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::None => write!(f, "none"),
            Direction::Clockwise => write!(f, "clockwise"),
            Direction::CounterClockwise => write!(f, "counter-clockwise"),
        }
    }
}

impl Board {
    /// Turn one sub-board in place.
    ///
    /// The sub-board index is checked before any cell moves, so a failed
    /// call leaves the board untouched.
    pub fn rotate(&mut self, sub_board: usize, direction: Direction) -> Result<(), GameError> {
        let center = self.geometry().sub_board_center(sub_board)?;
        debug!(sub_board, %direction, "rotating sub-board");
        for _ in 0..direction.quarter_turns() {
            self.quarter_turn_counter_clockwise(center);
        }
        Ok(())
    }

    fn quarter_turn_counter_clockwise(&mut self, center: (i64, i64)) {
        let geometry = *self.geometry();
        let offsets = geometry.ring_offsets();

        for &dx in &offsets {
            for &dy in &offsets {
                if dy > 0 {
                    self.swap(
                        geometry.offset_square(center, dx, dy),
                        geometry.offset_square(center, dx, -dy),
                    );
                }
            }
        }

        for &dx in &offsets {
            for &dy in &offsets {
                if dx + dy < 0 {
                    self.swap(
                        geometry.offset_square(center, dx, dy),
                        geometry.offset_square(center, -dy, -dx),
                    );
                }
            }
        }
    }
}
