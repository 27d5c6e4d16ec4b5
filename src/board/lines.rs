//! Precomputed lines scanned for wins.
//!
//! The table is built once per configuration. Offsets sweep from
//! `-(side - 1)` to `side - 1`; each offset contributes, in order:
//! 1. the column at `x = offset`; negative offsets name no column, and those
//!    empty lines are left out of the table,
//! 2. the rightward diagonal `(offset + y, y)`,
//! 3. the leftward diagonal `(offset + side - 1 - y, y)`.
//!
//! Diagonals are kept only when at least `row_length` squares long. One full
//! row per `y` is appended after the sweep.

use smallvec::SmallVec;

use super::geometry::{Geometry, Square};
use crate::core::GameConfig;

/// An ordered run of on-board squares.
pub type Line = SmallVec<[Square; 8]>;

/// Which family a line belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LineKind {
    Column,
    RightDiagonal,
    LeftDiagonal,
    Row,
}

/// Every line on which a win can be scored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineTable {
    lines: Vec<(LineKind, Line)>,
}

impl LineTable {
    /// Enumerate the lines for a configuration.
    #[must_use]
    pub fn build(config: &GameConfig) -> Self {
        let geometry = Geometry::new(config);
        let side = geometry.squares_per_side() as i64;
        let on_board = |cells: Vec<(i64, i64)>| collect_on_board(&geometry, cells);

        let mut lines = Vec::new();
        for offset in (1 - side)..side {
            let column = on_board((0..side).map(|y| (offset, y)).collect());
            if !column.is_empty() {
                lines.push((LineKind::Column, column));
            }

            let right = on_board((0..side).map(|y| (offset + y, y)).collect());
            if right.len() >= config.row_length {
                lines.push((LineKind::RightDiagonal, right));
            }

            let left = on_board((0..side).map(|y| (offset + side - 1 - y, y)).collect());
            if left.len() >= config.row_length {
                lines.push((LineKind::LeftDiagonal, left));
            }
        }

        for y in 0..side {
            let row = on_board((0..side).map(|x| (x, y)).collect());
            lines.push((LineKind::Row, row));
        }

        Self { lines }
    }

    /// Number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Iterate over the lines in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().map(|(_, line)| line)
    }

    /// Iterate over lines together with their family.
    pub fn iter_kinds(&self) -> impl Iterator<Item = (LineKind, &Line)> {
        self.lines.iter().map(|(kind, line)| (*kind, line))
    }
}

/// Keep the candidate squares that lie on the board, in order.
fn collect_on_board(geometry: &Geometry, cells: Vec<(i64, i64)>) -> Line {
    cells
        .into_iter()
        .filter_map(|(x, y)| geometry.square(x, y).ok())
        .collect()
}
