//! Plain-text board view.
//!
//! With default flags a classic board renders as:
//!
//! ```text
//!   0 1 2 3 4 5
//! 0 . . . . . .
//! 1 . X . . . .
//! 2 . . . . . .
//! 3 . . . . . .
//! 4 . . . . O .
//! 5 . . . . . .
//! ```
//!
//! Axis labels are indices modulo 10. The flags only affect presentation.

use serde::{Deserialize, Serialize};

use crate::game::Session;

/// Independent presentation switches; any combination is valid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RenderFlags {
    /// Omit the column header and row labels.
    pub no_axes: bool,
    /// Omit the space between columns.
    pub no_spaces: bool,
    /// Omit line breaks, producing a single line.
    pub no_newlines: bool,
}

impl RenderFlags {
    /// Only the symbols, row-major, nothing else.
    pub const COMPACT: Self = Self {
        no_axes: true,
        no_spaces: true,
        no_newlines: true,
    };

    #[must_use]
    pub fn without_axes(mut self) -> Self {
        self.no_axes = true;
        self
    }

    #[must_use]
    pub fn without_spaces(mut self) -> Self {
        self.no_spaces = true;
        self
    }

    #[must_use]
    pub fn without_newlines(mut self) -> Self {
        self.no_newlines = true;
        self
    }
}

/// Render a session's board row by row.
#[must_use]
pub fn render(session: &Session, flags: RenderFlags) -> String {
    let board = session.board();
    let side = board.geometry().squares_per_side();
    let separator = if flags.no_spaces { "" } else { " " };
    let line_end = if flags.no_newlines { "" } else { "\n" };
    let label = |i: usize| char::from(b'0' + (i % 10) as u8);

    let mut out = String::with_capacity((side + 1) * (2 * side + 2));

    if !flags.no_axes {
        out.push(' ');
        for x in 0..side {
            out.push_str(separator);
            out.push(label(x));
        }
        out.push_str(line_end);
    }

    for (y, row) in board.cells().chunks(side).enumerate() {
        if !flags.no_axes {
            out.push(label(y));
        }
        for (x, &value) in row.iter().enumerate() {
            if x > 0 || !flags.no_axes {
                out.push_str(separator);
            }
            out.push(board.symbol_of(value));
        }
        out.push_str(line_end);
    }

    out
}
