//! Win detection.
//!
//! Each precomputed line is walked in order while tracking the value of the
//! current run and its length. A run of `row_length` or more markers of one
//! player scores that player. Every line is scanned, so several players can
//! win at once.

use rustc_hash::FxHashSet;
use tracing::instrument;

use crate::board::{Board, LineTable};
use crate::core::PlayerId;

/// Players with a run of at least `row_length` markers on some line.
#[instrument(level = "trace", skip(board, lines))]
pub fn winning_players(board: &Board, lines: &LineTable, row_length: usize) -> FxHashSet<PlayerId> {
    let empty = board.empty_id();
    let mut winners = FxHashSet::default();

    for line in lines.iter() {
        let mut tracked: Option<u8> = None;
        let mut run = 0usize;

        for &square in line {
            let value = board.cell(square);
            if tracked == Some(value) {
                run += 1;
            } else {
                tracked = Some(value);
                run = 1;
            }

            if run >= row_length && value != empty {
                winners.insert(PlayerId::new(value));
            }
        }
    }

    winners
}
