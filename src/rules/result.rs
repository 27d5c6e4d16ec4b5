//! Outcome of a finished game.

use serde::{Deserialize, Serialize};

/// Result of a completed game, in player symbols.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(char),
    /// Several players completed a line on the same move.
    Winners(Vec<char>),
    /// Board filled with no line completed.
    Draw,
}

impl GameResult {
    /// Build a result from a winner set. Returns `None` for an empty set.
    ///
    /// Multiple winners are sorted so results compare deterministically.
    #[must_use]
    pub fn from_winners(winners: impl IntoIterator<Item = char>) -> Option<Self> {
        let mut winners: Vec<char> = winners.into_iter().collect();
        winners.sort_unstable();
        winners.dedup();
        match winners.len() {
            0 => None,
            1 => Some(GameResult::Winner(winners[0])),
            _ => Some(GameResult::Winners(winners)),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, symbol: char) -> bool {
        match self {
            GameResult::Winner(s) => *s == symbol,
            GameResult::Winners(ss) => ss.contains(&symbol),
            GameResult::Draw => false,
        }
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(s) => write!(f, "{s} wins"),
            GameResult::Winners(ss) => {
                let names: Vec<String> = ss.iter().map(char::to_string).collect();
                write!(f, "{} win", names.join(", "))
            }
            GameResult::Draw => write!(f, "draw"),
        }
    }
}
