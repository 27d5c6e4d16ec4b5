//! A single game in progress.
//!
//! `Session` owns the configuration, the line table built from it, the
//! board and the turn counter. The only state transition is
//! [`Session::make_move`]: place the current player's marker, turn a
//! sub-board, pass the turn on. Every check happens before the first write,
//! so a rejected move leaves the session exactly as it was.
//!
//! ```
//! use pentago::board::Direction;
//! use pentago::core::GameConfig;
//! use pentago::game::Session;
//!
//! let mut session = Session::new(GameConfig::default()).unwrap();
//! session.make_move(0, 0, 0, Direction::Clockwise).unwrap();
//! assert_eq!(session.symbol_at(2, 0).unwrap(), 'X');
//! assert_eq!(session.current_player_symbol(), 'O');
//! ```

use rustc_hash::FxHashSet;
use tracing::{debug, info, instrument, warn};

use crate::board::{Board, Direction, LineTable};
use crate::core::{ConfigError, GameConfig, GameError, PlayerId};
use crate::input::MoveInput;
use crate::render::{render, RenderFlags};
use crate::rules::{winning_players, GameResult};

/// Independent, self-contained game state.
///
/// Not synchronized: callers sharing a session between threads must
/// serialize calls to [`Session::make_move`] themselves.
#[derive(Clone, Debug)]
pub struct Session {
    config: GameConfig,
    lines: LineTable,
    board: Board,
    current_player: PlayerId,
    move_count: usize,
}

impl Session {
    /// Validate a configuration and start a game on an empty board.
    /// Player 0 moves first.
    #[instrument(level = "debug", skip(config), fields(
        sub_board_size = config.sub_board_size,
        board_size = config.board_size,
        row_length = config.row_length,
        players = config.player_count(),
    ))]
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let lines = LineTable::build(&config);
        debug!(lines = lines.len(), "built line table");

        Ok(Self {
            board: Board::new(&config),
            lines,
            config,
            current_player: PlayerId::new(0),
            move_count: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Read-only view of the board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The lines scanned for wins.
    #[must_use]
    pub fn line_table(&self) -> &LineTable {
        &self.lines
    }

    /// Player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    /// Symbol of the player whose turn it is.
    #[must_use]
    pub fn current_player_symbol(&self) -> char {
        self.config.players[self.current_player.index()]
    }

    /// Completed moves so far.
    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    /// Symbol shown at a square.
    pub fn symbol_at(&self, x: usize, y: usize) -> Result<char, GameError> {
        self.board.symbol_at(x, y)
    }

    /// True once no empty square remains.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Place the current player's marker at `(x, y)`, turn `sub_board` in
    /// `direction`, and pass the turn to the next player.
    ///
    /// Fails without changing anything if the square is off the board or
    /// occupied, or if `sub_board` does not exist.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn make_move(
        &mut self,
        x: usize,
        y: usize,
        sub_board: usize,
        direction: Direction,
    ) -> Result<(), GameError> {
        if let Some(occupant) = self.board.occupant(x, y)? {
            warn!(x, y, %occupant, "rejected move onto occupied square");
            return Err(GameError::OccupiedSquare { x, y, occupant });
        }
        self.board.geometry().check_sub_board(sub_board)?;

        self.board.set(x, y, self.current_player.0)?;
        debug!(x, y, "placed marker");
        self.board.rotate(sub_board, direction)?;

        self.current_player = self.current_player.next(self.config.player_count());
        self.move_count += 1;
        Ok(())
    }

    /// Play a parsed input line.
    pub fn apply_input(&mut self, input: &MoveInput) -> Result<(), GameError> {
        self.make_move(input.x, input.y, input.sub_board, input.direction)
    }

    /// Symbols of every player currently holding a winning line.
    #[must_use]
    pub fn winners(&self) -> FxHashSet<char> {
        let winners: FxHashSet<char> =
            winning_players(&self.board, &self.lines, self.config.row_length)
                .into_iter()
                .map(|player| self.config.players[player.index()])
                .collect();

        if !winners.is_empty() {
            info!(?winners, moves = self.move_count, "winning line found");
        }
        winners
    }

    /// Outcome once the game is over: any winners, otherwise a draw on a
    /// full board. `None` while play continues.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        GameResult::from_winners(self.winners())
            .or_else(|| self.is_full().then_some(GameResult::Draw))
    }

    /// Text view of the board.
    #[must_use]
    pub fn render(&self, flags: RenderFlags) -> String {
        render(self, flags)
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self, RenderFlags::default()))
    }
}
