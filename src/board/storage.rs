//! Board storage: one small integer per square.
//!
//! A cell holds a player index (`0..player_count`) or the configuration's
//! `empty_id` (equal to `player_count`). Cells live in a flat row-major
//! `Vec<u8>`; at most 255 players keeps every value in a byte.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::geometry::{Geometry, Square};
use crate::core::{GameConfig, GameError, PlayerId};

/// Square-addressable grid of cell values plus the symbol table used to
/// translate them.
///
/// Deserialization goes through [`BoardData`] and rejects documents that
/// break the storage invariants.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BoardData")]
pub struct Board {
    geometry: Geometry,
    cells: Vec<u8>,
    /// Player symbols followed by the empty symbol, indexed by cell value.
    symbols: Vec<char>,
    #[serde(skip_serializing)]
    symbol_ids: FxHashMap<char, u8>,
}

/// Serialized form of a [`Board`], checked on the way in.
#[derive(Clone, Debug, Deserialize)]
pub struct BoardData {
    geometry: Geometry,
    cells: Vec<u8>,
    symbols: Vec<char>,
}

impl TryFrom<BoardData> for Board {
    type Error = GameError;

    fn try_from(data: BoardData) -> Result<Self, Self::Error> {
        let BoardData {
            geometry,
            cells,
            symbols,
        } = data;

        if symbols.len() < 2 || symbols.len() > 256 {
            return Err(GameError::InvalidBoard("symbol table must hold 1-255 players plus empty"));
        }
        if geometry.square_count() == 0 {
            return Err(GameError::InvalidBoard("board has no squares"));
        }
        if cells.len() != geometry.square_count() {
            return Err(GameError::InvalidBoard("cell count does not match the board size"));
        }
        let empty = (symbols.len() - 1) as u8;
        if cells.iter().any(|&c| c > empty) {
            return Err(GameError::InvalidBoard("cell value outside the symbol table"));
        }

        let mut symbol_ids = FxHashMap::default();
        for (i, &symbol) in symbols.iter().enumerate() {
            if symbol_ids.insert(symbol, i as u8).is_some() {
                return Err(GameError::InvalidBoard("symbols are not distinct"));
            }
        }
        symbol_ids.remove(&symbols[empty as usize]);

        Ok(Self {
            geometry,
            cells,
            symbols,
            symbol_ids,
        })
    }
}

impl Board {
    /// Create an all-empty board for a (validated) configuration.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let geometry = Geometry::new(config);
        let symbols: Vec<char> = config
            .players
            .iter()
            .copied()
            .chain(std::iter::once(config.empty_symbol))
            .collect();
        let symbol_ids = config
            .players
            .iter()
            .enumerate()
            .map(|(i, &s)| (s, i as u8))
            .collect();

        Self {
            geometry,
            cells: vec![config.empty_id(); geometry.square_count()],
            symbols,
            symbol_ids,
        }
    }

    #[must_use]
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// Cell value that marks an empty square.
    #[must_use]
    pub fn empty_id(&self) -> u8 {
        (self.symbols.len() - 1) as u8
    }

    /// Read a cell.
    pub fn get(&self, x: usize, y: usize) -> Result<u8, GameError> {
        let square = self.checked(x, y)?;
        Ok(self.cell(square))
    }

    /// Overwrite a cell with a player index or `empty_id`. Performs no
    /// move-legality check of its own.
    pub fn set(&mut self, x: usize, y: usize, value: u8) -> Result<(), GameError> {
        let square = self.checked(x, y)?;
        if value > self.empty_id() {
            return Err(GameError::InvalidCellValue {
                value,
                max: self.empty_id(),
            });
        }
        let index = self.geometry.index_of(square);
        self.cells[index] = value;
        Ok(())
    }

    /// True if no marker occupies the square.
    pub fn is_empty(&self, x: usize, y: usize) -> Result<bool, GameError> {
        Ok(self.get(x, y)? == self.empty_id())
    }

    /// Player whose marker occupies the square, if any.
    pub fn occupant(&self, x: usize, y: usize) -> Result<Option<PlayerId>, GameError> {
        let value = self.get(x, y)?;
        Ok((value != self.empty_id()).then_some(PlayerId::new(value)))
    }

    /// Symbol shown for the square.
    pub fn symbol_at(&self, x: usize, y: usize) -> Result<char, GameError> {
        let value = self.get(x, y)?;
        Ok(self.symbols[value as usize])
    }

    /// Place the marker of the player owning `symbol`.
    pub fn set_symbol(&mut self, x: usize, y: usize, symbol: char) -> Result<(), GameError> {
        let value = *self
            .symbol_ids
            .get(&symbol)
            .ok_or(GameError::UnknownSymbol(symbol))?;
        self.set(x, y, value)
    }

    /// Player owning a symbol.
    pub fn player_of(&self, symbol: char) -> Result<PlayerId, GameError> {
        self.symbol_ids
            .get(&symbol)
            .map(|&id| PlayerId::new(id))
            .ok_or(GameError::UnknownSymbol(symbol))
    }

    /// Symbol of a cell value. Values past the player range read as empty.
    #[must_use]
    pub fn symbol_of(&self, value: u8) -> char {
        let empty = self.empty_id() as usize;
        self.symbols[(value as usize).min(empty)]
    }

    /// True once every square is occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        let empty = self.empty_id();
        self.cells.iter().all(|&c| c != empty)
    }

    /// Number of occupied squares.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        let empty = self.empty_id();
        self.cells.iter().filter(|&&c| c != empty).count()
    }

    /// Raw cells in row-major order.
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Read a square already known to be on the board.
    #[must_use]
    pub(crate) fn cell(&self, square: Square) -> u8 {
        self.cells[self.geometry.index_of(square)]
    }

    /// Exchange the values of two on-board squares.
    pub(crate) fn swap(&mut self, a: Square, b: Square) {
        let a = self.geometry.index_of(a);
        let b = self.geometry.index_of(b);
        self.cells.swap(a, b);
    }

    fn checked(&self, x: usize, y: usize) -> Result<Square, GameError> {
        let side = self.geometry.squares_per_side();
        if x < side && y < side {
            Ok(Square::new(x, y))
        } else {
            Err(GameError::OutOfRange {
                x: x as i64,
                y: y as i64,
                size: side,
            })
        }
    }
}
