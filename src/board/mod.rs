//! The board: geometry, cell storage, sub-board rotation and the line table.
//!
//! ## Key Types
//!
//! - `Geometry`: board shape, bounds checks, sub-board centers
//! - `Board`: flat cell storage with symbol translation
//! - `Direction`: how a sub-board is turned after each placement
//! - `LineTable`: every line scanned for wins, built once per configuration

pub mod geometry;
pub mod lines;
pub mod rotation;
pub mod storage;

pub use geometry::{Geometry, Square};
pub use lines::{Line, LineKind, LineTable};
pub use rotation::Direction;
pub use storage::{Board, BoardData};
