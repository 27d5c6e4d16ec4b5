//! Game rules beyond placement and rotation: win detection and results.

pub mod result;
pub mod win;

pub use result::GameResult;
pub use win::winning_players;
