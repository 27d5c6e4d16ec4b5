//! Game sessions: configuration, board and turn order bound together.

mod session;

pub use session::Session;
