//! Errors that end a round or a match.

use crate::console::ConsoleError;
use crate::selector::MoveError;
use derive_more::{Display, From};

/// Error surfaced by players and the game loop.
///
/// Bad input and occupied cells are handled where they happen; what
/// reaches this type is either a console failure or a broken game state.
#[derive(Debug, Clone, Display, From)]
pub enum GameError {
    /// Reading from or writing to the console failed.
    #[display("{}", _0)]
    Console(ConsoleError),

    /// A move could not be applied where the caller guaranteed it could.
    #[display("{}", _0)]
    Move(MoveError),

    /// A move was requested from the computer on a full board.
    #[display("No free cell left to play")]
    #[from(ignore)]
    NoFreeCell,
}

impl GameError {
    /// True when the human closed the input stream.
    pub fn is_console_closed(&self) -> bool {
        matches!(self, GameError::Console(err) if err.is_closed())
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Console(err) => Some(err),
            GameError::Move(err) => Some(err),
            GameError::NoFreeCell => None,
        }
    }
}
