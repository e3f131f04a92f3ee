//! Parlor tic-tac-toe - a console match against a random-move computer
//!
//! # Architecture
//!
//! - **Move**: a 1-9 selector decoded into a row and column
//! - **Board**: the 3x3 grid, move application and win/tie detection
//! - **Player**: a human at the [`Console`] or a seeded [`RandomAgent`]
//! - **GameLoop**: turn alternation, round outcomes and replays
//!
//! # Example
//!
//! ```no_run
//! use parlor_tictactoe::{GameLoop, Marker, TerminalConsole};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! # fn example() -> Result<(), parlor_tictactoe::GameError> {
//! let stdin = std::io::stdin();
//! let console = TerminalConsole::new(stdin.lock(), std::io::stdout());
//! let mut game = GameLoop::new(Marker::X, StdRng::seed_from_u64(7), console);
//! let rounds = game.run()?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod console;
mod error;
mod orchestrator;
mod phases;
mod players;
pub mod rules;
mod selector;
mod types;

pub use board::{Board, PositionsLegend, positions_legend};
pub use console::{Console, ConsoleError, ConsoleErrorKind, TerminalConsole};
pub use error::GameError;
pub use orchestrator::{GameLoop, OCCUPIED_MESSAGE, REPLAY_PROMPT, UNRECOGNIZED_REPLAY_MESSAGE};
pub use phases::{Outcome, Replay, TurnState};
pub use players::{HumanPlayer, MOVE_PROMPT, Player, REPROMPT_MESSAGE, RandomAgent};
pub use selector::{MAX_SELECTOR, MIN_SELECTOR, Move, MoveError, parse_selector};
pub use types::{Cell, Marker, Side};
