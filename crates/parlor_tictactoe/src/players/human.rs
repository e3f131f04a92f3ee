//! Human player that types selectors at the console.

use crate::console::Console;
use crate::error::GameError;
use crate::selector::{Move, parse_selector};
use crate::types::Marker;
use tracing::{debug, instrument, warn};

/// Prompt shown before each human move.
pub const MOVE_PROMPT: &str = "Please enter your move (1-9): ";

/// Shown after input that is not a number from 1 to 9.
pub const REPROMPT_MESSAGE: &str = "Please enter an integer between 1 and 9";

/// Human player using console input.
#[derive(Debug, Clone)]
pub struct HumanPlayer {
    marker: Marker,
}

impl HumanPlayer {
    /// Creates a new human player.
    pub fn new(marker: Marker) -> Self {
        Self { marker }
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Reads lines until one decodes to a valid selector.
    #[instrument(skip(self, console), fields(marker = %self.marker))]
    pub fn get_move<C: Console + ?Sized>(&mut self, console: &mut C) -> Result<Move, GameError> {
        loop {
            let line = console.read_line(MOVE_PROMPT)?;
            match parse_selector(&line) {
                Ok(mv) => {
                    debug!(%mv, "Human chose cell");
                    return Ok(mv);
                }
                Err(e) => {
                    warn!(error = %e, "Rejected human input");
                    console.say(REPROMPT_MESSAGE)?;
                }
            }
        }
    }
}
