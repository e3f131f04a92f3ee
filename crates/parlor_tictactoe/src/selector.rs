//! Cell selectors typed at the console.
//!
//! Players pick a cell with a number laid out like a phone keypad:
//!
//! ```text
//! 1 2 3
//! 4 5 6
//! 7 8 9
//! ```

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Lowest accepted selector.
pub const MIN_SELECTOR: i64 = 1;
/// Highest accepted selector.
pub const MAX_SELECTOR: i64 = 9;

/// A single turn's target cell, stored as the raw selector.
///
/// Construction never fails. Anything outside 1-9 is carried around
/// as-is and reported by [`Move::is_valid`], so the board can refuse it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    selector: i64,
}

impl Move {
    /// Creates a move from a raw selector.
    pub const fn new(selector: i64) -> Self {
        Self { selector }
    }

    /// The raw selector.
    pub fn selector(&self) -> i64 {
        self.selector
    }

    /// True iff the selector is within 1-9.
    pub fn is_valid(&self) -> bool {
        (MIN_SELECTOR..=MAX_SELECTOR).contains(&self.selector)
    }

    /// Row (0-2) targeted by this move. Only meaningful for valid moves.
    pub fn row(&self) -> usize {
        debug_assert!(self.is_valid(), "row() on invalid selector {}", self.selector);
        ((self.selector - 1) / 3) as usize
    }

    /// Column (0-2) targeted by this move. Only meaningful for valid moves.
    pub fn column(&self) -> usize {
        debug_assert!(self.is_valid(), "column() on invalid selector {}", self.selector);
        ((self.selector - 1) % 3) as usize
    }

    /// All nine valid moves in selector order.
    pub fn all() -> impl DoubleEndedIterator<Item = Move> {
        (MIN_SELECTOR..=MAX_SELECTOR).map(Move::new)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.selector)
    }
}

/// Error that can occur when decoding or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// Input did not parse as an integer.
    #[display("{:?} is not a number", _0)]
    InvalidMoveSyntax(String),

    /// Selector parsed but lies outside 1-9.
    #[display("{} is not between 1 and 9", _0)]
    OutOfRange(i64),

    /// The target cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Move),
}

impl std::error::Error for MoveError {}

/// Decodes one line of console input into a valid move.
///
/// Surrounding whitespace is ignored.
#[instrument]
pub fn parse_selector(text: &str) -> Result<Move, MoveError> {
    let selector: i64 = text
        .trim()
        .parse()
        .map_err(|_| MoveError::InvalidMoveSyntax(text.trim().to_string()))?;

    let mv = Move::new(selector);
    if mv.is_valid() {
        Ok(mv)
    } else {
        Err(MoveError::OutOfRange(selector))
    }
}
