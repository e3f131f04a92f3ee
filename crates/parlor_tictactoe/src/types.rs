//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Marker identifying which side occupies a cell.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[strum(ascii_case_insensitive)]
pub enum Marker {
    /// Marker X.
    #[serde(alias = "x")]
    X,
    /// Marker O.
    #[serde(alias = "o")]
    O,
}

impl Marker {
    /// Returns the other marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// State of a single cell on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here since the last reset.
    Empty,
    /// Cell taken by a marker.
    Marked(Marker),
}

impl Cell {
    /// Symbol used when rendering the grid.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Marked(Marker::X) => 'X',
            Cell::Marked(Marker::O) => 'O',
        }
    }
}

/// The two sides of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Side {
    /// The person at the console.
    Human,
    /// The random-move opponent.
    Computer,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_opponent_is_involution() {
        for marker in Marker::iter() {
            assert_ne!(marker.opponent(), marker);
            assert_eq!(marker.opponent().opponent(), marker);
        }
    }

    #[test]
    fn test_marker_parses_case_insensitively() {
        assert_eq!(Marker::from_str("x").unwrap(), Marker::X);
        assert_eq!(Marker::from_str("O").unwrap(), Marker::O);
        assert!(Marker::from_str("z").is_err());
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::Empty.symbol(), ' ');
        assert_eq!(Cell::Marked(Marker::X).symbol(), 'X');
        assert_eq!(Cell::Marked(Marker::O).symbol(), 'O');
    }
}
