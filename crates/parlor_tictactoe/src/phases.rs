//! Turn states and round outcomes.

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Where the game loop currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum TurnState {
    /// Waiting for the human to pick a cell.
    AwaitingHumanMove,
    /// The computer is about to pick a cell.
    AwaitingComputerMove,
    /// The round ended; the match may continue with a reset board.
    RoundOver(Outcome),
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A side completed a line.
    Win(Side),
    /// The board filled up with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Win(side) => Some(*side),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the round was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(Side::Human) => write!(f, "You win!"),
            Outcome::Win(Side::Computer) => write!(f, "The computer wins!"),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Answer to the end-of-round prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Replay {
    /// `X`: reset the board and play another round.
    PlayAgain,
    /// `O`: end the match.
    Quit,
    /// Anything else; treated as playing again.
    Unrecognized,
}

impl Replay {
    /// Decodes the single-character answer, ignoring case and whitespace.
    pub fn parse(text: &str) -> Self {
        match text.trim() {
            "X" | "x" => Replay::PlayAgain,
            "O" | "o" => Replay::Quit,
            _ => Replay::Unrecognized,
        }
    }

    /// True unless the player asked to quit.
    pub fn continues(self) -> bool {
        self != Replay::Quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_winner() {
        assert_eq!(Outcome::Win(Side::Human).winner(), Some(Side::Human));
        assert_eq!(Outcome::Tie.winner(), None);
        assert!(Outcome::Tie.is_tie());
        assert!(!Outcome::Win(Side::Computer).is_tie());
    }

    #[test]
    fn test_replay_parse() {
        assert_eq!(Replay::parse("X"), Replay::PlayAgain);
        assert_eq!(Replay::parse(" x\n"), Replay::PlayAgain);
        assert_eq!(Replay::parse("O"), Replay::Quit);
        assert_eq!(Replay::parse("o"), Replay::Quit);
        assert_eq!(Replay::parse("yes"), Replay::Unrecognized);
        assert_eq!(Replay::parse(""), Replay::Unrecognized);
    }

    #[test]
    fn test_unrecognized_answer_continues() {
        assert!(Replay::PlayAgain.continues());
        assert!(Replay::Unrecognized.continues());
        assert!(!Replay::Quit.continues());
    }
}
