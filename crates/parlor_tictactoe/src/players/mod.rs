//! Players that produce the next move for a side.

mod human;
mod random_agent;

pub use human::{HumanPlayer, MOVE_PROMPT, REPROMPT_MESSAGE};
pub use random_agent::RandomAgent;

use crate::board::Board;
use crate::console::Console;
use crate::error::GameError;
use crate::selector::Move;
use crate::types::{Marker, Side};
use rand::rngs::StdRng;

/// One side of the match, with its marker fixed at construction.
#[derive(Debug, Clone)]
pub enum Player {
    /// Moves typed at the console.
    Human(HumanPlayer),
    /// Uniformly random free cells.
    RandomAgent(RandomAgent),
}

impl Player {
    /// A human playing `marker`.
    pub fn human(marker: Marker) -> Self {
        Player::Human(HumanPlayer::new(marker))
    }

    /// A random-move computer playing `marker`, drawing from `rng`.
    pub fn random_agent(marker: Marker, rng: StdRng) -> Self {
        Player::RandomAgent(RandomAgent::new(marker, rng))
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        match self {
            Player::Human(p) => p.marker(),
            Player::RandomAgent(p) => p.marker(),
        }
    }

    /// Which side of the match this player is.
    pub fn side(&self) -> Side {
        match self {
            Player::Human(_) => Side::Human,
            Player::RandomAgent(_) => Side::Computer,
        }
    }

    /// Gets the next move.
    ///
    /// The human variant blocks on `console` until a 1-9 selector is typed;
    /// the cell may still be taken. The random agent only ever returns a
    /// free cell and never touches the console.
    pub fn get_move<C: Console + ?Sized>(
        &mut self,
        board: &Board,
        console: &mut C,
    ) -> Result<Move, GameError> {
        match self {
            Player::Human(p) => p.get_move(console),
            Player::RandomAgent(p) => p.get_move(board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_variant_fixes_side_and_marker() {
        let human = Player::human(Marker::O);
        let computer = Player::random_agent(Marker::X, StdRng::seed_from_u64(0));

        assert_eq!(human.side(), Side::Human);
        assert_eq!(human.marker(), Marker::O);
        assert_eq!(computer.side(), Side::Computer);
        assert_eq!(computer.marker(), Marker::X);
    }
}
