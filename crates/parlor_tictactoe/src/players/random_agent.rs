//! Computer player that picks free cells uniformly at random.

use crate::board::Board;
use crate::error::GameError;
use crate::selector::{MAX_SELECTOR, MIN_SELECTOR, Move};
use crate::types::Marker;
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, instrument, trace};

/// Random-move opponent.
///
/// Owns its generator so a fixed seed replays the same choices.
#[derive(Debug, Clone)]
pub struct RandomAgent {
    marker: Marker,
    rng: StdRng,
}

impl RandomAgent {
    /// Creates an agent drawing from `rng`.
    pub fn new(marker: Marker, rng: StdRng) -> Self {
        Self { marker, rng }
    }

    /// The marker this player places.
    pub fn marker(&self) -> Marker {
        self.marker
    }

    /// Samples selectors in 1-9 until one lands on a free cell.
    #[instrument(skip(self, board), fields(marker = %self.marker))]
    pub fn get_move(&mut self, board: &Board) -> Result<Move, GameError> {
        if board.is_full() {
            return Err(GameError::NoFreeCell);
        }
        loop {
            let mv = Move::new(self.rng.gen_range(MIN_SELECTOR..=MAX_SELECTOR));
            if board.is_cell_free(mv) {
                debug!(%mv, "Computer chose cell");
                return Ok(mv);
            }
            trace!(%mv, "Sampled occupied cell");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn seeded(marker: Marker, seed: u64) -> RandomAgent {
        RandomAgent::new(marker, StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_never_picks_occupied_cell() {
        let mut agent = seeded(Marker::O, 7);
        // Every board reachable by filling cells in selector order, plus its mirror.
        for filled in 0..9 {
            for order in [Move::all().collect::<Vec<_>>(), Move::all().rev().collect()] {
                let mut board = Board::new();
                for mv in order.iter().take(filled) {
                    board.submit_move(Marker::X, *mv).unwrap();
                }
                for _ in 0..50 {
                    let mv = agent.get_move(&board).unwrap();
                    assert!(board.is_cell_free(mv), "picked {mv} with {filled} filled");
                }
            }
        }
    }

    #[test]
    fn test_finds_the_single_free_cell() {
        let mut board = Board::new();
        for mv in Move::all().filter(|mv| mv.selector() != 6) {
            board.submit_move(Marker::X, mv).unwrap();
        }
        let mut agent = seeded(Marker::O, 99);
        assert_eq!(agent.get_move(&board).unwrap(), Move::new(6));
    }

    #[test]
    fn test_full_board_is_an_error() {
        let mut board = Board::new();
        for mv in Move::all() {
            board.submit_move(Marker::X, mv).unwrap();
        }
        let mut agent = seeded(Marker::O, 1);
        assert!(matches!(agent.get_move(&board), Err(GameError::NoFreeCell)));
    }

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = seeded(Marker::O, 42);
        let mut b = seeded(Marker::O, 42);
        for _ in 0..20 {
            assert_eq!(a.get_move(&board).unwrap(), b.get_move(&board).unwrap());
        }
    }

    #[test]
    fn test_covers_every_cell_eventually() {
        let board = Board::new();
        let mut agent = seeded(Marker::O, 3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(agent.get_move(&board).unwrap());
        }
        assert_eq!(seen.len(), 9);
    }
}
