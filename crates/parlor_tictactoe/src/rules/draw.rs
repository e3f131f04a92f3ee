//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Cell};
use tracing::instrument;

/// Checks if the board is full (no empty cell left).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().flatten().all(|c| *c != Cell::Empty)
}

/// A full board on which no line is complete.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Marker, Move};

    fn fill(x: &[i64], o: &[i64]) -> Board {
        let mut board = Board::new();
        for &s in x {
            board.submit_move(Marker::X, Move::new(s)).unwrap();
        }
        for &s in o {
            board.submit_move(Marker::O, Move::new(s)).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = fill(&[5], &[1, 9]);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / X O O / O X X
        let board = fill(&[1, 3, 4, 8, 9], &[2, 5, 6, 7]);
        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        // X holds the 1-5-9 diagonal
        let board = fill(&[1, 5, 9, 6, 7], &[2, 3, 4, 8]);
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
