//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Marker, Move};
use tracing::instrument;

/// The eight winning lines as selector triples.
pub const LINES: [[i64; 3]; 8] = [
    // Rows
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    // Columns
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    // Diagonals
    [1, 5, 9],
    [3, 5, 7],
];

fn owns(board: &Board, marker: Marker, row: usize, column: usize) -> bool {
    board.cell(row, column) == Some(Cell::Marked(marker))
}

/// Checks whether `marker` completed a line with `last_move`.
///
/// A new line can only pass through the cell just played, so only that
/// cell's row and column are inspected. Both diagonals are always checked.
/// An invalid `last_move` never wins.
#[instrument(skip(board))]
pub fn has_three_in_a_row(board: &Board, marker: Marker, last_move: Move) -> bool {
    if !last_move.is_valid() {
        return false;
    }
    let (row, column) = (last_move.row(), last_move.column());

    let row_done = (0..3).all(|c| owns(board, marker, row, c));
    let column_done = (0..3).all(|r| owns(board, marker, r, column));
    let main_diagonal = (0..3).all(|i| owns(board, marker, i, i));
    let anti_diagonal = (0..3).all(|i| owns(board, marker, i, 2 - i));

    row_done || column_done || main_diagonal || anti_diagonal
}

/// Scans all eight lines for one held entirely by a single marker.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Marker> {
    for [a, b, c] in LINES {
        let sq = board.cell_at(Move::new(a));
        if sq == board.cell_at(Move::new(b))
            && sq == board.cell_at(Move::new(c))
            && let Some(Cell::Marked(marker)) = sq
        {
            return Some(marker);
        }
    }

    None
}
