//! The 3x3 grid.

use crate::rules;
use crate::selector::{Move, MoveError};
use crate::types::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// 3x3 tic-tac-toe board.
///
/// A marked cell stays marked until [`Board::reset`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at `(row, column)`.
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row).and_then(|r| r.get(column)).copied()
    }

    /// Gets the cell a move targets, `None` for invalid moves.
    pub fn cell_at(&self, mv: Move) -> Option<Cell> {
        mv.is_valid().then(|| self.cells[mv.row()][mv.column()])
    }

    /// Returns all cells, row by row.
    pub fn cells(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// True iff the move is valid and its cell is empty.
    pub fn is_cell_free(&self, mv: Move) -> bool {
        self.cell_at(mv) == Some(Cell::Empty)
    }

    /// Places `marker` on the move's cell.
    ///
    /// Leaves the board untouched when the cell is taken or the move is
    /// outside 1-9.
    #[instrument(skip(self))]
    pub fn submit_move(&mut self, marker: Marker, mv: Move) -> Result<(), MoveError> {
        if !mv.is_valid() {
            return Err(MoveError::OutOfRange(mv.selector()));
        }
        let cell = &mut self.cells[mv.row()][mv.column()];
        if *cell != Cell::Empty {
            debug!(?cell, "Rejected move onto occupied cell");
            return Err(MoveError::CellOccupied(mv));
        }
        *cell = Cell::Marked(marker);
        Ok(())
    }

    /// Checks whether `marker` completed a line with `last_move`.
    pub fn has_three_in_a_row(&self, marker: Marker, last_move: Move) -> bool {
        rules::has_three_in_a_row(self, marker, last_move)
    }

    /// True iff no cell is empty.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// Clears every cell for a new round.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [[Cell::Empty; 3]; 3];
    }

    /// Moves whose cells are still empty, in selector order.
    pub fn free_moves(&self) -> Vec<Move> {
        Move::all().filter(|mv| self.is_cell_free(*mv)).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

fn render_rows(
    f: &mut std::fmt::Formatter<'_>,
    symbol: impl Fn(usize, usize) -> char,
) -> std::fmt::Result {
    for row in 0..3 {
        writeln!(f, " {} | {} | {} ", symbol(row, 0), symbol(row, 1), symbol(row, 2))?;
        if row < 2 {
            writeln!(f, "---+---+---")?;
        }
    }
    Ok(())
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_rows(f, |row, column| self.cells[row][column].symbol())
    }
}

/// Legend printed next to the board showing which number picks which cell.
pub struct PositionsLegend;

impl std::fmt::Display for PositionsLegend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        render_rows(f, |row, column| {
            char::from_digit((row * 3 + column + 1) as u32, 10).unwrap_or('?')
        })
    }
}

/// Renders the 1-9 layout.
pub fn positions_legend() -> String {
    PositionsLegend.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_marks_empty_cell() {
        let mut board = Board::new();
        board.submit_move(Marker::X, Move::new(5)).unwrap();
        assert_eq!(board.cell(1, 1), Some(Cell::Marked(Marker::X)));
        assert!(!board.is_cell_free(Move::new(5)));
        assert_eq!(board.free_moves().len(), 8);
    }

    #[test]
    fn test_occupied_cell_rejected_and_board_unchanged() {
        let mut board = Board::new();
        board.submit_move(Marker::X, Move::new(5)).unwrap();
        board.submit_move(Marker::O, Move::new(1)).unwrap();
        let before = board.clone();

        let result = board.submit_move(Marker::X, Move::new(1));

        assert_eq!(result, Err(MoveError::CellOccupied(Move::new(1))));
        assert_eq!(board, before);
        assert_eq!(board.cell(0, 0), Some(Cell::Marked(Marker::O)));
    }

    #[test]
    fn test_invalid_move_never_applied() {
        let mut board = Board::new();
        assert!(!board.is_cell_free(Move::new(0)));
        assert_eq!(board.submit_move(Marker::X, Move::new(10)), Err(MoveError::OutOfRange(10)));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut board = Board::new();
        for mv in Move::all() {
            board.submit_move(Marker::O, mv).unwrap();
        }
        assert!(board.is_full());

        board.reset();

        assert!(!board.is_full());
        assert!(board.cells().iter().flatten().all(|c| *c == Cell::Empty));
        assert_eq!(board.free_moves().len(), 9);
    }

    #[test]
    fn test_cell_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.cell(3, 0), None);
        assert_eq!(board.cell(0, 3), None);
    }

    #[test]
    fn test_display_shows_markers() {
        let mut board = Board::new();
        board.submit_move(Marker::X, Move::new(1)).unwrap();
        board.submit_move(Marker::O, Move::new(9)).unwrap();
        let expected = " X |   |   \n---+---+---\n   |   |   \n---+---+---\n   |   | O \n";
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_positions_legend() {
        let expected = " 1 | 2 | 3 \n---+---+---\n 4 | 5 | 6 \n---+---+---\n 7 | 8 | 9 \n";
        assert_eq!(positions_legend(), expected);
    }
}
