//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). The board's own methods
//! delegate here so the rules can be tested against hand-built grids.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, has_three_in_a_row};
