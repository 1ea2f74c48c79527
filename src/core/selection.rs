//! Selection cursor: which card a move will take.
//!
//! The cursor always points at a tableau cell `(column, row)`. When
//! `waste_selected` is set the waste top is the move source instead, and
//! the tableau cell is kept but ignored.

use serde::{Deserialize, Serialize};

use crate::rules::MoveError;
use crate::zones::{Board, TABLEAU_COLUMNS};

/// The current move source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Source {
    Waste,
    Tableau { column: usize, row: usize },
}

/// Selection state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    /// Focused tableau column (0..7).
    pub column: usize,
    /// Row within the focused column.
    pub row: usize,
    /// Waste top is the move source. Takes precedence over the tableau cell.
    pub waste_selected: bool,
}

impl Selection {
    /// Column 0, row 0, waste not selected.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Where the next move takes its cards from.
    #[must_use]
    pub fn source(&self) -> Source {
        if self.waste_selected {
            Source::Waste
        } else {
            Source::Tableau {
                column: self.column,
                row: self.row,
            }
        }
    }

    /// Snap the row to the first face-up card of the focused column, or to
    /// row 0 if the column has none.
    ///
    /// Called after every move that changes the tableau.
    pub fn normalize(&mut self, board: &Board) {
        self.row = board.first_face_up(self.column).unwrap_or(0);
    }

    pub fn move_left(&mut self, board: &Board) {
        self.column = (self.column + TABLEAU_COLUMNS - 1) % TABLEAU_COLUMNS;
        self.normalize(board);
    }

    pub fn move_right(&mut self, board: &Board) {
        self.column = (self.column + 1) % TABLEAU_COLUMNS;
        self.normalize(board);
    }

    /// Move one row toward the top of the column, onto face-up cards only.
    pub fn move_up(&mut self, board: &Board) -> Result<(), MoveError> {
        let target = self.row.checked_sub(1).ok_or(MoveError::NavigationBlocked)?;
        self.step_to(board, target)
    }

    /// Move one row toward the bottom of the column, onto face-up cards only.
    pub fn move_down(&mut self, board: &Board) -> Result<(), MoveError> {
        self.step_to(board, self.row + 1)
    }

    fn step_to(&mut self, board: &Board, row: usize) -> Result<(), MoveError> {
        match board.column(self.column).get(row) {
            Some(card) if card.face_up => {
                self.row = row;
                Ok(())
            }
            _ => Err(MoveError::NavigationBlocked),
        }
    }
}
