//! Player commands.
//!
//! Commands are the whole input surface of the engine. The presentation
//! layer maps keys to commands; the engine never sees key codes.

use serde::{Deserialize, Serialize};

use crate::zones::TABLEAU_COLUMNS;

/// A discrete player command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Deal a fresh game.
    NewGame,
    /// End the session.
    Quit,
    NavigateLeft,
    NavigateRight,
    NavigateUp,
    NavigateDown,
    /// Draw from the stock, or recycle the waste when the stock is empty.
    FlipStock,
    ToggleWasteSelection,
    /// Move the selected card to its suit's foundation.
    MoveToFoundation,
    /// Move the selection to tableau column `n` (1-indexed, 1..=7).
    MoveToPile(u8),
}

impl Command {
    /// Build a `MoveToPile` command from a 1-indexed column number.
    ///
    /// Returns `None` outside 1..=7.
    #[must_use]
    pub fn move_to_pile(n: u8) -> Option<Self> {
        (1..=TABLEAU_COLUMNS as u8)
            .contains(&n)
            .then_some(Command::MoveToPile(n))
    }

    /// Commands still accepted once the game is won.
    #[must_use]
    pub const fn allowed_after_win(self) -> bool {
        matches!(self, Command::NewGame | Command::Quit)
    }

    /// Commands that only touch the selection, never the board.
    #[must_use]
    pub const fn is_navigation(self) -> bool {
        matches!(
            self,
            Command::NavigateLeft
                | Command::NavigateRight
                | Command::NavigateUp
                | Command::NavigateDown
                | Command::ToggleWasteSelection
        )
    }
}
