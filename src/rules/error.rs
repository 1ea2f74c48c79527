//! Reasons a command is rejected.
//!
//! Every rejection leaves the game untouched. The reason is only used for
//! logging and tests; the front end treats all of them as "nothing happened".

use thiserror::Error;

/// Why a command was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Error)]
pub enum MoveError {
    #[error("no card to move")]
    EmptySource,
    #[error("cannot move cards onto their own column")]
    SameColumn,
    #[error("aces can only go to a foundation")]
    AceToTableau,
    #[error("a king can only start an empty column")]
    KingNeedsEmptyColumn,
    #[error("only a king can start an empty column")]
    NeedsParentCard,
    #[error("card must be placed on the opposite color")]
    SameColor,
    #[error("card must be exactly one rank below its parent")]
    RankMismatch,
    #[error("only the bottom card of a column can go to a foundation")]
    NotBottomCard,
    #[error("card does not continue its foundation")]
    FoundationMismatch,
    #[error("selected card is face-down")]
    FaceDownSource,
    #[error("tableau pile {0} does not exist")]
    InvalidPile(u8),
    #[error("no face-up card in that direction")]
    NavigationBlocked,
    #[error("game is already won")]
    GameWon,
}
