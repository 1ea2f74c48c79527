//! Klondike rules: legality checks and the moves that apply them.
//!
//! - `MoveEngine`: validate-then-mutate operations for every player action
//! - `MoveError`: why a command was rejected
//! - `check_tableau_placement` / `check_foundation_placement`: pure checks

mod engine;
mod error;

pub use engine::{check_foundation_placement, check_tableau_placement, MoveEngine};
pub use error::MoveError;
