//! # klondike
//!
//! A single-player Klondike Solitaire engine with a terminal front end.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: one `GameState` value owned by the caller. No
//!    globals, so independent games can run side by side.
//!
//! 2. **Commands In, State Out**: the front end sends [`Command`]s and
//!    re-reads the board and selection to render.
//!
//! 3. **All or Nothing**: every command is either applied in full or
//!    rejected with the state untouched.
//!
//! ## Modules
//!
//! - `core`: cards, selection cursor, commands, game state, RNG, configuration
//! - `zones`: deck and board piles (stock, waste, foundations, tableau)
//! - `rules`: move validation and application, win detection
//! - `tui`: ratatui rendering and key mapping for the `klondike` binary

pub mod core;
pub mod rules;
pub mod tui;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Command, GameRng, GameState, KlondikeConfig, Outcome, Rank, Selection, Source,
    Suit, SuitMap,
};

pub use crate::rules::{MoveEngine, MoveError};

pub use crate::zones::{Board, BoardError, Deck, DeckError, DECK_SIZE, TABLEAU_COLUMNS};
