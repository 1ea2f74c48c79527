//! Card piles: the deck consumed at deal time and the board it is dealt onto.
//!
//! ## Key Types
//!
//! - `Deck`: a 52-card permutation, shuffled or explicit
//! - `Board`: stock, waste, per-suit foundations and seven tableau columns

pub mod board;
pub mod deck;

pub use board::{Board, BoardError, TABLEAU_COLUMNS};
pub use deck::{Deck, DeckError, DECK_SIZE};
