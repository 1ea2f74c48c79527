//! Core engine types: cards, selection, commands, game state, RNG, configuration.
//!
//! Everything the presentation layer touches lives here. Piles are in
//! `crate::zones`, legality in `crate::rules`.

pub mod card;
pub mod command;
pub mod config;
pub mod rng;
pub mod selection;
pub mod state;

pub use card::{Card, Color, Rank, Suit, SuitMap};
pub use command::Command;
pub use config::KlondikeConfig;
pub use rng::GameRng;
pub use selection::{Selection, Source};
pub use state::{GameState, Outcome, VICTORY_MESSAGE};
