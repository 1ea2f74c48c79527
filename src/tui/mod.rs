//! Terminal front end: key mapping and rendering.
//!
//! Thin layer over the engine. It turns key presses into [`Command`]s and
//! draws whatever [`GameState`] reports; it holds no game logic.
//!
//! [`Command`]: crate::core::Command
//! [`GameState`]: crate::core::GameState

pub mod input;
pub mod render;

pub use input::{command_for_key, next_command};
pub use render::draw;
