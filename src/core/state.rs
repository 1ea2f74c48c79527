//! Game state: board, selection and win flag.
//!
//! `GameState` is the single value the presentation layer owns. It accepts
//! [`Command`]s through [`GameState::apply`] and exposes the board and
//! selection for rendering.
//!
//! ## Lifecycle
//!
//! - Created by dealing a deck (shuffled or injected).
//! - Every command is applied whole or rejected whole.
//! - Once won, only `NewGame` and `Quit` are accepted.
//! - `NewGame` re-deals from a fresh fork of the session RNG.

use super::command::Command;
use super::config::KlondikeConfig;
use super::rng::GameRng;
use super::selection::Selection;
use crate::rules::{MoveEngine, MoveError};
use crate::zones::{Board, Deck};

/// Message shown once all foundations are complete.
pub const VICTORY_MESSAGE: &str = "Hooray! You made it";

/// Result of applying a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command changed the game.
    Applied,
    /// The command was illegal; nothing changed.
    Rejected(MoveError),
    /// The player asked to end the session.
    Quit,
}

impl Outcome {
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Outcome::Applied)
    }
}

/// Complete state of one game session.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    selection: Selection,
    won: bool,
    draw_count: usize,
    rng: GameRng,
}

impl GameState {
    /// Start a session and deal its first shuffled game.
    #[must_use]
    pub fn new(config: &KlondikeConfig) -> Self {
        let mut state = Self::from_board(Board::new(), config);
        state.new_game();
        state
    }

    /// Deal a specific deck. Later `NewGame` commands shuffle from the
    /// config's seed, or from OS entropy without one.
    #[must_use]
    pub fn with_deck(deck: Deck, config: &KlondikeConfig) -> Self {
        Self::from_board(Board::deal(deck), config)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, config: &KlondikeConfig) -> Self {
        let mut selection = Selection::new();
        selection.normalize(&board);
        Self {
            board,
            selection,
            won: false,
            draw_count: config.effective_draw_count(),
            rng: config.seed.map_or_else(GameRng::from_entropy, GameRng::new),
        }
    }

    // === Read surface ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Win flag as of the last evaluation.
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.won
    }

    #[must_use]
    pub fn victory_message(&self) -> Option<&'static str> {
        self.won.then_some(VICTORY_MESSAGE)
    }

    #[must_use]
    pub fn draw_count(&self) -> usize {
        self.draw_count
    }

    // === Commands ===

    /// Evaluate the win condition. Sticky until the next `NewGame`.
    ///
    /// Run once per frame before rendering; [`GameState::apply`] also runs
    /// it before dispatching.
    pub fn refresh_win(&mut self) -> bool {
        if !self.won && MoveEngine::is_won(&self.board) {
            self.won = true;
            tracing::info!("All foundations complete, game won");
        }
        self.won
    }

    /// Apply one command. Rejected commands leave the state unchanged.
    pub fn apply(&mut self, command: Command) -> Outcome {
        self.refresh_win();

        let result = match command {
            Command::Quit => return Outcome::Quit,
            Command::NewGame => {
                self.new_game();
                Ok(())
            }
            _ if self.won => Err(MoveError::GameWon),
            Command::NavigateLeft => {
                self.selection.move_left(&self.board);
                Ok(())
            }
            Command::NavigateRight => {
                self.selection.move_right(&self.board);
                Ok(())
            }
            Command::NavigateUp => self.selection.move_up(&self.board),
            Command::NavigateDown => self.selection.move_down(&self.board),
            Command::FlipStock => {
                MoveEngine::flip_stock(&mut self.board, &mut self.selection, self.draw_count)
            }
            Command::ToggleWasteSelection => {
                MoveEngine::toggle_waste(&self.board, &mut self.selection)
            }
            Command::MoveToFoundation => {
                MoveEngine::move_to_foundation(&mut self.board, &mut self.selection)
            }
            Command::MoveToPile(pile) => {
                MoveEngine::move_to_pile(&mut self.board, &mut self.selection, pile)
            }
        };

        match result {
            Ok(()) => {
                if command.is_navigation() {
                    tracing::trace!(?command, selection = ?self.selection, "Selection changed");
                } else {
                    tracing::trace!(?command, "Command applied");
                }
                Outcome::Applied
            }
            Err(err) => {
                tracing::debug!(?command, %err, "Command rejected");
                Outcome::Rejected(err)
            }
        }
    }

    fn new_game(&mut self) {
        let mut game_rng = self.rng.fork();
        tracing::info!(seed = game_rng.seed(), "Dealing new game");
        self.board = Board::deal(Deck::shuffled(&mut game_rng));
        self.selection = Selection::new();
        self.selection.normalize(&self.board);
        self.won = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::zones::{DECK_SIZE, TABLEAU_COLUMNS};

    fn seeded() -> KlondikeConfig {
        KlondikeConfig::default().with_seed(42)
    }

    #[test]
    fn test_new_game_is_dealt() {
        let state = GameState::new(&seeded());

        assert_eq!(state.board().card_count(), DECK_SIZE);
        assert_eq!(state.board().stock_len(), 24);
        assert_eq!(*state.selection(), Selection::new());
        assert!(!state.is_won());
        assert_eq!(state.board().validate_complete(), Ok(()));
    }

    #[test]
    fn test_seeded_sessions_are_reproducible() {
        let mut a = GameState::new(&seeded());
        let mut b = GameState::new(&seeded());
        assert_eq!(a.board(), b.board());

        a.apply(Command::NewGame);
        b.apply(Command::NewGame);
        assert_eq!(a.board(), b.board());
    }

    #[test]
    fn test_new_game_redeals() {
        let mut state = GameState::new(&seeded());
        let first = state.board().clone();

        assert_eq!(state.apply(Command::NewGame), Outcome::Applied);
        assert_ne!(state.board(), &first);
        assert_eq!(state.board().validate_complete(), Ok(()));
    }

    #[test]
    fn test_quit_changes_nothing() {
        let mut state = GameState::new(&seeded());
        let before = state.board().clone();

        assert_eq!(state.apply(Command::Quit), Outcome::Quit);
        assert_eq!(state.board(), &before);
    }

    #[test]
    fn test_flip_stock_selects_waste() {
        let mut state = GameState::with_deck(Deck::ordered(), &seeded());

        assert_eq!(state.apply(Command::FlipStock), Outcome::Applied);
        assert_eq!(state.board().waste().len(), 3);
        assert!(state.selection().waste_selected);
    }

    #[test]
    fn test_navigation_wraps() {
        let mut state = GameState::with_deck(Deck::ordered(), &seeded());

        state.apply(Command::NavigateLeft);
        assert_eq!(state.selection().column, TABLEAU_COLUMNS - 1);
        // Only the bottom card of a fresh column is face-up.
        assert_eq!(state.selection().row, TABLEAU_COLUMNS - 1);
        assert_eq!(
            state.apply(Command::NavigateUp),
            Outcome::Rejected(MoveError::NavigationBlocked)
        );
    }

    #[test]
    fn test_victory_message() {
        let state = GameState::new(&seeded());
        assert_eq!(state.victory_message(), None);
    }
}
