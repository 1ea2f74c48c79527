//! Board: stock, waste, foundations and tableau.
//!
//! All piles are `Vec<Card>` with the top (most recently placed) card at
//! the end. Tableau index 0 is the deepest card of a column.
//!
//! The board only stores cards. Legality lives in `crate::rules`; the
//! board exposes read accessors for rendering plus [`Board::validate`]
//! for checking the structural invariants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::deck::{Deck, DECK_SIZE};
use crate::core::card::{Card, Rank, Suit, SuitMap};

/// Number of tableau columns.
pub const TABLEAU_COLUMNS: usize = 7;

/// A broken board invariant.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("card {0} appears more than once")]
    DuplicateCard(Card),
    #[error("board holds {0} cards, expected {DECK_SIZE}")]
    CardCount(usize),
    #[error("{suit:?} foundation is out of sequence at position {position}")]
    FoundationOrder { suit: Suit, position: usize },
    #[error("column {column} has a face-down card below a face-up card at row {row}")]
    FaceDownBelowFaceUp { column: usize, row: usize },
    #[error("column {column} face-up run breaks at row {row}")]
    BrokenRun { column: usize, row: usize },
}

/// The four pile groups of a Klondike layout.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub(crate) stock: Vec<Card>,
    pub(crate) waste: Vec<Card>,
    pub(crate) foundations: SuitMap<Vec<Card>>,
    pub(crate) tableau: [Vec<Card>; TABLEAU_COLUMNS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal a deck onto a fresh board.
    ///
    /// Runs one round-robin pass per deck card over the columns, appending
    /// to a column only while it holds fewer than its 1-indexed target
    /// (column `i` ends with `i + 1` cards). That fills 28 cards; the rest
    /// of the deck stays behind, in order, as the stock. The last card of
    /// each column and every stock card are turned face-up.
    #[must_use]
    pub fn deal(deck: Deck) -> Self {
        let mut board = Self::new();
        let mut cards = deck.into_cards().into_iter();

        let mut column = 0;
        for _ in 0..DECK_SIZE {
            if board.tableau[column].len() < column + 1 {
                if let Some(card) = cards.next() {
                    board.tableau[column].push(card);
                }
            }
            column = (column + 1) % TABLEAU_COLUMNS;
        }

        for pile in &mut board.tableau {
            if let Some(bottom) = pile.last_mut() {
                bottom.face_up = true;
            }
        }

        // Stock orientation only affects rendering.
        board.stock = cards
            .map(|mut card| {
                card.face_up = true;
                card
            })
            .collect();

        board
    }

    /// Assemble a board from explicit piles, e.g. to set up a position.
    ///
    /// No invariant is checked here; call [`Board::validate`] as needed.
    #[must_use]
    pub fn from_parts(
        stock: Vec<Card>,
        waste: Vec<Card>,
        foundations: SuitMap<Vec<Card>>,
        tableau: [Vec<Card>; TABLEAU_COLUMNS],
    ) -> Self {
        Self {
            stock,
            waste,
            foundations,
            tableau,
        }
    }

    // === Read surface ===

    #[must_use]
    pub fn stock(&self) -> &[Card] {
        &self.stock
    }

    #[must_use]
    pub fn stock_len(&self) -> usize {
        self.stock.len()
    }

    /// Whether the stock shows a card back (non-empty) or an empty frame.
    #[must_use]
    pub fn stock_top_visible(&self) -> bool {
        !self.stock.is_empty()
    }

    #[must_use]
    pub fn waste(&self) -> &[Card] {
        &self.waste
    }

    /// The only playable waste card.
    #[must_use]
    pub fn waste_top(&self) -> Option<&Card> {
        self.waste.last()
    }

    #[must_use]
    pub fn foundation(&self, suit: Suit) -> &[Card] {
        &self.foundations[suit]
    }

    #[must_use]
    pub fn foundation_top(&self, suit: Suit) -> Option<&Card> {
        self.foundations[suit].last()
    }

    #[must_use]
    pub fn foundations(&self) -> &SuitMap<Vec<Card>> {
        &self.foundations
    }

    /// Total cards across all four foundations.
    #[must_use]
    pub fn foundation_count(&self) -> usize {
        self.foundations.values().map(Vec::len).sum()
    }

    /// A tableau column (0-indexed), deepest card first.
    ///
    /// Panics if `index >= TABLEAU_COLUMNS`.
    #[must_use]
    pub fn column(&self, index: usize) -> &[Card] {
        &self.tableau[index]
    }

    #[must_use]
    pub fn columns(&self) -> &[Vec<Card>; TABLEAU_COLUMNS] {
        &self.tableau
    }

    /// Index of the first face-up card in a column, if any.
    #[must_use]
    pub fn first_face_up(&self, column: usize) -> Option<usize> {
        self.tableau[column].iter().position(|card| card.face_up)
    }

    /// Every card on the board, in no particular order.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .iter()
            .chain(self.waste.iter())
            .chain(self.foundations.values().flatten())
            .chain(self.tableau.iter().flatten())
    }

    #[must_use]
    pub fn card_count(&self) -> usize {
        self.all_cards().count()
    }

    // === Mutation helpers ===

    /// Turn the bottom card of a column face-up if it is face-down.
    ///
    /// Returns `true` if a card was revealed.
    pub(crate) fn reveal_bottom(&mut self, column: usize) -> bool {
        match self.tableau[column].last_mut() {
            Some(card) if !card.face_up => {
                card.face_up = true;
                true
            }
            _ => false,
        }
    }

    // === Invariants ===

    /// Check the structural invariants that hold after every move:
    /// - no suit/rank pair appears twice
    /// - each foundation is its own suit, ascending by one from Ace
    /// - each column is face-down cards followed by face-up cards, and the
    ///   face-up run alternates color while descending by one
    ///
    /// Card count is checked separately by [`Board::validate_complete`].
    pub fn validate(&self) -> Result<(), BoardError> {
        let mut seen = [false; DECK_SIZE];
        for card in self.all_cards() {
            let slot = card.suit.index() * Rank::ALL.len() + usize::from(card.rank.value() - 1);
            if seen[slot] {
                return Err(BoardError::DuplicateCard(*card));
            }
            seen[slot] = true;
        }

        for (suit, pile) in self.foundations.iter() {
            for (position, card) in pile.iter().enumerate() {
                if card.suit != suit || usize::from(card.rank.value()) != position + 1 {
                    return Err(BoardError::FoundationOrder { suit, position });
                }
            }
        }

        for (column, pile) in self.tableau.iter().enumerate() {
            let Some(start) = pile.iter().position(|card| card.face_up) else {
                continue;
            };
            for (offset, pair) in pile[start..].windows(2).enumerate() {
                let row = start + offset + 1;
                if !pair[1].face_up {
                    return Err(BoardError::FaceDownBelowFaceUp { column, row });
                }
                if !pair[1].stacks_on(&pair[0]) {
                    return Err(BoardError::BrokenRun { column, row });
                }
            }
        }

        Ok(())
    }

    /// [`Board::validate`] plus the full 52-card conservation check.
    pub fn validate_complete(&self) -> Result<(), BoardError> {
        self.validate()?;
        match self.card_count() {
            DECK_SIZE => Ok(()),
            n => Err(BoardError::CardCount(n)),
        }
    }
}
