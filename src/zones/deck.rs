//! The 52-card deck used once per deal.

use thiserror::Error;

use crate::core::card::{Card, Rank, Suit};
use crate::core::rng::GameRng;

/// Number of cards in a standard deck.
pub const DECK_SIZE: usize = 52;

/// Rejected deck contents.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck must hold {DECK_SIZE} cards, got {0}")]
    WrongSize(usize),
    #[error("card {0} appears more than once")]
    Duplicate(Card),
}

/// An ordered permutation of the 52 distinct cards.
///
/// Index 0 is dealt first. A deck is consumed by [`crate::zones::Board::deal`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck: suits in foundation order, Ace to King within each.
    /// All cards face-down.
    #[must_use]
    pub fn ordered() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(suit, rank)))
            .collect();
        Self { cards }
    }

    /// Uniformly shuffled deck.
    #[must_use]
    pub fn shuffled(rng: &mut GameRng) -> Self {
        let mut deck = Self::ordered();
        rng.shuffle(&mut deck.cards);
        deck
    }

    /// Build a deck from an explicit order, e.g. a replayed deal.
    ///
    /// The cards must be exactly the 52 distinct suit/rank pairs. Orientation
    /// is reset to face-down.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DeckError> {
        if cards.len() != DECK_SIZE {
            return Err(DeckError::WrongSize(cards.len()));
        }

        let mut seen = [false; DECK_SIZE];
        for card in &cards {
            let slot = card.suit.index() * Rank::ALL.len() + usize::from(card.rank.value() - 1);
            if seen[slot] {
                return Err(DeckError::Duplicate(*card));
            }
            seen[slot] = true;
        }

        let cards = cards
            .into_iter()
            .map(|card| Card::new(card.suit, card.rank))
            .collect();
        Ok(Self { cards })
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordered_deck() {
        let deck = Deck::ordered();
        assert_eq!(deck.cards().len(), DECK_SIZE);
        assert_eq!(deck.cards()[0], Card::new(Suit::Hearts, Rank::Ace));
        assert_eq!(deck.cards()[51], Card::new(Suit::Clubs, Rank::King));
        assert!(deck.cards().iter().all(|c| !c.face_up));
    }

    #[test]
    fn test_shuffled_deck_is_permutation() {
        let mut rng = GameRng::new(42);
        let deck = Deck::shuffled(&mut rng);

        assert_ne!(deck, Deck::ordered());
        assert!(Deck::from_cards(deck.into_cards()).is_ok());
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let a = Deck::shuffled(&mut GameRng::new(5));
        let b = Deck::shuffled(&mut GameRng::new(5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_from_cards_rejects_wrong_size() {
        let mut cards = Deck::ordered().into_cards();
        cards.pop();
        assert_eq!(Deck::from_cards(cards), Err(DeckError::WrongSize(51)));
    }

    #[test]
    fn test_from_cards_rejects_duplicates() {
        let mut cards = Deck::ordered().into_cards();
        cards[1] = cards[0];
        assert_eq!(
            Deck::from_cards(cards),
            Err(DeckError::Duplicate(Card::new(Suit::Hearts, Rank::Ace)))
        );
    }
}
