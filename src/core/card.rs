//! Card identity and orientation.
//!
//! ## Card
//!
//! A `Card` is a fixed `(Suit, Rank)` pair plus a mutable `face_up` flag.
//! Two cards compare equal only if suit, rank and orientation match; use
//! [`Card::same_identity`] to ignore orientation.
//!
//! ## SuitMap
//!
//! Per-suit storage backed by a fixed array, indexed by `Suit`. Used for
//! the foundations so the suit-to-pile mapping is established once.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

/// Card color, derived from the suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// The four suits, in foundation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Spades,
    Diamonds,
    Clubs,
}

impl Suit {
    /// All suits in foundation order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Spades, Suit::Diamonds, Suit::Clubs];

    /// Index of this suit's foundation (0..4).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Suit::Hearts => 0,
            Suit::Spades => 1,
            Suit::Diamonds => 2,
            Suit::Clubs => 3,
        }
    }

    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Hearts | Suit::Diamonds => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    /// Unicode suit symbol used by the terminal front end.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
            Suit::Diamonds => '\u{2666}',
            Suit::Clubs => '\u{2663}',
        }
    }
}

/// Card rank, Ace low.
///
/// Discriminants are the numeric values 1..=13 so `rank as u8` compares
/// directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Rank {
    Ace = 1,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    /// All ranks, Ace to King.
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Numeric value (Ace = 1, King = 13).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// True if `self` is exactly one rank above `other`.
    #[must_use]
    pub const fn is_one_above(self, other: Rank) -> bool {
        self.value() == other.value() + 1
    }

    /// Short label as printed on the card face.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "J",
            Rank::Queen => "Q",
            Rank::King => "K",
        }
    }
}

/// A playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub rank: Rank,
    /// Orientation. Only face-up tableau cards may be selected or moved.
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    /// Create a face-up card.
    #[must_use]
    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    #[must_use]
    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    /// Same suit and rank, regardless of orientation.
    #[must_use]
    pub fn same_identity(&self, other: &Card) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }

    /// True if `self` may be placed directly below `parent` in a tableau
    /// column: opposite color, one rank lower.
    #[must_use]
    pub fn stacks_on(&self, parent: &Card) -> bool {
        self.color() != parent.color() && parent.rank.is_one_above(self.rank)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit.symbol(), self.rank.label())
    }
}

/// Per-suit data storage with O(1) access.
///
/// ```
/// use klondike::core::{Suit, SuitMap};
///
/// let mut counts: SuitMap<u8> = SuitMap::default();
/// counts[Suit::Clubs] += 1;
/// assert_eq!(counts[Suit::Clubs], 1);
/// assert_eq!(counts[Suit::Hearts], 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SuitMap<T> {
    data: [T; 4],
}

impl<T> SuitMap<T> {
    /// Create a SuitMap with values from a factory function.
    pub fn new(factory: impl Fn(Suit) -> T) -> Self {
        Self {
            data: Suit::ALL.map(factory),
        }
    }

    /// Iterate over (Suit, &T) pairs in foundation order.
    pub fn iter(&self) -> impl Iterator<Item = (Suit, &T)> {
        Suit::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in foundation order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<Suit> for SuitMap<T> {
    type Output = T;

    fn index(&self, suit: Suit) -> &Self::Output {
        &self.data[suit.index()]
    }
}

impl<T> IndexMut<Suit> for SuitMap<T> {
    fn index_mut(&mut self, suit: Suit) -> &mut Self::Output {
        &mut self.data[suit.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_suit_colors() {
        assert_eq!(Suit::Hearts.color(), Color::Red);
        assert_eq!(Suit::Diamonds.color(), Color::Red);
        assert_eq!(Suit::Spades.color(), Color::Black);
        assert_eq!(Suit::Clubs.color(), Color::Black);
    }

    #[test]
    fn test_suit_index_matches_all_order() {
        for (i, suit) in Suit::ALL.iter().enumerate() {
            assert_eq!(suit.index(), i);
        }
    }

    #[test]
    fn test_rank_values() {
        assert_eq!(Rank::Ace.value(), 1);
        assert_eq!(Rank::King.value(), 13);
        assert!(Rank::Two.is_one_above(Rank::Ace));
        assert!(!Rank::Three.is_one_above(Rank::Ace));
        assert!(!Rank::Ace.is_one_above(Rank::King));
    }

    #[test]
    fn test_stacks_on() {
        let red_seven = Card::face_up(Suit::Hearts, Rank::Seven);
        let black_eight = Card::face_up(Suit::Spades, Rank::Eight);
        let red_eight = Card::face_up(Suit::Diamonds, Rank::Eight);
        let black_nine = Card::face_up(Suit::Clubs, Rank::Nine);

        assert!(red_seven.stacks_on(&black_eight));
        assert!(!red_seven.stacks_on(&red_eight));
        assert!(!red_seven.stacks_on(&black_nine));
        assert!(!black_eight.stacks_on(&red_seven));
    }

    #[test]
    fn test_same_identity_ignores_orientation() {
        let up = Card::face_up(Suit::Clubs, Rank::Queen);
        let down = Card::new(Suit::Clubs, Rank::Queen);
        assert_ne!(up, down);
        assert!(up.same_identity(&down));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::face_up(Suit::Hearts, Rank::Ten).to_string(), "\u{2665}10");
        assert_eq!(Card::face_up(Suit::Spades, Rank::Ace).to_string(), "\u{2660}A");
    }
}
