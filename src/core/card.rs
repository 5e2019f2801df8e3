//! Playing cards: rank, suit, color.
//!
//! Cards are small `Copy` values. Placement rules on the piles only ever ask
//! four questions about a pair of cards, exposed as the `has_*` predicates.

use serde::{Deserialize, Serialize};

/// Card rank, ordered Ace (low) to King (high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    Ace,
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
    /// All ranks in ascending order.
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

    /// Face value: Ace = 1, King = 13.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8 + 1
    }

    /// Short label used by `Display`.
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

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card color. Only used to check alternating colors on the tableau.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

/// Card suit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    Heart,
    Spade,
    Diamond,
    Club,
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Heart, Suit::Spade, Suit::Diamond, Suit::Club];

    /// Hearts and diamonds are red, spades and clubs black.
    #[must_use]
    pub const fn color(self) -> Color {
        match self {
            Suit::Heart | Suit::Diamond => Color::Red,
            Suit::Spade | Suit::Club => Color::Black,
        }
    }

    /// Unicode suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Suit::Heart => '♥',
            Suit::Spade => '♠',
            Suit::Diamond => '♦',
            Suit::Club => '♣',
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A playing card.
///
/// ```
/// use rust_solitaire::core::{Card, Rank, Suit};
///
/// let seven = Card::new(Rank::Seven, Suit::Heart);
/// let six = Card::new(Rank::Six, Suit::Club);
///
/// assert!(seven.has_value_one_greater_than(&six));
/// assert!(seven.has_different_color_than(&six));
/// assert_eq!(seven.to_string(), "7♥");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    #[must_use]
    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    /// True if this card's rank is exactly one above `other`'s.
    #[must_use]
    pub fn has_value_one_greater_than(&self, other: &Card) -> bool {
        self.rank.value() == other.rank.value() + 1
    }

    #[must_use]
    pub fn has_same_suit_as(&self, other: &Card) -> bool {
        self.suit == other.suit
    }

    #[must_use]
    pub fn has_different_color_than(&self, other: &Card) -> bool {
        self.color() != other.color()
    }

    #[must_use]
    pub fn has_red_color(&self) -> bool {
        self.color() == Color::Red
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}
