//! Foundation piles.

use im::Vector;

use super::Pile;
use crate::core::{Card, Rank};

/// A pile building one suit upward from Ace to King.
///
/// Only the top card is addressable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoundationPile {
    cards: Vector<Card>,
}

impl FoundationPile {
    /// Create an empty foundation pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear the pile for a new game.
    pub fn initialize(&mut self) {
        self.cards.clear();
    }

    /// Check whether `card` may be placed on this pile.
    ///
    /// An empty pile takes only an Ace; otherwise the card must be the next
    /// rank of the top card's suit.
    #[must_use]
    pub fn accepts(&self, card: &Card) -> bool {
        match self.cards.back() {
            None => card.rank() == Rank::Ace,
            Some(top) => card.has_value_one_greater_than(top) && card.has_same_suit_as(top),
        }
    }

    /// Try to place the candidate on top.
    ///
    /// On success the candidate is taken (left `None`) and `true` is
    /// returned. On rejection the candidate is left untouched.
    pub fn try_add_card(&mut self, candidate: &mut Option<Card>) -> bool {
        match candidate {
            Some(card) if self.accepts(card) => {
                self.cards.push_back(*card);
                *candidate = None;
                true
            }
            _ => false,
        }
    }

    /// Remove and return the top card.
    pub fn try_pull_out_card(&mut self) -> Option<Card> {
        self.cards.pop_back()
    }

    /// Top card, if any.
    #[must_use]
    pub fn top_card_value(&self) -> Option<Card> {
        self.cards.back().copied()
    }

    /// True once the suit is built up to the King.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.top_card_value().map(|c| c.rank()) == Some(Rank::King)
    }
}

impl Pile for FoundationPile {
    fn cards(&self) -> &Vector<Card> {
        &self.cards
    }
}
