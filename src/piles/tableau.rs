//! Tableau piles.

use im::Vector;

use super::{CardSequence, Pile};
use crate::core::{Card, Rank};

/// A pile of face-down cards topped by a face-up run that builds down in
/// alternating colors.
///
/// Cards at or after `first_face_down_index` are face-up and addressable;
/// cards before it are face-down. When every card is face-down the index
/// equals the pile length and the top card is "covered".
///
/// Invariant: `first_face_down_index <= cards.len()`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableauPile {
    cards: Vector<Card>,
    first_face_down_index: usize,
}

impl TableauPile {
    /// Create an empty tableau pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Deal `cards` onto the pile, replacing its contents.
    ///
    /// Only the topmost card starts face-up.
    pub fn initialize(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards = cards.into_iter().collect();
        self.first_face_down_index = self.cards.len().saturating_sub(1);
    }

    /// Turn the top card face-up if it is face-down.
    ///
    /// Returns `true` if a card was uncovered.
    pub fn try_uncover_top_card(&mut self) -> bool {
        if !self.is_top_card_covered() {
            return false;
        }
        self.first_face_down_index -= 1;
        true
    }

    /// Check whether `sequence` may be placed on this pile.
    #[must_use]
    pub fn accepts(&self, sequence: &[Card]) -> bool {
        let Some(first) = sequence.first() else {
            return false;
        };
        if self.is_top_card_covered() {
            return false;
        }
        match self.cards.back() {
            None => first.rank() == Rank::King,
            Some(top) => top.has_value_one_greater_than(first) && top.has_different_color_than(first),
        }
    }

    /// Try to place a run of cards on top.
    ///
    /// On success the whole sequence is moved onto the pile, leaving
    /// `sequence` empty. On rejection `sequence` is left untouched.
    pub fn try_add_cards(&mut self, sequence: &mut CardSequence) -> bool {
        if !self.accepts(sequence) {
            return false;
        }
        self.cards.extend(sequence.drain(..));
        true
    }

    /// Remove the top `quantity` face-up cards, bottom-most first.
    ///
    /// Returns an empty sequence if `quantity` is zero or larger than the
    /// face-up run.
    pub fn try_pull_out_cards(&mut self, quantity: usize) -> CardSequence {
        if quantity == 0 || quantity > self.face_up_count() {
            return CardSequence::new();
        }
        let run = self.cards.split_off(self.cards.len() - quantity);
        run.into_iter().collect()
    }

    /// Index of the first face-up card.
    #[must_use]
    pub fn top_covered_card_position(&self) -> usize {
        self.first_face_down_index
    }

    /// True if the pile is non-empty and its top card is face-down.
    #[must_use]
    pub fn is_top_card_covered(&self) -> bool {
        !self.cards.is_empty() && self.first_face_down_index == self.cards.len()
    }

    /// Number of face-up cards.
    #[must_use]
    pub fn face_up_count(&self) -> usize {
        self.cards.len() - self.first_face_down_index
    }

    /// The face-up run, bottom to top.
    #[must_use]
    pub fn face_up_cards(&self) -> Vector<Card> {
        self.cards.skip(self.first_face_down_index)
    }
}

impl Pile for TableauPile {
    fn cards(&self) -> &Vector<Card> {
        &self.cards
    }
}
