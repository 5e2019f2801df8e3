//! The stock pile.

use im::Vector;

use super::Pile;
use crate::core::Card;

/// The draw pile.
///
/// A selection cursor cycles through the cards: none, 0, 1, ..., last,
/// none again. Only the selected card can be pulled out.
///
/// Invariant: `selected_index < cards.len()` whenever it is set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StockPile {
    cards: Vector<Card>,
    selected_index: Option<usize>,
}

impl StockPile {
    /// Create an empty stock pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pile's contents and clear the selection.
    pub fn initialize(&mut self, cards: impl IntoIterator<Item = Card>) {
        self.cards = cards.into_iter().collect();
        self.selected_index = None;
    }

    /// Advance the selection, wrapping back to none after the last card.
    pub fn try_select_next_card(&mut self) {
        self.selected_index = match self.selected_index {
            None if !self.cards.is_empty() => Some(0),
            Some(index) if index + 1 < self.cards.len() => Some(index + 1),
            _ => None,
        };
    }

    /// Remove and return the selected card.
    ///
    /// The selection moves back to the previous card, or clears if the first
    /// card was taken. Returns `None` when nothing is selected.
    pub fn try_pull_out_card(&mut self) -> Option<Card> {
        let index = self.selected_index?;
        let card = self.cards.remove(index);
        self.selected_index = index.checked_sub(1);
        Some(card)
    }

    #[must_use]
    pub fn selected_card_index(&self) -> Option<usize> {
        self.selected_index
    }

    #[must_use]
    pub fn selected_card(&self) -> Option<Card> {
        self.selected_index.map(|index| self.cards[index])
    }
}

impl Pile for StockPile {
    fn cards(&self) -> &Vector<Card> {
        &self.cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Rank, Suit};
    use proptest::prelude::*;

    fn three_cards() -> Vec<Card> {
        vec![
            Card::new(Rank::Ace, Suit::Heart),
            Card::new(Rank::Two, Suit::Spade),
            Card::new(Rank::Three, Suit::Diamond),
        ]
    }

    fn stock_of(cards: Vec<Card>) -> StockPile {
        let mut pile = StockPile::new();
        pile.initialize(cards);
        pile
    }

    #[test]
    fn test_selection_cycles() {
        let mut pile = stock_of(three_cards());
        let mut seen = vec![pile.selected_card_index()];
        for _ in 0..5 {
            pile.try_select_next_card();
            seen.push(pile.selected_card_index());
        }

        assert_eq!(seen, vec![None, Some(0), Some(1), Some(2), None, Some(0)]);
    }

    #[test]
    fn test_select_on_empty_stays_none() {
        let mut pile = StockPile::new();
        pile.try_select_next_card();
        assert_eq!(pile.selected_card_index(), None);
    }

    #[test]
    fn test_pull_without_selection() {
        let mut pile = stock_of(three_cards());
        assert_eq!(pile.try_pull_out_card(), None);
        assert_eq!(pile.len(), 3);
    }

    #[test]
    fn test_pull_moves_selection_back() {
        let mut pile = stock_of(three_cards());
        pile.try_select_next_card();
        pile.try_select_next_card();
        pile.try_select_next_card();
        assert_eq!(pile.selected_card(), Some(Card::new(Rank::Three, Suit::Diamond)));

        assert_eq!(pile.try_pull_out_card(), Some(Card::new(Rank::Three, Suit::Diamond)));
        assert_eq!(pile.selected_card_index(), Some(1));
        assert_eq!(pile.try_pull_out_card(), Some(Card::new(Rank::Two, Suit::Spade)));
        assert_eq!(pile.selected_card_index(), Some(0));
        assert_eq!(pile.try_pull_out_card(), Some(Card::new(Rank::Ace, Suit::Heart)));
        assert_eq!(pile.selected_card_index(), None);
        assert!(pile.is_empty());
    }

    #[test]
    fn test_pull_first_clears_selection() {
        let mut pile = stock_of(three_cards());
        pile.try_select_next_card();

        assert_eq!(pile.try_pull_out_card(), Some(Card::new(Rank::Ace, Suit::Heart)));
        assert_eq!(pile.selected_card_index(), None);
        assert_eq!(pile.len(), 2);
    }

    #[test]
    fn test_initialize_resets_selection() {
        let mut pile = stock_of(three_cards());
        pile.try_select_next_card();
        pile.initialize(three_cards());
        assert_eq!(pile.selected_card_index(), None);
    }

    proptest! {
        #[test]
        fn prop_selection_stays_in_bounds(steps in proptest::collection::vec(any::<bool>(), 0..60)) {
            let mut pile = stock_of(crate::core::Deck::standard().into_cards());
            for pull in steps {
                if pull {
                    pile.try_pull_out_card();
                } else {
                    pile.try_select_next_card();
                }
                if let Some(index) = pile.selected_card_index() {
                    prop_assert!(index < pile.len());
                }
            }
        }
    }
}
