//! The 52-card deck and the generators that produce it.
//!
//! The engine never shuffles on its own; it asks a [`DeckGenerator`] for a
//! fresh deck on every new game. Production code uses
//! [`ShuffledDeckGenerator`], scripted deals use [`FixedDeckGenerator`].

use rustc_hash::FxHashSet;

use super::card::{Card, Rank, Suit};
use super::error::{Result, SolitaireError};
use super::rng::GameRng;

/// Number of cards in a deck.
pub const DECK_SIZE: usize = 52;

/// All 52 cards, each exactly once.
///
/// A deck is consumed once to seed the piles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// Unshuffled deck: suits in `Suit::ALL` order, Ace to King within a suit.
    #[must_use]
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&suit| Rank::ALL.iter().map(move |&rank| Card::new(rank, suit)))
            .collect();
        Self { cards }
    }

    /// Build a deck from an explicit card order.
    ///
    /// Fails unless `cards` holds each of the 52 cards exactly once.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self> {
        if cards.len() != DECK_SIZE {
            return Err(SolitaireError::InvalidDeckSize {
                expected: DECK_SIZE,
                actual: cards.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for &card in &cards {
            if !seen.insert(card) {
                return Err(SolitaireError::DuplicateCard(card));
            }
        }

        Ok(Self { cards })
    }

    /// Cards in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Consume the deck.
    #[must_use]
    pub fn into_cards(self) -> Vec<Card> {
        self.cards
    }
}

/// Source of decks for new games.
pub trait DeckGenerator {
    /// Produce a deck for the next game.
    fn generate(&mut self) -> Deck;
}

/// Uniformly shuffled decks.
///
/// Successive calls keep drawing from the same RNG stream, so two decks from
/// one generator differ even with a fixed seed.
#[derive(Clone, Debug)]
pub struct ShuffledDeckGenerator {
    rng: GameRng,
}

impl ShuffledDeckGenerator {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    /// Generator with a fixed seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    /// Seed of the underlying RNG.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }
}

impl Default for ShuffledDeckGenerator {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

impl DeckGenerator for ShuffledDeckGenerator {
    fn generate(&mut self) -> Deck {
        let mut deck = Deck::standard();
        self.rng.shuffle(&mut deck.cards);
        deck
    }
}

/// Always yields the same deck.
#[derive(Clone, Debug)]
pub struct FixedDeckGenerator {
    deck: Deck,
}

impl FixedDeckGenerator {
    #[must_use]
    pub fn new(deck: Deck) -> Self {
        Self { deck }
    }
}

impl DeckGenerator for FixedDeckGenerator {
    fn generate(&mut self) -> Deck {
        self.deck.clone()
    }
}
