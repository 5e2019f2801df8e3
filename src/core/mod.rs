//! Core value types: cards, decks, RNG, configuration, errors.
//!
//! Everything here is free of pile or engine state and can be used on its
//! own, e.g. to prepare a scripted deck.

pub mod card;
pub mod config;
pub mod deck;
pub mod error;
pub mod rng;

pub use card::{Card, Color, Rank, Suit};
pub use config::SolitaireConfig;
pub use deck::{Deck, DeckGenerator, FixedDeckGenerator, ShuffledDeckGenerator, DECK_SIZE};
pub use error::{Result, SolitaireError};
pub use rng::GameRng;
