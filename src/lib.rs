//! # rust-solitaire
//!
//! Rule engine and transactional undo for Klondike solitaire.
//!
//! ## Design Principles
//!
//! 1. **Rejections Are Not Errors**: Every `try_*` operation reports a rule
//!    rejection as `Ok(false)`. `Err` is reserved for contract violations
//!    (bad pile ids, broken move sequencing).
//!
//! 2. **Everything Undoes**: Each mutation captures the piles it touches
//!    before changing them. A card move (pull into the hand, drop onto a pile)
//!    is one undo step.
//!
//! 3. **No Presentation**: No coordinates, rendering, or input handling.
//!    Front ends read state through queries and act through `try_*` calls.
//!
//! ## Architecture
//!
//! - **Shared Piles**: Piles live behind `Rc<RefCell<_>>` handles shared by
//!   the engine and the snapshots taken from them. Snapshot pairing compares
//!   pile identity, not contents.
//!
//! - **Persistent Card Storage**: Pile cards are `im::Vector`s, so capturing a
//!   pile is O(1).
//!
//! ## Modules
//!
//! - `core`: Cards, decks, RNG, configuration, errors
//! - `piles`: Foundation, tableau and stock piles
//! - `history`: Snapshots, bounded undo history, move transactions
//! - `game`: The `Solitaire` engine

pub mod core;
pub mod game;
pub mod history;
pub mod piles;

// Re-export commonly used types
pub use crate::core::{
    Card, Color, Deck, DeckGenerator, FixedDeckGenerator, GameRng, Rank, Result,
    ShuffledDeckGenerator, SolitaireConfig, SolitaireError, Suit,
};

pub use crate::piles::{CardSequence, FoundationPile, Pile, SharedPile, StockPile, TableauPile};

pub use crate::history::{HistoryTracker, MoveSnapshot, MoveSnapshotCreator, PileSnapshot, Snapshot};

pub use crate::game::{GameStatus, Solitaire, FOUNDATION_PILE_COUNT, TABLEAU_PILE_COUNT};
