//! Piles: foundation, tableau, stock.
//!
//! Each pile owns an ordered card sequence (index 0 = bottom, last = top) plus
//! its own cursor and enforces its own placement rule. Rejections are normal
//! outcomes reported through return values, never errors.
//!
//! ## Sharing
//!
//! The engine holds every pile through a [`SharedPile`] handle. Snapshots
//! taken from a handle keep a clone of it, so they can restore the pile long
//! after the operation that created them returned, and can tell whether two
//! snapshots came from the same pile.
//!
//! ## Key Types
//!
//! - [`Pile`]: capability shared by the three variants
//! - [`FoundationPile`]: builds one suit from Ace to King
//! - [`TableauPile`]: builds down in alternating colors, with face-down cards
//! - [`StockPile`]: draw pile with a cycling selection cursor
//! - [`CardSequence`]: cards in transit (a hand or a pulled run)

mod foundation;
mod shared;
mod stock;
mod tableau;

pub use foundation::FoundationPile;
pub use shared::{PileIdentity, SharedPile};
pub use stock::StockPile;
pub use tableau::TableauPile;

use im::Vector;
use smallvec::SmallVec;

use crate::core::Card;

/// Longest run that can legally move between piles (King down to Ace).
pub const MAX_RUN_LENGTH: usize = 13;

/// Cards in transit between piles.
pub type CardSequence = SmallVec<[Card; MAX_RUN_LENGTH]>;

/// Capability shared by all pile variants.
///
/// A pile's full state (cards and cursor) is its own value: capturing is a
/// clone, which is O(1) because cards live in a persistent `im::Vector`.
/// Restoring replaces the pile with the captured value.
pub trait Pile: Clone + std::fmt::Debug + 'static {
    /// Cards from bottom to top.
    fn cards(&self) -> &Vector<Card>;

    /// Number of cards.
    fn len(&self) -> usize {
        self.cards().len()
    }

    /// Check if the pile holds no cards.
    fn is_empty(&self) -> bool {
        self.cards().is_empty()
    }

    /// Top card, if any.
    fn top_card(&self) -> Option<Card> {
        self.cards().back().copied()
    }
}
