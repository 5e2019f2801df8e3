//! Snapshot-based undo.
//!
//! Every mutating engine operation captures the piles it touches before
//! mutating them. Single-pile operations push that capture straight into the
//! [`HistoryTracker`]. Card moves span two calls (pull into the hand, then
//! drop onto a pile), so the [`MoveSnapshotCreator`] holds the source capture
//! until the drop and then pairs it with the destination capture into one
//! history entry.
//!
//! ## Example
//!
//! ```
//! use rust_solitaire::core::{Card, Rank, Suit};
//! use rust_solitaire::history::{HistoryTracker, MoveSnapshotCreator};
//! use rust_solitaire::piles::{FoundationPile, Pile, SharedPile};
//!
//! let from = SharedPile::new(FoundationPile::new());
//! let to = SharedPile::new(FoundationPile::new());
//! from.borrow_mut().try_add_card(&mut Some(Card::new(Rank::Ace, Suit::Club)));
//!
//! let mut history = HistoryTracker::new(10);
//! let mut moves = MoveSnapshotCreator::new();
//!
//! // Pull from one pile...
//! moves.save_source_pile_snapshot(from.create_snapshot().boxed()).unwrap();
//! let mut card = from.borrow_mut().try_pull_out_card();
//!
//! // ...and drop onto another.
//! let destination = to.create_snapshot().boxed();
//! assert!(to.borrow_mut().try_add_card(&mut card));
//! if let Some(entry) = moves.create_snapshot_if_cards_moved_to_other_pile(destination).unwrap() {
//!     history.save(entry);
//! }
//!
//! history.undo().unwrap();
//! assert_eq!(from.borrow().len(), 1);
//! assert!(to.borrow().is_empty());
//! ```

mod snapshot;
mod tracker;
mod transaction;

pub use snapshot::{MoveSnapshot, PileSnapshot, Snapshot};
pub use tracker::{HistoryTracker, DEFAULT_HISTORY_MAX_SIZE};
pub use transaction::MoveSnapshotCreator;
