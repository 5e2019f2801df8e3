//! Restorable captures of pile state.

use crate::piles::{Pile, PileIdentity, SharedPile};

/// A restorable capture of state at a point in time.
///
/// `restore` is the only undo primitive. It must be idempotent: restoring
/// twice with no mutation in between leaves the same state as restoring once.
pub trait Snapshot: std::fmt::Debug {
    /// Write the captured state back.
    fn restore(&self);

    /// Identity of the single pile this snapshot was taken from.
    ///
    /// `None` for compound snapshots spanning several piles.
    fn pile_identity(&self) -> Option<PileIdentity>;

    /// Check whether both snapshots were taken from the same pile.
    ///
    /// Compares pile identity, not captured content: two snapshots of one
    /// pile taken at different times are "the same object".
    fn is_snapshot_of_same_object(&self, other: &dyn Snapshot) -> bool {
        match (self.pile_identity(), other.pile_identity()) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

/// Snapshot of one pile: its cards and cursor.
#[derive(Debug)]
pub struct PileSnapshot<P> {
    pile: SharedPile<P>,
    captured: P,
}

impl<P: Pile> PileSnapshot<P> {
    /// Capture the current state of `pile`.
    #[must_use]
    pub fn new(pile: SharedPile<P>) -> Self {
        let captured = pile.borrow().clone();
        Self { pile, captured }
    }

    /// The captured state.
    #[must_use]
    pub fn captured(&self) -> &P {
        &self.captured
    }

    /// Box for storage in history.
    #[must_use]
    pub fn boxed(self) -> Box<dyn Snapshot> {
        Box::new(self)
    }
}

impl<P: Pile> Snapshot for PileSnapshot<P> {
    fn restore(&self) {
        *self.pile.borrow_mut() = self.captured.clone();
    }

    fn pile_identity(&self) -> Option<PileIdentity> {
        Some(self.pile.identity())
    }
}

/// Snapshot of a card move: the source pile before the cards left it and the
/// destination pile before they arrived.
#[derive(Debug)]
pub struct MoveSnapshot {
    source: Box<dyn Snapshot>,
    destination: Box<dyn Snapshot>,
}

impl MoveSnapshot {
    #[must_use]
    pub fn new(source: Box<dyn Snapshot>, destination: Box<dyn Snapshot>) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl Snapshot for MoveSnapshot {
    fn restore(&self) {
        self.destination.restore();
        self.source.restore();
    }

    fn pile_identity(&self) -> Option<PileIdentity> {
        None
    }
}
