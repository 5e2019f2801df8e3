//! Move transactions: pairing a source snapshot with a destination snapshot.

use super::{MoveSnapshot, Snapshot};
use crate::core::{Result, SolitaireError};

/// Holds the source snapshot of the move currently in flight.
///
/// A move starts when cards leave a pile for the hand
/// ([`save_source_pile_snapshot`](Self::save_source_pile_snapshot)) and ends
/// either when they land on a pile
/// ([`create_snapshot_if_cards_moved_to_other_pile`](Self::create_snapshot_if_cards_moved_to_other_pile))
/// or when the player cancels ([`restore_source_pile`](Self::restore_source_pile)).
/// Only one move may be in flight.
#[derive(Debug, Default)]
pub struct MoveSnapshotCreator {
    pending_source: Option<Box<dyn Snapshot>>,
}

impl MoveSnapshotCreator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a move with the snapshot of the pile the cards are leaving.
    pub fn save_source_pile_snapshot(&mut self, snapshot: Box<dyn Snapshot>) -> Result<()> {
        if self.pending_source.is_some() {
            return Err(SolitaireError::MoveAlreadyInProgress);
        }
        self.pending_source = Some(snapshot);
        Ok(())
    }

    /// Finish the move with the snapshot of the pile the cards landed on.
    ///
    /// Returns the compound history entry, or `None` when the cards went back
    /// to the pile they came from.
    pub fn create_snapshot_if_cards_moved_to_other_pile(
        &mut self,
        destination: Box<dyn Snapshot>,
    ) -> Result<Option<Box<dyn Snapshot>>> {
        let source = self
            .pending_source
            .take()
            .ok_or(SolitaireError::NoMoveInProgress)?;

        if source.is_snapshot_of_same_object(destination.as_ref()) {
            return Ok(None);
        }
        Ok(Some(Box::new(MoveSnapshot::new(source, destination))))
    }

    /// Cancel the move, restoring the source pile.
    pub fn restore_source_pile(&mut self) -> Result<()> {
        let source = self
            .pending_source
            .take()
            .ok_or(SolitaireError::NoMoveInProgress)?;
        source.restore();
        Ok(())
    }

    /// Check if a move is in flight.
    #[must_use]
    pub fn has_pending_move(&self) -> bool {
        self.pending_source.is_some()
    }

    /// Forget the move in flight without restoring anything.
    pub fn discard_pending(&mut self) {
        self.pending_source = None;
    }
}
