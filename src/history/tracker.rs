//! Bounded undo history.

use std::collections::VecDeque;

use super::Snapshot;
use crate::core::{Result, SolitaireError};

/// Default number of undo steps kept.
pub const DEFAULT_HISTORY_MAX_SIZE: usize = 10;

/// Bounded LIFO of snapshots.
///
/// `undo` restores the most recently saved snapshot. Once more than
/// `max_size` snapshots are saved, the oldest one is dropped.
#[derive(Debug)]
pub struct HistoryTracker {
    /// Oldest at the front, newest at the back.
    entries: VecDeque<Box<dyn Snapshot>>,
    max_size: usize,
}

impl Default for HistoryTracker {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_MAX_SIZE)
    }
}

impl HistoryTracker {
    /// Create an empty history keeping at most `max_size` entries.
    ///
    /// Panics if `max_size` is zero.
    #[must_use]
    pub fn new(max_size: usize) -> Self {
        assert!(max_size > 0, "History must keep at least 1 entry");

        Self {
            entries: VecDeque::with_capacity(max_size + 1),
            max_size,
        }
    }

    /// Record a snapshot, evicting the oldest entry if over capacity.
    pub fn save(&mut self, snapshot: Box<dyn Snapshot>) {
        self.entries.push_back(snapshot);
        if self.entries.len() > self.max_size {
            self.entries.pop_front();
            tracing::trace!(max_size = self.max_size, "evicted oldest history entry");
        }
    }

    /// Pop the newest snapshot and restore it.
    pub fn undo(&mut self) -> Result<()> {
        let snapshot = self.entries.pop_back().ok_or(SolitaireError::EmptyHistory)?;
        snapshot.restore();
        Ok(())
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}
