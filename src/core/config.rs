//! Engine configuration.

use serde::{Deserialize, Serialize};

use super::error::{Result, SolitaireError};

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolitaireConfig {
    /// Maximum number of undo steps kept (default: 10).
    /// The oldest step is dropped once the limit is exceeded.
    pub history_max_size: usize,

    /// Seed for deck shuffling. `None` draws a random seed.
    /// Same seed produces the same sequence of deals.
    pub seed: Option<u64>,
}

impl Default for SolitaireConfig {
    fn default() -> Self {
        Self {
            history_max_size: 10,
            seed: None,
        }
    }
}

impl SolitaireConfig {
    /// Set the undo history limit.
    #[must_use]
    pub fn with_history_max_size(mut self, size: usize) -> Self {
        self.history_max_size = size;
        self
    }

    /// Set a fixed shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check the configuration before building an engine from it.
    pub fn validate(&self) -> Result<()> {
        if self.history_max_size == 0 {
            return Err(SolitaireError::InvalidConfig(
                "history_max_size must be at least 1",
            ));
        }
        Ok(())
    }
}
