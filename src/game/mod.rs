//! Game orchestration.
//!
//! [`Solitaire`] ties the piles, the hand and the undo history together and
//! is the only entry point for mutations. Rendering and input code read state
//! through its query methods and act through its `try_*` operations.

mod engine;

pub use engine::{GameStatus, Solitaire, FOUNDATION_PILE_COUNT, TABLEAU_PILE_COUNT};
