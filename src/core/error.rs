//! Contract violations.
//!
//! Rule rejections (dropping a card where it doesn't fit) are not errors: the
//! `try_*` operations report them as `Ok(false)`. `SolitaireError` is
//! reserved for calls that indicate a bug in the caller's wiring.

use super::card::Card;

/// Errors surfaced by the engine, its history, and deck construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SolitaireError {
    #[error("foundation pile id {id} is out of range (0..{count})")]
    InvalidFoundationPileId { id: usize, count: usize },

    #[error("tableau pile id {id} is out of range (0..{count})")]
    InvalidTableauPileId { id: usize, count: usize },

    #[error("a move is already in progress; its source snapshot has not been consumed")]
    MoveAlreadyInProgress,

    #[error("no move is in progress")]
    NoMoveInProgress,

    #[error("history is empty")]
    EmptyHistory,

    #[error("deck must contain {expected} cards, got {actual}")]
    InvalidDeckSize { expected: usize, actual: usize },

    #[error("deck contains {0} more than once")]
    DuplicateCard(Card),

    #[error("invalid configuration: {0}")]
    InvalidConfig(&'static str),
}

/// Crate result alias.
pub type Result<T> = std::result::Result<T, SolitaireError>;
