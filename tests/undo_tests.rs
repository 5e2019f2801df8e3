//! Undo and move transaction tests.
//!
//! These tests verify that every engine mutation undoes to the exact prior
//! pile state, that a pull followed by a drop is a single undo step, and that
//! moves returning cards to their own pile leave no history.

use rust_solitaire::core::{Card, Deck, FixedDeckGenerator, Rank, SolitaireConfig, Suit};
use rust_solitaire::game::{Solitaire, FOUNDATION_PILE_COUNT, TABLEAU_PILE_COUNT};
use rust_solitaire::piles::{FoundationPile, Pile, StockPile, TableauPile};

/// Full copy of every pile, for before/after comparisons.
#[derive(Debug, PartialEq)]
struct Table {
    foundations: Vec<FoundationPile>,
    tableaus: Vec<TableauPile>,
    stock: StockPile,
}

fn table(game: &Solitaire) -> Table {
    Table {
        foundations: (0..FOUNDATION_PILE_COUNT)
            .map(|id| game.foundation_pile(id).unwrap().clone())
            .collect(),
        tableaus: (0..TABLEAU_PILE_COUNT)
            .map(|id| game.tableau_pile(id).unwrap().clone())
            .collect(),
        stock: game.stock_pile().clone(),
    }
}

/// King of Spades alone on pile 0, Queen of Hearts on top of pile 1, Ace
/// and Two of Diamonds first in the stock.
fn prepared_deck() -> Deck {
    let mut cards = Deck::standard().into_cards();
    let picks = [
        (0, Card::new(Rank::King, Suit::Spade)),
        (2, Card::new(Rank::Queen, Suit::Heart)),
        (28, Card::new(Rank::Ace, Suit::Diamond)),
        (29, Card::new(Rank::Two, Suit::Diamond)),
    ];
    for (position, card) in picks {
        let current = cards.iter().position(|&c| c == card).unwrap();
        cards.swap(position, current);
    }
    Deck::from_cards(cards).unwrap()
}

fn prepared_game(config: SolitaireConfig) -> Solitaire {
    let mut game =
        Solitaire::with_deck_generator(config, FixedDeckGenerator::new(prepared_deck())).unwrap();
    game.start_new_game();
    game
}

// =============================================================================
// Single-pile operations
// =============================================================================

/// Test undoing a stock selection.
#[test]
fn test_undo_stock_selection() {
    let mut game = prepared_game(SolitaireConfig::default());
    let before = table(&game);

    assert!(game.try_select_next_stock_pile_card().unwrap());
    assert_eq!(game.history_len(), 1);
    assert!(game.can_undo());

    assert!(game.try_undo_operation().unwrap());
    assert_eq!(table(&game), before);
    assert_eq!(game.history_len(), 0);
    assert!(!game.can_undo());
    assert!(!game.try_undo_operation().unwrap());
}

/// Test undoing an uncover restores the face-down card.
#[test]
fn test_undo_uncover() {
    let mut game = prepared_game(SolitaireConfig::default());

    assert!(game.try_pull_out_cards_from_tableau_pile(1, 1).unwrap());
    assert!(game.try_add_cards_on_tableau_pile(0).unwrap());
    let covered = table(&game);

    assert!(game.try_uncover_tableau_pile_top_card(1).unwrap());
    assert!(game.try_undo_operation().unwrap());

    assert_eq!(table(&game), covered);
    assert!(game.tableau_pile(1).unwrap().is_top_card_covered());
}

// =============================================================================
// Move transactions
// =============================================================================

/// Test a stock-to-foundation move undoes in one step, restoring both piles.
#[test]
fn test_move_is_one_undo_step() {
    let mut game = prepared_game(SolitaireConfig::default());
    assert!(game.try_select_next_stock_pile_card().unwrap());
    let before_move = table(&game);

    assert!(game.try_pull_out_card_from_stock_pile().unwrap());
    assert_eq!(game.history_len(), 1);
    assert!(game.try_add_card_on_foundation_pile(1).unwrap());
    assert_eq!(game.history_len(), 2);

    assert!(game.try_undo_operation().unwrap());
    assert_eq!(table(&game), before_move);
    assert_eq!(game.stock_pile().selected_card(), Some(Card::new(Rank::Ace, Suit::Diamond)));
    assert!(game.foundation_pile(1).unwrap().top_card_value().is_none());
    assert_eq!(game.history_len(), 1);
}

/// Test a tableau-to-tableau move undoes both piles, including the cursor.
#[test]
fn test_undo_tableau_move() {
    let mut game = prepared_game(SolitaireConfig::default());
    let before = table(&game);

    assert!(game.try_pull_out_cards_from_tableau_pile(1, 1).unwrap());
    assert!(game.try_add_cards_on_tableau_pile(0).unwrap());
    assert_ne!(table(&game), before);

    assert!(game.try_undo_operation().unwrap());
    assert_eq!(table(&game), before);
    assert!(!game.tableau_pile(1).unwrap().is_top_card_covered());
}

/// Test that dropping cards back on their own pile records nothing.
#[test]
fn test_same_pile_move_has_no_history() {
    let mut game = prepared_game(SolitaireConfig::default());
    assert!(game.try_select_next_stock_pile_card().unwrap());
    assert!(game.try_pull_out_card_from_stock_pile().unwrap());
    assert!(game.try_add_card_on_foundation_pile(0).unwrap());
    let history = game.history_len();
    let before = table(&game);

    assert!(game.try_pull_out_card_from_foundation_pile(0).unwrap());
    assert!(game.try_add_card_on_foundation_pile(0).unwrap());

    assert_eq!(game.history_len(), history);
    assert_eq!(table(&game), before);

    // The last entry is still the original stock-to-foundation move.
    assert!(game.try_undo_operation().unwrap());
    assert!(game.foundation_pile(0).unwrap().top_card_value().is_none());
}

/// Test cancelling a move restores the source and records nothing.
#[test]
fn test_put_back_restores_source() {
    let mut game = prepared_game(SolitaireConfig::default());
    assert!(game.try_select_next_stock_pile_card().unwrap());
    let before = table(&game);
    let history = game.history_len();

    assert!(game.try_pull_out_card_from_stock_pile().unwrap());
    assert_ne!(table(&game), before);
    assert!(game.try_put_cards_back_from_hand().unwrap());

    assert_eq!(table(&game), before);
    assert_eq!(game.history_len(), history);
    assert!(game.cards_in_hand().is_empty());
}

/// Test that a rejected drop leaves the destination untouched and the move
/// still pending.
#[test]
fn test_rejected_drop_keeps_move_pending() {
    let mut game = prepared_game(SolitaireConfig::default());
    assert!(game.try_select_next_stock_pile_card().unwrap());
    assert!(game.try_select_next_stock_pile_card().unwrap());
    let before = table(&game);

    // Two of Diamonds cannot start a foundation.
    assert!(game.try_pull_out_card_from_stock_pile().unwrap());
    assert!(!game.try_add_card_on_foundation_pile(0).unwrap());
    assert!(!game.try_add_cards_on_tableau_pile(0).unwrap());

    assert!(game.try_put_cards_back_from_hand().unwrap());
    assert_eq!(table(&game), before);
}

/// Test a sequence of operations undoes in reverse order.
#[test]
fn test_undo_sequence_in_reverse() {
    let mut game = prepared_game(SolitaireConfig::default());
    let mut states = vec![table(&game)];

    assert!(game.try_select_next_stock_pile_card().unwrap());
    states.push(table(&game));
    assert!(game.try_pull_out_card_from_stock_pile().unwrap());
    assert!(game.try_add_card_on_foundation_pile(2).unwrap());
    states.push(table(&game));
    assert!(game.try_select_next_stock_pile_card().unwrap());
    states.push(table(&game));
    assert!(game.try_pull_out_card_from_stock_pile().unwrap());
    assert!(game.try_add_card_on_foundation_pile(2).unwrap());
    assert_eq!(game.foundation_pile(2).unwrap().len(), 2);

    while let Some(expected) = states.pop() {
        assert!(game.try_undo_operation().unwrap());
        assert_eq!(table(&game), expected);
    }
    assert_eq!(game.history_len(), 0);
}

// =============================================================================
// History limits
// =============================================================================

/// Test the history cap drops the oldest steps.
#[test]
fn test_history_cap() {
    let mut game = prepared_game(SolitaireConfig::default().with_history_max_size(3));
    let mut states = Vec::new();

    for _ in 0..5 {
        states.push(table(&game));
        assert!(game.try_select_next_stock_pile_card().unwrap());
    }
    assert_eq!(game.history_len(), 3);

    for expected in states.iter().rev().take(3) {
        assert!(game.try_undo_operation().unwrap());
        assert_eq!(&table(&game), expected);
    }
    assert!(!game.try_undo_operation().unwrap());
    assert_eq!(game.stock_pile().selected_card_index(), Some(1));
}

/// Test that a new game cannot be undone.
#[test]
fn test_new_game_clears_history() {
    let mut game = prepared_game(SolitaireConfig::default());
    assert!(game.try_select_next_stock_pile_card().unwrap());

    game.start_new_game();
    assert_eq!(game.history_len(), 0);
    assert!(!game.try_undo_operation().unwrap());
}
