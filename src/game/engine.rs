//! The Klondike engine.

use std::cell::Ref;

use serde::{Deserialize, Serialize};

use crate::core::{
    Card, DeckGenerator, Result, ShuffledDeckGenerator, SolitaireConfig, SolitaireError,
};
use crate::history::{HistoryTracker, MoveSnapshotCreator};
use crate::piles::{CardSequence, FoundationPile, Pile, SharedPile, StockPile, TableauPile};

/// Number of foundation piles.
pub const FOUNDATION_PILE_COUNT: usize = 4;

/// Number of tableau piles.
pub const TABLEAU_PILE_COUNT: usize = 7;

/// Observable game state.
///
/// Derived from pile and hand state on demand, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// No cards in hand: the player may pull, uncover, draw or undo.
    HandEmpty,
    /// Cards in hand: the player may only drop them or put them back.
    HandHolding,
    /// Every foundation is built up to the King.
    Finished,
}

/// Klondike solitaire engine.
///
/// Owns every pile, the hand, and the undo history, and exposes the only
/// operations that mutate them. Each `try_*` operation returns:
/// - `Ok(true)` if it took effect,
/// - `Ok(false)` if the rules or the current game state rejected it (a
///   normal outcome, nothing changed),
/// - `Err(_)` for contract violations such as an out-of-range pile id.
///
/// Every successful mutation can be undone with
/// [`try_undo_operation`](Self::try_undo_operation). A card move is a
/// pull into the hand followed by a drop onto a pile, and undoes as one step.
///
/// ## Example
///
/// ```
/// use rust_solitaire::core::SolitaireConfig;
/// use rust_solitaire::game::{GameStatus, Solitaire};
/// use rust_solitaire::piles::Pile;
///
/// let mut game = Solitaire::new(SolitaireConfig::default().with_seed(42)).unwrap();
/// game.start_new_game();
///
/// assert_eq!(game.status(), GameStatus::HandEmpty);
/// assert_eq!(game.stock_pile().cards().len(), 24);
///
/// // Draw from the stock and undo it.
/// assert!(game.try_select_next_stock_pile_card().unwrap());
/// assert!(game.try_undo_operation().unwrap());
/// assert_eq!(game.stock_pile().selected_card_index(), None);
/// ```
pub struct Solitaire {
    config: SolitaireConfig,
    deck_generator: Box<dyn DeckGenerator>,
    foundation_piles: [SharedPile<FoundationPile>; FOUNDATION_PILE_COUNT],
    tableau_piles: [SharedPile<TableauPile>; TABLEAU_PILE_COUNT],
    stock_pile: SharedPile<StockPile>,
    history: HistoryTracker,
    move_snapshots: MoveSnapshotCreator,
    /// Cards in transit. Non-empty iff a move is pending.
    hand: CardSequence,
}

impl Solitaire {
    /// Create an engine that shuffles its own decks.
    ///
    /// Uses `config.seed` when set. Piles stay empty until
    /// [`start_new_game`](Self::start_new_game).
    pub fn new(config: SolitaireConfig) -> Result<Self> {
        let generator = match config.seed {
            Some(seed) => ShuffledDeckGenerator::seeded(seed),
            None => ShuffledDeckGenerator::default(),
        };
        tracing::debug!(seed = generator.seed(), "created shuffled deck generator");
        Self::with_deck_generator(config, generator)
    }

    /// Create an engine drawing its decks from `deck_generator`.
    pub fn with_deck_generator(
        config: SolitaireConfig,
        deck_generator: impl DeckGenerator + 'static,
    ) -> Result<Self> {
        config.validate()?;

        Ok(Self {
            history: HistoryTracker::new(config.history_max_size),
            config,
            deck_generator: Box::new(deck_generator),
            foundation_piles: std::array::from_fn(|_| SharedPile::default()),
            tableau_piles: std::array::from_fn(|_| SharedPile::default()),
            stock_pile: SharedPile::default(),
            move_snapshots: MoveSnapshotCreator::new(),
            hand: CardSequence::new(),
        })
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SolitaireConfig {
        &self.config
    }

    // === Game Lifecycle ===

    /// Deal a new game from a fresh deck.
    ///
    /// Tableau pile `i` receives `i + 1` cards, the rest go to the stock.
    /// This is a full reset: the hand, any pending move and the undo history
    /// are discarded, and no undo entry is recorded.
    pub fn start_new_game(&mut self) {
        self.hand.clear();
        self.move_snapshots.discard_pending();
        self.history.clear();

        let mut cards = self.deck_generator.generate().into_cards().into_iter();

        for pile in &self.foundation_piles {
            pile.borrow_mut().initialize();
        }
        for (id, pile) in self.tableau_piles.iter().enumerate() {
            pile.borrow_mut().initialize(cards.by_ref().take(id + 1));
        }
        self.stock_pile.borrow_mut().initialize(cards);

        tracing::debug!(stock = self.stock_pile.borrow().len(), "dealt new game");
    }

    /// Undo the most recent operation.
    pub fn try_undo_operation(&mut self) -> Result<bool> {
        if !self.can_undo() {
            tracing::trace!("undo rejected");
            return Ok(false);
        }
        self.history.undo()?;
        tracing::debug!(remaining = self.history.len(), "undid operation");
        Ok(true)
    }

    /// Cancel the move in progress, returning the hand to its source pile.
    ///
    /// Records no history.
    pub fn try_put_cards_back_from_hand(&mut self) -> Result<bool> {
        if !self.is_hand_holding_and_game_in_progress() {
            tracing::trace!("put back rejected");
            return Ok(false);
        }
        self.move_snapshots.restore_source_pile()?;
        self.hand.clear();
        tracing::debug!("put cards back from hand");
        Ok(true)
    }

    // === Foundation ===

    /// Pick up the top card of a foundation pile.
    pub fn try_pull_out_card_from_foundation_pile(&mut self, id: usize) -> Result<bool> {
        let pile = self.foundation(id)?.clone();
        if !self.is_hand_empty_and_game_in_progress() {
            tracing::trace!(pile = id, "foundation pull rejected: hand busy or game finished");
            return Ok(false);
        }
        self.start_move(&pile, |pile| pile.try_pull_out_card().into_iter().collect())
    }

    /// Drop the single card in hand onto a foundation pile.
    pub fn try_add_card_on_foundation_pile(&mut self, id: usize) -> Result<bool> {
        let pile = self.foundation(id)?.clone();
        if !self.is_hand_holding_and_game_in_progress() || self.hand.len() != 1 {
            tracing::trace!(pile = id, hand = self.hand.len(), "foundation add rejected");
            return Ok(false);
        }
        self.finish_move(&pile, |pile, hand| {
            let mut candidate = hand.first().copied();
            let accepted = pile.try_add_card(&mut candidate);
            if accepted {
                hand.clear();
            }
            accepted
        })
    }

    // === Tableau ===

    /// Turn the face-down top card of a tableau pile face-up.
    pub fn try_uncover_tableau_pile_top_card(&mut self, id: usize) -> Result<bool> {
        let pile = self.tableau(id)?.clone();
        let covered = pile.borrow().is_top_card_covered();
        if !self.is_hand_empty_and_game_in_progress() || !covered {
            tracing::trace!(pile = id, "uncover rejected");
            return Ok(false);
        }

        let snapshot = pile.create_snapshot();
        pile.borrow_mut().try_uncover_top_card();
        self.history.save(snapshot.boxed());
        tracing::debug!(pile = id, "uncovered tableau top card");
        Ok(true)
    }

    /// Pick up the top `quantity` face-up cards of a tableau pile.
    pub fn try_pull_out_cards_from_tableau_pile(&mut self, id: usize, quantity: usize) -> Result<bool> {
        let pile = self.tableau(id)?.clone();
        if !self.is_hand_empty_and_game_in_progress() {
            tracing::trace!(pile = id, quantity, "tableau pull rejected: hand busy or game finished");
            return Ok(false);
        }
        self.start_move(&pile, |pile| pile.try_pull_out_cards(quantity))
    }

    /// Drop the whole hand onto a tableau pile.
    pub fn try_add_cards_on_tableau_pile(&mut self, id: usize) -> Result<bool> {
        let pile = self.tableau(id)?.clone();
        if !self.is_hand_holding_and_game_in_progress() {
            tracing::trace!(pile = id, "tableau add rejected: hand empty or game finished");
            return Ok(false);
        }
        self.finish_move(&pile, |pile, hand| pile.try_add_cards(hand))
    }

    // === Stock ===

    /// Advance the stock selection to the next card.
    pub fn try_select_next_stock_pile_card(&mut self) -> Result<bool> {
        if !self.is_hand_empty_and_game_in_progress() || self.stock_pile.borrow().is_empty() {
            tracing::trace!("stock select rejected");
            return Ok(false);
        }

        let snapshot = self.stock_pile.create_snapshot();
        self.stock_pile.borrow_mut().try_select_next_card();
        self.history.save(snapshot.boxed());
        tracing::debug!(
            selected = ?self.stock_pile.borrow().selected_card_index(),
            "selected next stock card"
        );
        Ok(true)
    }

    /// Pick up the selected stock card.
    pub fn try_pull_out_card_from_stock_pile(&mut self) -> Result<bool> {
        if !self.is_hand_empty_and_game_in_progress() {
            tracing::trace!("stock pull rejected: hand busy or game finished");
            return Ok(false);
        }
        let pile = self.stock_pile.clone();
        self.start_move(&pile, |pile| pile.try_pull_out_card().into_iter().collect())
    }

    // === Queries ===

    /// Borrow a foundation pile (`id` in `0..4`).
    pub fn foundation_pile(&self, id: usize) -> Result<Ref<'_, FoundationPile>> {
        Ok(self.foundation(id)?.borrow())
    }

    /// Borrow a tableau pile (`id` in `0..7`).
    pub fn tableau_pile(&self, id: usize) -> Result<Ref<'_, TableauPile>> {
        Ok(self.tableau(id)?.borrow())
    }

    /// Borrow the stock pile.
    pub fn stock_pile(&self) -> Ref<'_, StockPile> {
        self.stock_pile.borrow()
    }

    /// Cards currently in transit, bottom-most first.
    #[must_use]
    pub fn cards_in_hand(&self) -> &[Card] {
        &self.hand
    }

    /// True once all four foundations have a King on top.
    #[must_use]
    pub fn is_game_finished(&self) -> bool {
        self.foundation_piles
            .iter()
            .all(|pile| pile.borrow().is_complete())
    }

    /// Current game status.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.is_game_finished() {
            GameStatus::Finished
        } else if self.hand.is_empty() {
            GameStatus::HandEmpty
        } else {
            GameStatus::HandHolding
        }
    }

    /// Check if [`try_undo_operation`](Self::try_undo_operation) would succeed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.is_hand_empty_and_game_in_progress() && !self.history.is_empty()
    }

    /// Number of undo steps available.
    #[must_use]
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    // === Guards ===

    fn is_hand_empty_and_game_in_progress(&self) -> bool {
        self.hand.is_empty() && !self.is_game_finished()
    }

    fn is_hand_holding_and_game_in_progress(&self) -> bool {
        !self.hand.is_empty() && !self.is_game_finished()
    }

    fn foundation(&self, id: usize) -> Result<&SharedPile<FoundationPile>> {
        self.foundation_piles
            .get(id)
            .ok_or(SolitaireError::InvalidFoundationPileId {
                id,
                count: FOUNDATION_PILE_COUNT,
            })
    }

    fn tableau(&self, id: usize) -> Result<&SharedPile<TableauPile>> {
        self.tableau_piles
            .get(id)
            .ok_or(SolitaireError::InvalidTableauPileId {
                id,
                count: TABLEAU_PILE_COUNT,
            })
    }

    // === Move Transaction ===

    /// Pull cards from `pile` into the empty hand.
    ///
    /// The pre-pull snapshot becomes the move's source. If `pull` yields
    /// nothing, the snapshot is dropped and no move starts.
    fn start_move<P: Pile>(
        &mut self,
        pile: &SharedPile<P>,
        pull: impl FnOnce(&mut P) -> CardSequence,
    ) -> Result<bool> {
        if self.move_snapshots.has_pending_move() {
            return Err(SolitaireError::MoveAlreadyInProgress);
        }

        let snapshot = pile.create_snapshot();
        let pulled = pull(&mut pile.borrow_mut());
        if pulled.is_empty() {
            tracing::trace!("nothing to pull");
            return Ok(false);
        }

        self.move_snapshots.save_source_pile_snapshot(snapshot.boxed())?;
        tracing::debug!(cards = pulled.len(), "started move");
        self.hand = pulled;
        Ok(true)
    }

    /// Drop the hand onto `pile`.
    ///
    /// `place` consumes the hand on acceptance. On success the move is
    /// recorded as one history entry, unless the cards went back to the pile
    /// they came from.
    fn finish_move<P: Pile>(
        &mut self,
        pile: &SharedPile<P>,
        place: impl FnOnce(&mut P, &mut CardSequence) -> bool,
    ) -> Result<bool> {
        if !self.move_snapshots.has_pending_move() {
            return Err(SolitaireError::NoMoveInProgress);
        }

        let destination = pile.create_snapshot();
        if !place(&mut pile.borrow_mut(), &mut self.hand) {
            tracing::trace!("drop rejected by pile rules");
            return Ok(false);
        }
        self.hand.clear();

        match self
            .move_snapshots
            .create_snapshot_if_cards_moved_to_other_pile(destination.boxed())?
        {
            Some(entry) => {
                self.history.save(entry);
                tracing::debug!(history = self.history.len(), "finished move");
            }
            None => tracing::debug!("cards returned to their source pile"),
        }
        Ok(true)
    }
}
