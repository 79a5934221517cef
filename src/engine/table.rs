//! The table: the entry point a front end talks to.
//!
//! Holds the configuration and the bots' discard policy. Every operation
//! takes a snapshot and returns the next one. The plain forms return the
//! input unchanged when a request is refused; the `try_` forms say why.

use super::{bot, controller};
use crate::core::{Action, EngineResult, GameRng, GameState, Response, Seat, TableConfig};
use crate::policy::DiscardHeuristic;
use crate::rules::RulesEngine;
use crate::tiles::{build_deck, shuffle, Tile, TileId, TileKind};

/// One three-seat table.
///
/// ```
/// use gap_five::{Table, TableConfig};
///
/// let table = Table::new(TableConfig::default().with_seed(7));
/// let state = table.new_hand();
/// assert_eq!(state.deck.len(), 45);
///
/// // Bots play until it is the human's turn (or the hand ends).
/// let state = table.advance_until_human(&state);
/// assert!(state.is_finished() || state.active_seat().is_human());
/// ```
#[derive(Clone, Debug)]
pub struct Table {
    config: TableConfig,
    heuristic: DiscardHeuristic,
}

impl Table {
    #[must_use]
    pub fn new(config: TableConfig) -> Self {
        let heuristic = DiscardHeuristic::new(config.weights);
        Self { config, heuristic }
    }

    #[must_use]
    pub fn heuristic(&self) -> &DiscardHeuristic {
        &self.heuristic
    }

    // === Hand creation ===

    /// Shuffle with the configured seed and deal.
    #[must_use]
    pub fn new_hand(&self) -> GameState {
        self.new_hand_with_seed(self.config.seed)
    }

    #[must_use]
    pub fn new_hand_with_seed(&self, seed: u64) -> GameState {
        self.new_hand_with_rng(&mut GameRng::new(seed))
    }

    /// Shuffle with a caller-owned RNG, e.g. one forked per hand of a session.
    #[must_use]
    pub fn new_hand_with_rng(&self, rng: &mut GameRng) -> GameState {
        let deck = shuffle(&build_deck(), rng);
        self.new_hand_from_deck(&deck)
    }

    /// Deal an already-ordered deck.
    #[must_use]
    pub fn new_hand_from_deck(&self, deck: &[Tile]) -> GameState {
        GameState::from_deck(&self.config, deck)
    }

    // === Human seat ===

    pub fn try_draw(&self, state: &GameState) -> EngineResult<GameState> {
        controller::try_draw(state, Seat::Human)
    }

    #[must_use]
    pub fn draw(&self, state: &GameState) -> GameState {
        or_unchanged(state, self.try_draw(state))
    }

    pub fn try_discard(&self, state: &GameState, tile: TileId) -> EngineResult<GameState> {
        controller::try_discard(state, Seat::Human, tile)
    }

    #[must_use]
    pub fn discard(&self, state: &GameState, tile: TileId) -> GameState {
        or_unchanged(state, self.try_discard(state, tile))
    }

    pub fn try_declare_quad(&self, state: &GameState, kind: TileKind) -> EngineResult<GameState> {
        controller::try_declare_quad(state, Seat::Human, kind)
    }

    #[must_use]
    pub fn declare_quad(&self, state: &GameState, kind: TileKind) -> GameState {
        or_unchanged(state, self.try_declare_quad(state, kind))
    }

    pub fn try_respond(&self, state: &GameState, response: Response) -> EngineResult<GameState> {
        controller::try_respond(state, Seat::Human, response)
    }

    #[must_use]
    pub fn respond(&self, state: &GameState, response: Response) -> GameState {
        or_unchanged(state, self.try_respond(state, response))
    }

    // === Bot seats ===

    pub fn try_advance_bot(&self, state: &GameState) -> EngineResult<GameState> {
        bot::advance_bot(state, &self.config, &self.heuristic)
    }

    /// Play the active bot seat's full turn.
    #[must_use]
    pub fn advance_bot(&self, state: &GameState) -> GameState {
        or_unchanged(state, self.try_advance_bot(state))
    }

    /// Play bot turns until the human is active or the hand is over.
    #[must_use]
    pub fn advance_until_human(&self, state: &GameState) -> GameState {
        or_unchanged(
            state,
            bot::advance_until_human(state, &self.config, &self.heuristic),
        )
    }

    /// The action a bot would take in the human's place.
    #[must_use]
    pub fn suggest(&self, state: &GameState) -> Option<Action> {
        bot::choose_action(state, &self.config, &self.heuristic)
    }
}

impl Default for Table {
    fn default() -> Self {
        Self::new(TableConfig::default())
    }
}

impl RulesEngine for Table {
    fn config(&self) -> &TableConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState) -> Vec<Action> {
        controller::legal_actions(state)
    }

    fn try_apply(&self, state: &GameState, action: Action) -> EngineResult<GameState> {
        controller::apply(state, action)
    }
}

fn or_unchanged(state: &GameState, result: EngineResult<GameState>) -> GameState {
    result.unwrap_or_else(|_| state.clone())
}
