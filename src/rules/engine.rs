//! Rules engine trait.
//!
//! A `RulesEngine` knows:
//! - Which actions the active seat may take
//! - How an action moves the state forward
//! - When the hand is over
//!
//! Implementations must be deterministic: the same state and action always
//! produce the same next state.

use crate::core::{Action, EngineResult, GameState, Outcome, TableConfig};

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Empty once the hand is finished
/// - `try_apply`: Never mutates its input; refusals carry a `Rejection`
/// - `is_terminal`: `None` while the hand continues
pub trait RulesEngine {
    /// The table configuration in force.
    fn config(&self) -> &TableConfig;

    /// Every action the active seat may take right now.
    fn legal_actions(&self, state: &GameState) -> Vec<Action>;

    /// Apply an action for the active seat.
    fn try_apply(&self, state: &GameState, action: Action) -> EngineResult<GameState>;

    /// Check if the hand is over.
    fn is_terminal(&self, state: &GameState) -> Option<Outcome> {
        state.outcome.clone()
    }

    // === Convenience Methods ===

    /// Apply an action, returning the input unchanged if it is refused.
    fn apply_action(&self, state: &GameState, action: Action) -> GameState {
        self.try_apply(state, action)
            .unwrap_or_else(|_| state.clone())
    }

    /// Is `action` currently legal?
    fn is_legal(&self, state: &GameState, action: Action) -> bool {
        self.legal_actions(state).contains(&action)
    }
}
