//! Table configuration.
//!
//! A `TableConfig` fixes everything about a hand that is not random:
//! seat names, the shuffle seed, and how the engine plays the
//! non-human seats.

use serde::{Deserialize, Serialize};

use super::seat::SeatMap;
use crate::policy::HeuristicWeights;

/// Configuration for one table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Seed for the deck shuffle. Same seed produces the same deal.
    pub seed: u64,

    /// Display names, in rotation order.
    pub seat_names: SeatMap<String>,

    /// Non-human seats declare concealed and upgraded quads during
    /// their own discard step.
    pub bots_declare_quads: bool,

    /// Non-human seats take the best offered triplet/quad claim.
    /// A win is always taken regardless of this flag.
    pub bots_claim_discards: bool,

    /// Discard heuristic weights for non-human seats.
    pub weights: HeuristicWeights,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            seat_names: SeatMap::from_array([
                "Upper".to_string(),
                "Lower".to_string(),
                "Player".to_string(),
            ]),
            bots_declare_quads: true,
            bots_claim_discards: true,
            weights: HeuristicWeights::default(),
        }
    }
}

impl TableConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom seat names (rotation order).
    #[must_use]
    pub fn with_names(mut self, names: [&str; 3]) -> Self {
        self.seat_names = SeatMap::from_array(names.map(str::to_string));
        self
    }

    /// Enable or disable quad declarations by non-human seats.
    #[must_use]
    pub fn with_bot_quads(mut self, enabled: bool) -> Self {
        self.bots_declare_quads = enabled;
        self
    }

    /// Enable or disable triplet/quad claims by non-human seats.
    #[must_use]
    pub fn with_bot_claims(mut self, enabled: bool) -> Self {
        self.bots_claim_discards = enabled;
        self
    }

    /// Create a new config with custom heuristic weights.
    #[must_use]
    pub fn with_weights(mut self, weights: HeuristicWeights) -> Self {
        self.weights = weights;
        self
    }
}
