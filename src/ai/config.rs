//! Heuristic AI configuration parameters.

use serde::{Deserialize, Serialize};

/// Heuristic AI configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeuristicConfig {
    /// Random seed for placement fallbacks.
    /// Same seed and same boards produce the same game.
    pub seed: u64,

    /// Defensive value at which an own piece is pinned in place.
    /// The lookahead never plans to vacate such a piece.
    pub defensive_threshold: u32,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            defensive_threshold: 3,
        }
    }
}

impl HeuristicConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with custom defensive threshold.
    pub fn with_defensive_threshold(mut self, threshold: u32) -> Self {
        self.defensive_threshold = threshold;
        self
    }
}
