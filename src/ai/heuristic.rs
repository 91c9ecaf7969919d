//! The heuristic computer opponent.

use log::debug;

use crate::board::{Board, Topology};
use crate::core::{Decision, EngineError, GameRng, GameRngState, Phase, PlayerState, Position};
use crate::players::Player;

use super::config::HeuristicConfig;
use super::strategy;

/// Rule-of-thumb opponent: fixed tier cascades per phase, seeded dice for
/// the placement fallbacks.
#[derive(Clone, Debug)]
pub struct HeuristicAi {
    config: HeuristicConfig,
    rng: GameRng,
}

impl HeuristicAi {
    /// Create an opponent whose RNG is seeded from `config.seed`.
    #[must_use]
    pub fn new(config: HeuristicConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self { config, rng }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &HeuristicConfig {
        &self.config
    }

    /// Checkpoint the RNG, e.g. to replay a game from the middle.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Resume from a checkpointed RNG.
    #[must_use]
    pub fn with_rng_state(mut self, state: &GameRngState) -> Self {
        self.rng = GameRng::from_state(state);
        self
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new(HeuristicConfig::default())
    }
}

impl Player for HeuristicAi {
    fn decide_next_move(
        &mut self,
        board: &mut Board,
        topology: &Topology,
        state: &PlayerState,
    ) -> Result<Decision, EngineError> {
        if state.is_first_round() {
            debug!("{} opening with a random placement", state.marker);
            return strategy::random_empty_position(board, &mut self.rng)
                .map(Decision::place)
                .ok_or(EngineError::NoCandidate { phase: state.phase });
        }

        match state.phase {
            Phase::Placing => strategy::decide_placement(board, topology, state.marker, &mut self.rng),
            Phase::Moving => {
                strategy::decide_move(board, topology, state.marker, self.config.defensive_threshold)
            }
            Phase::Flying => strategy::decide_flight(board, topology, state.marker),
        }
    }

    fn decide_capture_target(
        &mut self,
        board: &Board,
        topology: &Topology,
        state: &PlayerState,
    ) -> Result<Position, EngineError> {
        strategy::choose_capture_target(board, topology, state.marker)
    }
}
