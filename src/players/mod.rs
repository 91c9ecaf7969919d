//! The `Player` capability: anything that can decide a turn.
//!
//! Two variants exist, chosen by `PlayerKind` rather than by type hierarchy:
//!
//! - `HeuristicAi`: the computer opponent in `crate::ai`
//! - `HumanInputAdapter`: replays positions a front end has already resolved
//!   from clicks or key presses
//!
//! The rule engine owns the board between turns. During `decide_next_move` a
//! player holds the only mutable borrow, which the heuristic AI uses for
//! speculative lookahead; the board must be unchanged when the call returns.

mod human;

use serde::{Deserialize, Serialize};

use crate::ai::{HeuristicAi, HeuristicConfig};
use crate::board::{Board, Topology};
use crate::core::{Decision, EngineError, PlayerState, Position};

pub use human::HumanInputAdapter;

/// A participant that decides moves and capture targets.
pub trait Player {
    /// Decide this turn's placement, step or flight.
    ///
    /// Returns `EngineError::AwaitingInput` when the player is not ready yet;
    /// the caller asks again later.
    fn decide_next_move(
        &mut self,
        board: &mut Board,
        topology: &Topology,
        state: &PlayerState,
    ) -> Result<Decision, EngineError>;

    /// Decide which opposing piece to remove after closing a mill.
    fn decide_capture_target(
        &mut self,
        board: &Board,
        topology: &Topology,
        state: &PlayerState,
    ) -> Result<Position, EngineError>;

    /// Feed a position chosen outside the engine.
    ///
    /// Returns false for players that do not take input.
    fn submit_input(&mut self, _position: Position) -> bool {
        false
    }
}

/// Serializable choice of player variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlayerKind {
    Human,
    Heuristic(HeuristicConfig),
}

impl Default for PlayerKind {
    fn default() -> Self {
        PlayerKind::Heuristic(HeuristicConfig::default())
    }
}

impl PlayerKind {
    /// Instantiate the configured variant.
    #[must_use]
    pub fn build(&self) -> Box<dyn Player> {
        match self {
            PlayerKind::Human => Box::new(HumanInputAdapter::new()),
            PlayerKind::Heuristic(config) => Box::new(HeuristicAi::new(config.clone())),
        }
    }
}
