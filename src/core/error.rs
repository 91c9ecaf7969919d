//! Error types.
//!
//! - `ConfigError`: a board configuration that cannot be played
//! - `EngineError`: a player could not produce a decision
//! - `RulesError`: the rule engine rejected a decision or capture

use thiserror::Error;

use super::action::Decision;
use super::phase::Phase;
use super::player::Marker;
use super::position::Position;

/// Invalid board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board size {0} is not a positive multiple of 8 up to 248")]
    InvalidBoardSize(usize),

    #[error("a stock of {stock} pieces per player does not fit on {size} positions")]
    StockTooLarge { stock: u8, size: usize },

    #[error("flying threshold {threshold} must be below the stock of {stock} pieces")]
    FlyingThreshold { threshold: u8, stock: u8 },
}

/// A player failed to decide.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Every fallback tier came up empty. Given a generated topology and a
    /// live game this cannot happen; callers treat it as fatal.
    #[error("no candidate decision while {phase}")]
    NoCandidate { phase: Phase },

    #[error("the {0} has no piece that can be captured")]
    NoCaptureTarget(Marker),

    #[error("waiting for player input")]
    AwaitingInput,

    #[error("input {position} rejected: {reason}")]
    InvalidInput { position: Position, reason: &'static str },
}

/// The rule engine refused an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("position {0} is not on the board")]
    OutOfRange(Position),

    #[error("position {0} is occupied")]
    Occupied(Position),

    #[error("position {0} does not hold one of the mover's pieces")]
    NotOwnPiece(Position),

    #[error("{from} is not adjacent to {to}")]
    NotAdjacent { from: Position, to: Position },

    #[error("position {0} does not hold an opposing piece")]
    NotEnemyPiece(Position),

    #[error("position {0} is protected by a completed mill")]
    ProtectedByMill(Position),

    #[error("a capture must be chosen before the turn can continue")]
    CapturePending,

    #[error("no mill was formed, nothing may be captured")]
    NoCapturePending,

    #[error("decision {decision} cannot be played while {phase}")]
    WrongDecisionShape { decision: Decision, phase: Phase },

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
