//! # rust-morris
//!
//! A twelve men's morris engine with a heuristic computer opponent.
//!
//! ## Design Principles
//!
//! 1. **Topology as Data**: Positions, mills (lines), adjacency and
//!    intersections are generated once from the board size and never change.
//!
//! 2. **Borrowed Board, Scoped Lookahead**: The AI receives the board as an
//!    exclusive borrow. Hypothetical moves go through a `Speculation` guard
//!    that restores every touched cell when it is dropped.
//!
//! 3. **Closed Phases**: `Phase` is an enum, so every strategy dispatcher
//!    matches it exhaustively.
//!
//! ## Modules
//!
//! - `core`: Positions, markers, phases, decisions, RNG, configuration, errors
//! - `board`: Topology generation, the board, and the speculation guard
//! - `analysis`: Read-only threat, weight and candidate queries
//! - `ai`: Lookahead and per-phase strategies of the heuristic opponent
//! - `players`: The `Player` capability and its human adapter
//! - `games`: Reference rule engine driving players through a full game

pub mod core;
pub mod board;
pub mod analysis;
pub mod ai;
pub mod players;
pub mod games;

// Re-export commonly used types
pub use crate::core::{
    Position, Marker, MarkerMap, PlayerState, Phase,
    Decision, DecisionRecord,
    GameRng, GameRngState,
    BoardConfig,
    ConfigError, EngineError, RulesError,
};

pub use crate::board::{Board, Line, Speculation, Topology};

pub use crate::analysis::{BoardView, WeightedLine};

pub use crate::ai::{HeuristicAi, HeuristicConfig};

pub use crate::players::{HumanInputAdapter, Player, PlayerKind};

pub use crate::games::morris::{GameResult, MorrisGame, TurnOutcome};
