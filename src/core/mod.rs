//! Core engine types: positions, markers, phases, decisions, RNG, configuration.
//!
//! These are the building blocks shared by the board, the AI and the
//! reference rule engine.

pub mod position;
pub mod player;
pub mod phase;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use position::Position;
pub use player::{Marker, MarkerMap, PlayerState};
pub use phase::Phase;
pub use rng::{GameRng, GameRngState};
pub use config::BoardConfig;
pub use action::{Decision, DecisionRecord};
pub use error::{ConfigError, EngineError, RulesError};
