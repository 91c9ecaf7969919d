//! Heuristic computer opponent.
//!
//! ## Overview
//!
//! The AI answers two questions per turn: where to place/move/fly, and,
//! after a mill, which opposing piece to capture. It scores nothing and
//! searches almost nothing; instead each phase runs a fixed cascade of
//! tiers and takes the first that yields a decision.
//!
//! | Phase   | Tiers                                                            |
//! |---------|------------------------------------------------------------------|
//! | Placing | complete a mill, block a danger line, extend the heaviest line, random |
//! | Moving  | complete a mill, block, two-ply forced-mill lookahead, any step  |
//! | Flying  | complete a mill, block, extend any weighted line, any flight     |
//!
//! The very first placement of a game is uniformly random.
//!
//! ## Usage
//!
//! ```rust
//! use rust_morris::ai::{HeuristicAi, HeuristicConfig};
//! use rust_morris::board::{Board, Topology};
//! use rust_morris::core::{Marker, Phase, PlayerState, Position};
//! use rust_morris::players::Player;
//!
//! let topology = Topology::standard();
//! let mut board = Board::with_pieces(24, &[(0, Marker::First), (1, Marker::First)]);
//! let state = PlayerState::new(Marker::First, 12).with_stock(10);
//!
//! let mut ai = HeuristicAi::new(HeuristicConfig::default());
//! let decision = ai.decide_next_move(&mut board, &topology, &state).unwrap();
//! assert_eq!(decision.destination, Position::new(2));
//! ```

pub mod config;
pub mod heuristic;
pub mod lookahead;
pub mod strategy;

pub use config::HeuristicConfig;
pub use heuristic::HeuristicAi;
pub use lookahead::plan_ahead_for_forced_mill;
