//! Reference rule engine for mill games.
//!
//! Owns the board between turns and drives two players through:
//! - Placing pieces from stock, then moving along edges, then flying
//! - Capturing an opposing piece whenever a move closes a mill
//! - Losing by elimination (fewer than three pieces) or by being blocked
//!
//! Works on any generated board size, including the standard 24.

mod game;

pub use game::{GameResult, MorrisGame, TurnOutcome};
