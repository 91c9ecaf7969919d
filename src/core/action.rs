//! Decision representation: a destination plus an optional source piece.
//!
//! - Placing: destination only
//! - Moving / flying: the piece to vacate, then its destination
//!
//! The rule engine applies decisions; players only produce them.

use serde::{Deserialize, Serialize};

use super::player::Marker;
use super::position::Position;

/// What a player wants to do this turn.
///
/// ## Example
///
/// ```
/// use rust_morris::core::{Decision, Position};
///
/// let place = Decision::place(Position::new(4));
/// assert!(!place.is_relocation());
///
/// let step = Decision::relocate(Position::new(3), Position::new(4));
/// assert_eq!(step.source, Some(Position::new(3)));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Decision {
    /// Position to occupy.
    pub destination: Position,

    /// Piece to vacate first (moving and flying only).
    pub source: Option<Position>,
}

impl Decision {
    /// Put a piece from stock on `destination`.
    #[must_use]
    pub const fn place(destination: Position) -> Self {
        Self {
            destination,
            source: None,
        }
    }

    /// Move or fly the piece on `source` to `destination`.
    #[must_use]
    pub const fn relocate(source: Position, destination: Position) -> Self {
        Self {
            destination,
            source: Some(source),
        }
    }

    /// Check whether this decision vacates a piece.
    #[must_use]
    pub const fn is_relocation(&self) -> bool {
        self.source.is_some()
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.source {
            Some(source) => write!(f, "{} -> {}", source, self.destination),
            None => write!(f, "place {}", self.destination),
        }
    }
}

/// A played decision with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// The player who decided.
    pub marker: Marker,

    /// The decision applied.
    pub decision: Decision,

    /// Opposing piece removed after a mill, if any.
    pub capture: Option<Position>,

    /// Turn number when the decision was applied.
    pub turn: u32,
}

impl DecisionRecord {
    /// Create a new decision record.
    #[must_use]
    pub fn new(marker: Marker, decision: Decision, turn: u32) -> Self {
        Self {
            marker,
            decision,
            capture: None,
            turn,
        }
    }
}
