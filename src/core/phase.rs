//! Game phases.

use serde::{Deserialize, Serialize};

/// The three phases a player passes through.
///
/// Phases only move forward: a player places until its stock runs out,
/// then moves along edges, then flies once it is down to the flying
/// threshold. The rule engine owns transitions; players only read them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Pieces remain in stock and are put on empty positions.
    Placing,
    /// Pieces slide along a single graph edge.
    Moving,
    /// Pieces jump to any empty position.
    Flying,
}

impl Phase {
    /// Determine the phase implied by a player's piece counts.
    ///
    /// ```
    /// use rust_morris::core::Phase;
    ///
    /// assert_eq!(Phase::for_counts(4, 7, 3), Phase::Placing);
    /// assert_eq!(Phase::for_counts(0, 7, 3), Phase::Moving);
    /// assert_eq!(Phase::for_counts(0, 3, 3), Phase::Flying);
    /// ```
    #[must_use]
    pub fn for_counts(stock_pieces: u8, on_board: usize, flying_threshold: u8) -> Self {
        if stock_pieces > 0 {
            Phase::Placing
        } else if on_board <= flying_threshold as usize {
            Phase::Flying
        } else {
            Phase::Moving
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Placing => "Placing pieces",
            Phase::Moving => "Moving pieces",
            Phase::Flying => "Flying",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
