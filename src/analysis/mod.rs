//! Read-only board analysis from one player's point of view.
//!
//! A `BoardView` pairs a board with its topology and the marker of the
//! player doing the thinking. Queries are split by concern:
//!
//! - `threat`: line weights, danger lines, empty slots
//! - `candidates`: movers, defenders, capture targets
//!
//! ## Tie-breaking
//!
//! Most queries scan in topology order and keep the LAST match
//! (`empty_position_of`, `fully_empty_line`, `adjacent_own_piece`,
//! `any_own_piece_off_line`, `vulnerable_enemy_piece`). `dangerous_enemy_line`
//! keeps the FIRST. Decisions replayed from earlier games depend on both.

mod candidates;
mod threat;

use crate::board::{Board, Topology};
use crate::core::Marker;

pub use candidates::Neighbors;
pub use threat::WeightedLine;

/// A board seen by the player holding `marker`.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    board: &'a Board,
    topology: &'a Topology,
    marker: Marker,
}

impl<'a> BoardView<'a> {
    /// Create a view for `marker`.
    #[must_use]
    pub fn new(board: &'a Board, topology: &'a Topology, marker: Marker) -> Self {
        Self {
            board,
            topology,
            marker,
        }
    }

    /// The underlying board.
    #[must_use]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// The underlying topology.
    #[must_use]
    pub fn topology(&self) -> &'a Topology {
        self.topology
    }

    /// The viewing player's marker.
    #[must_use]
    pub fn marker(&self) -> Marker {
        self.marker
    }

    fn is_own(&self, cell: Option<Marker>) -> bool {
        cell == Some(self.marker)
    }

    fn is_opposing(&self, cell: Option<Marker>) -> bool {
        matches!(cell, Some(m) if m != self.marker)
    }
}
