//! Live board cells.

use serde::{Deserialize, Serialize};

use crate::core::{Marker, Position};

use super::speculation::Speculation;
use super::topology::Topology;

/// One cell per position, each empty or holding a marker.
///
/// The rule engine owns real writes. Players get `&mut Board` only so they
/// can look ahead through [`Board::speculate`]; the guard restores every
/// cell before the borrow ends.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Vec<Option<Marker>>,
}

impl Board {
    /// Create an empty board with `size` positions.
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            cells: vec![None; size],
        }
    }

    /// Create a board from explicit cell contents.
    #[must_use]
    pub fn from_cells(cells: Vec<Option<Marker>>) -> Self {
        Self { cells }
    }

    /// Create a board of `size` positions with the given pieces.
    ///
    /// ```
    /// use rust_morris::board::Board;
    /// use rust_morris::core::{Marker, Position};
    ///
    /// let board = Board::with_pieces(24, &[(1, Marker::First), (17, Marker::First)]);
    /// assert_eq!(board.get(Position::new(17)), Some(Marker::First));
    /// assert_eq!(board.count(Marker::First), 2);
    /// ```
    #[must_use]
    pub fn with_pieces(size: usize, pieces: &[(u8, Marker)]) -> Self {
        let mut board = Self::new(size);
        for &(index, marker) in pieces {
            board.place(Position::new(index), marker);
        }
        board
    }

    /// Number of positions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// Get the marker on a position.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<Marker> {
        self.cells[position.index()]
    }

    /// Check whether a position is empty.
    #[must_use]
    pub fn is_empty(&self, position: Position) -> bool {
        self.get(position).is_none()
    }

    /// Put a marker on a position, replacing whatever was there.
    pub fn place(&mut self, position: Position, marker: Marker) {
        self.cells[position.index()] = Some(marker);
    }

    /// Clear a position, returning its previous marker.
    pub fn remove(&mut self, position: Position) -> Option<Marker> {
        self.cells[position.index()].take()
    }

    /// Iterate over (Position, cell) pairs in position order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Option<Marker>)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &cell)| (Position(i as u8), cell))
    }

    /// Iterate over empty positions.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.iter().filter(|(_, cell)| cell.is_none()).map(|(p, _)| p)
    }

    /// Iterate over positions holding `marker`.
    pub fn pieces(&self, marker: Marker) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |&(_, cell)| cell == Some(marker))
            .map(|(p, _)| p)
    }

    /// Count pieces holding `marker`.
    #[must_use]
    pub fn count(&self, marker: Marker) -> usize {
        self.pieces(marker).count()
    }

    /// Check whether the piece on `position` belongs to a completed mill.
    ///
    /// Empty positions are never part of a mill.
    #[must_use]
    pub fn is_line_complete(&self, topology: &Topology, position: Position) -> bool {
        let Some(marker) = self.get(position) else {
            return false;
        };

        topology.lines_through(position).iter().any(|&index| {
            topology
                .line(index)
                .iter()
                .all(|&p| self.get(p) == Some(marker))
        })
    }

    /// Begin a speculative edit. Every write through the returned guard is
    /// undone when the guard is dropped.
    pub fn speculate(&mut self) -> Speculation<'_> {
        Speculation::new(self)
    }

    /// Evaluate `eval` on the board as it would be after moving `marker`'s
    /// piece from `from` to `to`, then restore both cells.
    pub fn with_relocation<R>(
        &mut self,
        from: Position,
        to: Position,
        marker: Marker,
        eval: impl FnOnce(&Board) -> R,
    ) -> R {
        let mut speculation = self.speculate();
        speculation.relocate(from, to, marker);
        eval(&*speculation)
    }

    /// Overwrite a cell. Only the speculation guard writes through here.
    pub(super) fn write_cell(&mut self, position: Position, cell: Option<Marker>) -> Option<Marker> {
        std::mem::replace(&mut self.cells[position.index()], cell)
    }
}
