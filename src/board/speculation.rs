//! Scoped, self-reverting board edits for lookahead.
//!
//! A `Speculation` holds the board's only mutable borrow. Each write logs
//! the cell's previous value; on drop the log is replayed backwards, so the
//! board is restored however the evaluation ends (normal exit, early
//! `return`, `?`, or unwinding).
//!
//! Guards nest: an inner guard borrows the outer one and is restored first.
//!
//! ```
//! use rust_morris::board::{Board, Topology};
//! use rust_morris::core::{Marker, Position};
//!
//! let topo = Topology::standard();
//! let mut board = Board::with_pieces(24, &[(0, Marker::First), (1, Marker::First), (3, Marker::First)]);
//! let before = board.clone();
//!
//! {
//!     let mut outer = board.speculate();
//!     outer.relocate(Position::new(3), Position::new(2), Marker::First);
//!     assert!(outer.is_line_complete(&topo, Position::new(2)));
//!
//!     let mut inner = outer.speculate();
//!     inner.clear(Position::new(0));
//!     assert!(!inner.is_line_complete(&topo, Position::new(2)));
//! }
//!
//! assert_eq!(board, before);
//! ```

use smallvec::SmallVec;
use std::ops::Deref;

use crate::core::{Marker, Position};

use super::board::Board;

/// Guard over a speculatively edited board.
///
/// Derefs to `Board` for reads; writes only go through the guard's own
/// methods so that every one of them is logged.
pub struct Speculation<'a> {
    board: &'a mut Board,
    /// (position, previous cell) in write order.
    undo: SmallVec<[(Position, Option<Marker>); 4]>,
}

impl<'a> Speculation<'a> {
    pub(super) fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            undo: SmallVec::new(),
        }
    }

    /// Set a cell for the lifetime of this guard.
    pub fn set(&mut self, position: Position, cell: Option<Marker>) {
        let previous = self.board.write_cell(position, cell);
        self.undo.push((position, previous));
    }

    /// Put `marker` on `position`.
    pub fn occupy(&mut self, position: Position, marker: Marker) {
        self.set(position, Some(marker));
    }

    /// Empty `position`.
    pub fn clear(&mut self, position: Position) {
        self.set(position, None);
    }

    /// Occupy `to` with `marker`, then vacate `from`.
    pub fn relocate(&mut self, from: Position, to: Position, marker: Marker) {
        self.occupy(to, marker);
        self.clear(from);
    }

    /// Open a nested speculation on top of this one.
    pub fn speculate(&mut self) -> Speculation<'_> {
        Speculation::new(self.board)
    }

    /// Number of writes that will be undone on drop.
    #[must_use]
    pub fn pending_writes(&self) -> usize {
        self.undo.len()
    }
}

impl Deref for Speculation<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl Drop for Speculation<'_> {
    fn drop(&mut self) {
        while let Some((position, previous)) = self.undo.pop() {
            self.board.write_cell(position, previous);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: u8) -> Position {
        Position::new(i)
    }

    #[test]
    fn test_restores_on_drop() {
        let mut board = Board::with_pieces(24, &[(4, Marker::Second)]);
        let before = board.clone();

        {
            let mut spec = board.speculate();
            spec.occupy(p(0), Marker::First);
            spec.clear(p(4));
            assert_eq!(spec.get(p(0)), Some(Marker::First));
            assert_eq!(spec.get(p(4)), None);
            assert_eq!(spec.pending_writes(), 2);
        }

        assert_eq!(board, before);
    }

    #[test]
    fn test_repeated_writes_restore_original() {
        let mut board = Board::new(24);

        {
            let mut spec = board.speculate();
            spec.occupy(p(3), Marker::First);
            spec.occupy(p(3), Marker::Second);
            spec.clear(p(3));
            spec.occupy(p(3), Marker::First);
        }

        assert_eq!(board.get(p(3)), None);
    }

    #[test]
    fn test_nested_inner_restored_first() {
        let mut board = Board::new(24);

        {
            let mut outer = board.speculate();
            outer.occupy(p(1), Marker::First);
            {
                let mut inner = outer.speculate();
                inner.clear(p(1));
                inner.occupy(p(2), Marker::First);
                assert!(inner.is_empty(p(1)));
            }
            assert_eq!(outer.get(p(1)), Some(Marker::First));
            assert!(outer.is_empty(p(2)));
        }

        assert_eq!(board, Board::new(24));
    }

    fn first_mill_slot(board: &mut Board, topo: &crate::board::Topology) -> Option<Position> {
        for slot in [p(2), p(5)] {
            let mut spec = board.speculate();
            spec.occupy(slot, Marker::First);
            if spec.is_line_complete(topo, slot) {
                return Some(slot);
            }
        }
        None
    }

    #[test]
    fn test_early_return_restores() {
        let topo = crate::board::Topology::standard();
        let mut board = Board::with_pieces(24, &[(0, Marker::First), (1, Marker::First)]);
        let before = board.clone();

        assert_eq!(first_mill_slot(&mut board, &topo), Some(p(2)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_unwinding_restores() {
        let mut board = Board::with_pieces(24, &[(7, Marker::Second)]);
        let before = board.clone();

        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut spec = board.speculate();
            spec.clear(p(7));
            panic!("evaluation failed");
        }));

        assert!(result.is_err());
        assert_eq!(board, before);
    }
}
