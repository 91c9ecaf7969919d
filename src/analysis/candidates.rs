//! Candidate movers, defenders and capture targets.

use smallvec::SmallVec;

use crate::core::Position;

use super::BoardView;

/// Adjacent own pieces of a position, in discovery order.
pub type Neighbors = SmallVec<[Position; 4]>;

impl BoardView<'_> {
    /// The last own piece adjacent to `position`, in edge order.
    #[must_use]
    pub fn adjacent_own_piece(&self, position: Position) -> Option<Position> {
        self.topology
            .neighbors(position)
            .filter(|&n| self.is_own(self.board.get(n)))
            .last()
    }

    /// Every own piece adjacent to `position`, without duplicates.
    #[must_use]
    pub fn all_adjacent_own_pieces(&self, position: Position) -> Neighbors {
        let mut found = Neighbors::new();
        for n in self.topology.neighbors(position) {
            if self.is_own(self.board.get(n)) && !found.contains(&n) {
                found.push(n);
            }
        }
        found
    }

    /// Empty positions paired with an adjacent own piece that could step in.
    pub fn empty_positions_with_adjacent_own_piece(
        &self,
    ) -> impl Iterator<Item = (Position, Position)> + '_ {
        self.board
            .empty_positions()
            .filter_map(|empty| self.adjacent_own_piece(empty).map(|piece| (empty, piece)))
    }

    /// Empty positions with every adjacent own piece that could step in.
    ///
    /// Positions no own piece can reach are left out.
    #[must_use]
    pub fn all_empty_positions_with_adjacent_own_pieces(&self) -> Vec<(Position, Neighbors)> {
        self.board
            .empty_positions()
            .map(|empty| (empty, self.all_adjacent_own_pieces(empty)))
            .filter(|(_, pieces)| !pieces.is_empty())
            .collect()
    }

    /// How much an own piece on an intersection holds back the opponent:
    /// the opposing pieces on every line through it.
    ///
    /// `None` for positions that are not intersections or not own pieces.
    #[must_use]
    pub fn defensive_value(&self, position: Position) -> Option<u32> {
        if !self.is_own(self.board.get(position)) || !self.topology.is_intersection(position) {
            return None;
        }

        let total = self
            .topology
            .lines_through(position)
            .iter()
            .flat_map(|&line| self.topology.line(line))
            .filter(|&&p| self.is_opposing(self.board.get(p)))
            .count();
        Some(total as u32)
    }

    /// `(position, defensive value)` for every own piece on an intersection.
    pub fn defensive_pieces(&self) -> impl Iterator<Item = (Position, u32)> + '_ {
        self.board
            .pieces(self.marker)
            .filter_map(|p| self.defensive_value(p).map(|value| (p, value)))
    }

    /// The last own piece outside the given line.
    #[must_use]
    pub fn any_own_piece_off_line(&self, line: usize) -> Option<Position> {
        let positions = self.topology.line(line);
        self.board
            .pieces(self.marker)
            .filter(|p| !positions.contains(p))
            .last()
    }

    /// Pick the opposing piece to capture.
    ///
    /// Preference order:
    /// 1. the last unprotected piece on the danger line
    /// 2. the last unprotected piece anywhere
    /// 3. the last opposing piece anywhere, when all of them sit in mills
    #[must_use]
    pub fn vulnerable_enemy_piece(&self) -> Option<Position> {
        let unprotected = |p: &Position| {
            self.is_opposing(self.board.get(*p)) && !self.board.is_line_complete(self.topology, *p)
        };

        let on_danger_line = self.dangerous_enemy_line().and_then(|line| {
            self.topology.line(line).iter().copied().filter(unprotected).last()
        });

        on_danger_line
            .or_else(|| self.topology.positions().filter(unprotected).last())
            .or_else(|| self.board.pieces(self.marker.opponent()).last())
    }
}
