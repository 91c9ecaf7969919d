//! Line weights and threats.

use serde::{Deserialize, Serialize};

use crate::board::Line;
use crate::core::Position;

use super::BoardView;

/// An uncontested line and how many of the viewer's pieces sit on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedLine {
    /// Index into `Topology::lines`.
    pub line: usize,
    /// Own pieces on the line, 1 or 2.
    pub weight: u8,
}

impl BoardView<'_> {
    /// Weigh every line free of opposing pieces.
    ///
    /// Lines with no own piece, and full lines (already a mill), are left out.
    /// Output follows line order.
    #[must_use]
    pub fn line_weights(&self) -> Vec<WeightedLine> {
        self.topology
            .lines()
            .iter()
            .enumerate()
            .filter_map(|(line, positions)| {
                let mut weight = 0u8;
                for &p in positions {
                    let cell = self.board.get(p);
                    if self.is_own(cell) {
                        weight += 1;
                    } else if cell.is_some() {
                        return None;
                    }
                }
                (1..=2).contains(&weight).then_some(WeightedLine { line, weight })
            })
            .collect()
    }

    /// The first line holding two opposing pieces and an empty slot.
    #[must_use]
    pub fn dangerous_enemy_line(&self) -> Option<usize> {
        self.topology
            .lines()
            .iter()
            .enumerate()
            .find(|(index, positions)| {
                let opposing = positions
                    .iter()
                    .filter(|&&p| self.is_opposing(self.board.get(p)))
                    .count();
                opposing == 2 && self.empty_position_of(*index).is_some()
            })
            .map(|(index, _)| index)
    }

    /// The empty slot of a line; the last one when several are empty.
    #[must_use]
    pub fn empty_position_of(&self, line: usize) -> Option<Position> {
        self.topology
            .line(line)
            .iter()
            .rev()
            .copied()
            .find(|&p| self.board.is_empty(p))
    }

    /// A line with all three positions empty; the last one when several are.
    #[must_use]
    pub fn fully_empty_line(&self) -> Option<Line> {
        self.topology
            .lines()
            .iter()
            .rev()
            .find(|line| line.iter().all(|&p| self.board.is_empty(p)))
            .copied()
    }
}
