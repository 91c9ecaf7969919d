//! Board topology generated from the board size.
//!
//! Positions are laid out as concentric square rings of eight points,
//! numbered clockwise from each ring's top-left corner:
//!
//! ```text
//!  0 ----------- 1 ----------- 2
//!  |  8 -------- 9 ------- 10  |
//!  |  | 16 ---- 17 ---- 18 |   |
//!  7 15 23              19 11  3
//!  |  | 22 ---- 21 ---- 20 |   |
//!  | 14 -------- 13 ------ 12  |
//!  6 ----------- 5 ----------- 4
//! ```
//!
//! Corners are also joined diagonally to the corners of the next ring, and
//! every corner/midpoint triple across three consecutive rings is a mill.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::core::config::{validate_size, RING_SIZE};
use crate::core::{ConfigError, Position};

/// Three positions that form a mill when one player holds all of them.
pub type Line = [Position; 3];

/// Static board structure: lines, adjacency graph, intersections.
#[derive(Clone, Debug)]
pub struct Topology {
    size: usize,
    lines: Vec<Line>,
    graph: Vec<(Position, Position)>,
    intersections: Vec<Position>,
    /// Line indices through each position.
    lines_through: Vec<SmallVec<[usize; 4]>>,
    /// Normalized (low, high) edges for adjacency lookups.
    edges: FxHashSet<(Position, Position)>,
}

impl Topology {
    /// Generate the topology for a board of `size` positions.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        validate_size(size)?;

        let rings = size / RING_SIZE;
        let at = |ring: usize, k: usize| Position((ring * RING_SIZE + k % RING_SIZE) as u8);

        let mut lines = Vec::new();
        for ring in 0..rings {
            for side in 0..4 {
                let corner = side * 2;
                lines.push([at(ring, corner), at(ring, corner + 1), at(ring, corner + 2)]);
            }
        }
        for ring in 0..rings.saturating_sub(2) {
            for k in 0..RING_SIZE {
                lines.push([at(ring, k), at(ring + 1, k), at(ring + 2, k)]);
            }
        }

        let mut graph = Vec::new();
        for ring in 0..rings {
            for k in 0..RING_SIZE {
                graph.push((at(ring, k), at(ring, k + 1)));
            }
        }
        for ring in 0..rings.saturating_sub(1) {
            for k in 0..RING_SIZE {
                graph.push((at(ring, k), at(ring + 1, k)));
            }
        }

        let mut lines_through = vec![SmallVec::new(); size];
        for (index, line) in lines.iter().enumerate() {
            for position in line {
                lines_through[position.index()].push(index);
            }
        }

        let intersections = Position::all(size)
            .filter(|p| lines_through[p.index()].len() > 2)
            .collect();

        let edges = graph.iter().map(|&(a, b)| (a.min(b), a.max(b))).collect();

        Ok(Self {
            size,
            lines,
            graph,
            intersections,
            lines_through,
            edges,
        })
    }

    /// The standard 24-position board.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(24).unwrap_or_else(|_| unreachable!("24 is a valid board size"))
    }

    /// Number of positions.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate over all positions.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        Position::all(self.size)
    }

    /// Check whether a position exists on this board.
    #[must_use]
    pub fn contains(&self, position: Position) -> bool {
        position.index() < self.size
    }

    /// All mill lines, in iteration order.
    #[must_use]
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Get a line by index.
    #[must_use]
    pub fn line(&self, index: usize) -> &Line {
        &self.lines[index]
    }

    /// Indices of the lines containing `position`.
    #[must_use]
    pub fn lines_through(&self, position: Position) -> &[usize] {
        &self.lines_through[position.index()]
    }

    /// Single-step adjacency edges, in iteration order.
    #[must_use]
    pub fn graph(&self) -> &[(Position, Position)] {
        &self.graph
    }

    /// Positions adjacent to `position`, in edge iteration order.
    pub fn neighbors(&self, position: Position) -> impl Iterator<Item = Position> + '_ {
        self.graph.iter().filter_map(move |&(a, b)| {
            if a == position {
                Some(b)
            } else if b == position {
                Some(a)
            } else {
                None
            }
        })
    }

    /// Check whether `a` and `b` share an edge.
    #[must_use]
    pub fn are_adjacent(&self, a: Position, b: Position) -> bool {
        self.edges.contains(&(a.min(b), a.max(b)))
    }

    /// Positions on more than two lines.
    #[must_use]
    pub fn intersections(&self) -> &[Position] {
        &self.intersections
    }

    /// Check whether `position` is an intersection.
    #[must_use]
    pub fn is_intersection(&self, position: Position) -> bool {
        self.lines_through(position).len() > 2
    }
}
