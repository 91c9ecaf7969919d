//! Board position identifiers.

use serde::{Deserialize, Serialize};

/// A point on the board, in `0..size`.
///
/// Positions are numbered ring by ring from the outside in, eight per ring,
/// clockwise from each ring's top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position(pub u8);

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Get the raw index, usable for slice access.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every position of a board with `size` positions.
    ///
    /// ```
    /// use rust_morris::core::Position;
    ///
    /// let all: Vec<_> = Position::all(24).collect();
    /// assert_eq!(all.len(), 24);
    /// assert_eq!(all[23], Position::new(23));
    /// ```
    pub fn all(size: usize) -> impl Iterator<Item = Position> {
        (0..size).map(|i| Position(i as u8))
    }
}

impl From<u8> for Position {
    fn from(index: u8) -> Self {
        Self(index)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}
