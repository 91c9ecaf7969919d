//! Player markers and per-player data.
//!
//! ## Marker
//!
//! The two-valued identifier stamped on every piece. Markers compare for
//! equality only; there is no ordering between players.
//!
//! ## MarkerMap
//!
//! Fixed two-slot storage indexed by `Marker`.
//!
//! ## PlayerState
//!
//! What a player knows about itself when asked to decide: its marker, its
//! phase and how many pieces it still holds in stock.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::phase::Phase;

/// Identifies which player owns a piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marker {
    /// The player who places first.
    First,
    /// The player who places second.
    Second,
}

impl Marker {
    /// Both markers, in turn order.
    pub const ALL: [Marker; 2] = [Marker::First, Marker::Second];

    /// Get the other player's marker.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Marker::First => Marker::Second,
            Marker::Second => Marker::First,
        }
    }

    const fn slot(self) -> usize {
        match self {
            Marker::First => 0,
            Marker::Second => 1,
        }
    }
}

impl std::fmt::Display for Marker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Marker::First => write!(f, "first player"),
            Marker::Second => write!(f, "second player"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use rust_morris::core::{Marker, MarkerMap};
///
/// let mut stock: MarkerMap<u8> = MarkerMap::with_value(12);
/// stock[Marker::Second] -= 1;
///
/// assert_eq!(stock[Marker::First], 12);
/// assert_eq!(stock[Marker::Second], 11);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MarkerMap<T> {
    data: [T; 2],
}

impl<T> MarkerMap<T> {
    /// Create a new MarkerMap with values from a factory function.
    pub fn new(factory: impl Fn(Marker) -> T) -> Self {
        Self {
            data: [factory(Marker::First), factory(Marker::Second)],
        }
    }

    /// Create a new MarkerMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Iterate over (Marker, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Marker, &T)> {
        Marker::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Marker> for MarkerMap<T> {
    type Output = T;

    fn index(&self, marker: Marker) -> &Self::Output {
        &self.data[marker.slot()]
    }
}

impl<T> IndexMut<Marker> for MarkerMap<T> {
    fn index_mut(&mut self, marker: Marker) -> &mut Self::Output {
        &mut self.data[marker.slot()]
    }
}

/// A player's own view of its situation, handed to `Player` on every turn.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerState {
    /// This player's marker.
    pub marker: Marker,

    /// Current phase, owned by the rule engine.
    pub phase: Phase,

    /// Pieces not yet placed.
    pub stock_pieces: u8,

    /// Stock at the start of the game.
    pub initial_stock: u8,
}

impl PlayerState {
    /// Create the state of a player who has not placed anything yet.
    #[must_use]
    pub fn new(marker: Marker, initial_stock: u8) -> Self {
        Self {
            marker,
            phase: Phase::Placing,
            stock_pieces: initial_stock,
            initial_stock,
        }
    }

    /// Set the phase.
    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.phase = phase;
        self
    }

    /// Set the remaining stock.
    #[must_use]
    pub fn with_stock(mut self, stock_pieces: u8) -> Self {
        self.stock_pieces = stock_pieces;
        self
    }

    /// True until this player has placed its first piece.
    #[must_use]
    pub fn is_first_round(&self) -> bool {
        self.stock_pieces == self.initial_stock
    }
}
