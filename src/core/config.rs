//! Board and game configuration.
//!
//! The board size drives topology generation; the remaining fields are the
//! rule engine's piece-count constants.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Positions per square ring.
pub const RING_SIZE: usize = 8;

/// Largest supported board: positions must fit in a `u8`.
pub const MAX_BOARD_SIZE: usize = 248;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Number of positions (a multiple of 8, one ring per 8).
    pub size: usize,

    /// Pieces each player starts with in stock.
    pub stock_pieces: u8,

    /// A player whose stock is empty flies once it has this many pieces
    /// left on the board.
    pub flying_threshold: u8,

    /// Maximum number of turns before the game is drawn (0 = unlimited).
    pub turn_limit: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            size: 24,
            stock_pieces: 12,
            flying_threshold: 3,
            turn_limit: 0,
        }
    }
}

impl BoardConfig {
    /// The standard twelve men's morris board.
    #[must_use]
    pub fn standard() -> Self {
        Self::default()
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the per-player stock.
    #[must_use]
    pub fn with_stock_pieces(mut self, stock: u8) -> Self {
        self.stock_pieces = stock;
        self
    }

    /// Set the flying threshold.
    #[must_use]
    pub fn with_flying_threshold(mut self, threshold: u8) -> Self {
        self.flying_threshold = threshold;
        self
    }

    /// Set the turn limit.
    #[must_use]
    pub fn with_turn_limit(mut self, limit: u32) -> Self {
        self.turn_limit = limit;
        self
    }

    /// Number of square rings.
    #[must_use]
    pub fn rings(&self) -> usize {
        self.size / RING_SIZE
    }

    /// Check that the configuration describes a playable board.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_size(self.size)?;

        if 2 * self.stock_pieces as usize > self.size {
            return Err(ConfigError::StockTooLarge {
                stock: self.stock_pieces,
                size: self.size,
            });
        }

        if self.flying_threshold >= self.stock_pieces {
            return Err(ConfigError::FlyingThreshold {
                threshold: self.flying_threshold,
                stock: self.stock_pieces,
            });
        }

        Ok(())
    }
}

/// Check that `size` is a positive multiple of the ring size within bounds.
pub fn validate_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 || size % RING_SIZE != 0 || size > MAX_BOARD_SIZE {
        return Err(ConfigError::InvalidBoardSize(size));
    }
    Ok(())
}
