//! The board: static topology, live cells, and scoped speculation.
//!
//! ## Topology
//!
//! Generated once from the board size: the mill lines, the adjacency graph
//! and the intersection points. Never mutated afterwards.
//!
//! ## Board
//!
//! One cell per position, each empty or holding a `Marker`.
//!
//! ## Speculation
//!
//! A guard that owns the board's mutable borrow while a hypothetical move is
//! evaluated, and puts every touched cell back when dropped.

pub mod topology;
mod board;
pub mod speculation;

pub use board::Board;
pub use speculation::Speculation;
pub use topology::{Line, Topology};
