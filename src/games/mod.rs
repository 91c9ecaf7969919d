//! Game implementations built on the engine.
//!
//! - `morris`: the reference rule engine that drives two `Player`s through a
//!   complete game

pub mod morris;
