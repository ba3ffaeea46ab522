//! Core types: cells, grid geometry, RNG, configuration.
//!
//! These are the building blocks shared by the knowledge engine, the board
//! simulator and the game session.

pub mod cell;
pub mod grid;
pub mod rng;
pub mod config;

pub use cell::Cell;
pub use grid::{GridDims, Neighbors};
pub use rng::SweepRng;
pub use config::{GameConfig, MoveOrder};
