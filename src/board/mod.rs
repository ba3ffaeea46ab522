//! Board simulator.
//!
//! The board holds ground truth: hazard placement, neighbor counts and
//! flags. The knowledge engine never reads it directly; the game session
//! relays observations between the two.

pub mod minefield;

pub use minefield::Minefield;
