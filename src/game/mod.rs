//! Game loop: drives a knowledge engine against a board.
//!
//! ## Overview
//!
//! - **GameSession**: one game, stepped move by move or played to the end
//! - **GameReport**: moves, outcome and engine statistics of a finished game
//! - **run_batch**: many games with forked seeds, aggregated into a
//!   `BatchSummary`
//!
//! ## Usage
//!
//! ```
//! use minefield_kb::core::GameConfig;
//! use minefield_kb::game::GameSession;
//!
//! let config = GameConfig::new(8, 8, 10).with_seed(7);
//! let report = GameSession::new(config).unwrap().play().unwrap();
//!
//! assert!(report.move_count() > 0);
//! ```

pub mod batch;
pub mod report;
pub mod session;

pub use batch::{run_batch, BatchSummary};
pub use report::{GameOutcome, GameReport, MoveKind, MoveRecord};
pub use session::GameSession;
