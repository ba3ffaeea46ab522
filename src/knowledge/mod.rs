//! Knowledge base and inference.
//!
//! - `Constraint`: "exactly N of these cells are hazards"
//! - `KnowledgeEngine`: owns constraints and settled cells, runs subset
//!   resolution to a fixpoint after every observation
//! - `MoveSelector`: picks among candidate moves the engine offers

pub mod constraint;
pub mod engine;
mod inference;
pub mod selector;
pub mod stats;

pub use constraint::Constraint;
pub use engine::{Fact, KnowledgeEngine};
pub use selector::{FirstCell, MoveSelector, RandomCell};
pub use stats::InferenceStats;
