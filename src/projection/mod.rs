//! Year-by-year retirement cash-flow projection

mod engine;
mod records;
mod state;

pub use engine::{PostLoopAdjustment, ProjectionConfig, ProjectionEngine};
pub use records::{ProjectionInput, ProjectionResult, ProjectionSummary, YearRecord};
pub use state::ProjectionState;
