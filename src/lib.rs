//! Retirement Planner - Deterministic retirement funding projections
//!
//! This library provides:
//! - Household profile collection (interactive interview or cohort CSV)
//! - A year-by-year cash-flow projection engine with compound inflation
//! - Configurable post-loop aggregation (reserve or net-asset adjustment)
//! - Tiered adequacy classification and chart/report rendering
//! - A scenario framework for batch and multi-config runs

pub mod assumptions;
pub mod profile;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{Assumptions, LifeExpectancy};
pub use profile::{Profile, ProfileError};
pub use projection::{
    PostLoopAdjustment, ProjectionConfig, ProjectionEngine, ProjectionResult, YearRecord,
};
pub use report::{Verdict, VerdictThresholds};
pub use scenario::ScenarioRunner;
