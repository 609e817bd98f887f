//! Projection input contract and per-year output structures

use serde::{Deserialize, Serialize};

use super::engine::PostLoopAdjustment;
use crate::assumptions::Assumptions;
use crate::profile::Profile;

/// Validated inputs the projection engine consumes.
///
/// Built from a [`Profile`] plus assumptions, or assembled directly. All range
/// validation happens at the input-collection boundary; the engine treats
/// these figures as already checked.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Annual expense at today's prices (positive)
    pub annual_expense_base: f64,

    /// Fixed nominal annual pension income (non-negative)
    pub annual_income: f64,

    /// Annual inflation rate as a fraction
    pub inflation_rate: f64,

    /// Years from retirement to the planning age
    pub horizon_years: u32,

    /// Lump-sum reserve added to the total need under `AddReserve`
    pub reserve_fund: f64,

    /// Assets net of debt, subtracted under `SubtractNetAssets`; may be negative
    pub starting_net_assets: f64,

    /// Age at retirement, used only to label projected years with an age
    pub retirement_age: u8,
}

impl ProjectionInput {
    /// Derive the engine contract from a household profile
    pub fn from_profile(profile: &Profile, assumptions: &Assumptions) -> Self {
        Self {
            annual_expense_base: profile.annual_expense(),
            annual_income: profile.annual_income(),
            inflation_rate: profile.inflation_rate,
            horizon_years: profile.horizon_years(&assumptions.life),
            reserve_fund: profile.reserve_fund,
            starting_net_assets: profile.net_assets(),
            retirement_age: profile.retirement_age,
        }
    }
}

/// One projected year of retirement cash flow.
///
/// Records are appended in ascending `year_index` order and never mutated
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRecord {
    /// Year of retirement, 1-indexed
    pub year_index: u32,

    /// Age during this year
    pub attained_age: u8,

    /// Inflated annual expense
    pub expense: f64,

    /// Nominal annual income
    pub income: f64,

    /// income - expense; negative means a deficit year
    pub balance: f64,
}

/// Complete projection output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Per-year records, ordered by year_index
    pub years: Vec<YearRecord>,

    /// Accumulated sum of (expense - income) across the horizon. Signed:
    /// surplus years offset deficit years.
    pub total_shortfall: f64,

    /// Aggregate need after the configured post-loop adjustment. Equals
    /// `total_shortfall` when the adjustment is `None`.
    pub remaining_deficit: f64,

    /// Which post-loop adjustment produced `remaining_deficit`
    pub adjustment: PostLoopAdjustment,

    /// Number of years whose balance was negative
    pub deficit_year_count: u32,
}

impl ProjectionResult {
    pub fn new(adjustment: PostLoopAdjustment, horizon_years: u32) -> Self {
        Self {
            years: Vec::with_capacity(horizon_years as usize),
            total_shortfall: 0.0,
            remaining_deficit: 0.0,
            adjustment,
            deficit_year_count: 0,
        }
    }

    /// Append a projected year
    pub fn add_year(&mut self, record: YearRecord) {
        self.years.push(record);
    }

    /// Aggregate statistics for reporting
    pub fn summary(&self) -> ProjectionSummary {
        let total_expense: f64 = self.years.iter().map(|y| y.expense).sum();
        let total_income: f64 = self.years.iter().map(|y| y.income).sum();
        let peak_annual_deficit = self
            .years
            .iter()
            .map(|y| -y.balance)
            .fold(0.0_f64, f64::max);
        let final_year_expense = self.years.last().map(|y| y.expense).unwrap_or(0.0);

        ProjectionSummary {
            horizon_years: self.years.len() as u32,
            total_expense,
            total_income,
            total_shortfall: self.total_shortfall,
            remaining_deficit: self.remaining_deficit,
            deficit_year_count: self.deficit_year_count,
            peak_annual_deficit,
            final_year_expense,
        }
    }
}

/// Summary statistics for a projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub horizon_years: u32,
    pub total_expense: f64,
    pub total_income: f64,
    pub total_shortfall: f64,
    pub remaining_deficit: f64,
    pub deficit_year_count: u32,
    /// Largest single-year deficit (zero when no year ran negative)
    pub peak_annual_deficit: f64,
    pub final_year_expense: f64,
}
