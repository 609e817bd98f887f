//! Tiered adequacy classification of a projection result

use serde::{Deserialize, Serialize};

use crate::projection::{PostLoopAdjustment, ProjectionResult};

/// Thresholds for the qualitative tiers
#[derive(Debug, Clone, Copy)]
pub struct VerdictThresholds {
    /// Remaining deficit below this still counts as only marginally funded
    pub marginal_limit: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            marginal_limit: 200_000_000.0,
        }
    }
}

/// Qualitative funding verdict.
///
/// Reserve-style aggregations use the three-tier ladder (Surplus, Marginal,
/// Shortfall); the net-assets aggregation distinguishes how the balance sheet
/// interacts with the yearly cash flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// Income and adjustments cover the whole horizon
    Surplus,
    /// Funded, but with little headroom for medical shocks or inflation
    Marginal,
    /// Projected funds fall short of the total need
    Shortfall,
    /// Yearly deficits occur but net assets absorb them
    AssetsCoverDeficit,
    /// Income covers spending in aggregate, but debt leaves a residual gap
    DebtOverhang,
    /// Neither income nor net assets cover the projected need
    Underfunded,
}

impl Verdict {
    /// Human-readable guidance for the verdict
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Surplus => {
                "Projected funds are sufficient for the full retirement horizon."
            }
            Verdict::Marginal => {
                "Funds are marginally sufficient; watch unplanned medical costs and inflation."
            }
            Verdict::Shortfall => {
                "Projected funds fall short; consider trimming expense categories or raising the reserve."
            }
            Verdict::AssetsCoverDeficit => {
                "Pension income runs short in some years, but net assets absorb the gap."
            }
            Verdict::DebtOverhang => {
                "Income covers spending, but outstanding debt leaves a residual funding gap."
            }
            Verdict::Underfunded => {
                "Income and net assets together do not cover the projected need; a plan change is required."
            }
        }
    }
}

/// Classify a projection result under the configured aggregation policy
pub fn classify(result: &ProjectionResult, thresholds: &VerdictThresholds) -> Verdict {
    match result.adjustment {
        PostLoopAdjustment::None | PostLoopAdjustment::AddReserve => {
            if result.remaining_deficit <= 0.0 {
                Verdict::Surplus
            } else if result.remaining_deficit < thresholds.marginal_limit {
                Verdict::Marginal
            } else {
                Verdict::Shortfall
            }
        }
        PostLoopAdjustment::SubtractNetAssets => {
            if result.remaining_deficit <= 0.0 {
                if result.deficit_year_count == 0 {
                    Verdict::Surplus
                } else {
                    Verdict::AssetsCoverDeficit
                }
            } else if result.total_shortfall <= 0.0 {
                // Aggregate income covered spending, so the gap is debt-driven
                Verdict::DebtOverhang
            } else {
                Verdict::Underfunded
            }
        }
    }
}
