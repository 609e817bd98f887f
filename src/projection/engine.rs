//! Core projection engine for the year-by-year retirement cash-flow loop

use serde::{Deserialize, Serialize};

use super::records::{ProjectionInput, ProjectionResult, YearRecord};
use super::state::ProjectionState;
use crate::assumptions::Assumptions;
use crate::profile::Profile;

/// One-time adjustment applied to the accumulated shortfall after the loop.
///
/// The two known planning variants either add a fixed reserve to the total
/// need or net starting assets against it; this is the closed configuration
/// set replacing those divergent paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PostLoopAdjustment {
    /// Report the accumulated shortfall as-is
    None,
    /// Add the lump-sum reserve fund to the total need
    AddReserve,
    /// Net starting assets (assets - debt) against the total need
    SubtractNetAssets,
}

impl PostLoopAdjustment {
    /// Apply this adjustment to the accumulated shortfall
    pub fn apply(&self, total_shortfall: f64, input: &ProjectionInput) -> f64 {
        match self {
            PostLoopAdjustment::None => total_shortfall,
            PostLoopAdjustment::AddReserve => total_shortfall + input.reserve_fund,
            PostLoopAdjustment::SubtractNetAssets => {
                total_shortfall - input.starting_net_assets
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PostLoopAdjustment::None => "none",
            PostLoopAdjustment::AddReserve => "add reserve",
            PostLoopAdjustment::SubtractNetAssets => "subtract net assets",
        }
    }
}

/// Configuration for a projection run
#[derive(Debug, Clone)]
pub struct ProjectionConfig {
    /// Post-loop aggregation policy
    pub adjustment: PostLoopAdjustment,

    /// Project a shorter (or longer) horizon than the profile implies.
    /// Applies to `project_profile` only; direct inputs are taken as given.
    pub horizon_override: Option<u32>,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            adjustment: PostLoopAdjustment::AddReserve,
            horizon_override: None,
        }
    }
}

/// Main projection engine.
///
/// A deterministic function of its inputs: no I/O, no hidden state. Calling
/// it twice with identical inputs yields bit-identical output.
pub struct ProjectionEngine {
    assumptions: Assumptions,
    config: ProjectionConfig,
}

impl ProjectionEngine {
    /// Create a new projection engine with given assumptions and config
    pub fn new(assumptions: Assumptions, config: ProjectionConfig) -> Self {
        Self {
            assumptions,
            config,
        }
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Run the year-by-year projection over validated inputs.
    ///
    /// For each year i in 1..=horizon: expense is the base inflated i times
    /// compound, income is held at its fixed nominal level, and the signed
    /// difference accumulates into the total shortfall. A zero horizon yields
    /// an empty sequence with only the post-loop adjustment applied.
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        let mut result = ProjectionResult::new(self.config.adjustment, input.horizon_years);
        let mut state = ProjectionState::from_input(input);

        for _year in 1..=input.horizon_years {
            state.advance_year(input);
            let record = self.calculate_year(input, &state);
            state.accumulate(record.expense, record.income);
            result.add_year(record);
        }

        result.total_shortfall = state.cumulative_shortfall;
        result.deficit_year_count = state.deficit_years;
        result.remaining_deficit = self
            .config
            .adjustment
            .apply(state.cumulative_shortfall, input);

        result
    }

    /// Project a household profile, deriving the engine inputs from it
    pub fn project_profile(&self, profile: &Profile) -> ProjectionResult {
        let mut input = ProjectionInput::from_profile(profile, &self.assumptions);
        if let Some(horizon) = self.config.horizon_override {
            input.horizon_years = horizon;
        }
        self.project(&input)
    }

    /// Cash flows for a single projected year
    fn calculate_year(&self, input: &ProjectionInput, state: &ProjectionState) -> YearRecord {
        let expense = input.annual_expense_base * state.inflation_factor;
        let income = input.annual_income;

        YearRecord {
            year_index: state.year_index,
            attained_age: state.attained_age,
            expense,
            income,
            balance: income - expense,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::profile::{Gender, IncomeBracket, MonthlyExpenses, PensionInput};

    fn engine(adjustment: PostLoopAdjustment) -> ProjectionEngine {
        ProjectionEngine::new(
            Assumptions::default_planning(),
            ProjectionConfig {
                adjustment,
                horizon_override: None,
            },
        )
    }

    fn reference_input() -> ProjectionInput {
        // Concrete scenario: 2M base expense, 1.2M pension, 2.4% inflation, 20 years
        ProjectionInput {
            annual_expense_base: 2_000_000.0,
            annual_income: 1_200_000.0,
            inflation_rate: 0.024,
            horizon_years: 20,
            reserve_fund: 30_000_000.0,
            starting_net_assets: 10_000_000.0,
            retirement_age: 65,
        }
    }

    #[test]
    fn test_horizon_length_and_ordering() {
        let result = engine(PostLoopAdjustment::None).project(&reference_input());

        assert_eq!(result.years.len(), 20);
        for (i, year) in result.years.iter().enumerate() {
            assert_eq!(year.year_index, i as u32 + 1);
            assert_eq!(year.attained_age, 65 + i as u8 + 1);
        }
    }

    #[test]
    fn test_first_year_carries_one_year_of_inflation() {
        let result = engine(PostLoopAdjustment::None).project(&reference_input());

        let first = &result.years[0];
        assert_relative_eq!(first.expense, 2_048_000.0, max_relative = 1e-12);
        assert_relative_eq!(first.income, 1_200_000.0);
        assert_relative_eq!(first.balance, -848_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_compound_inflation_exponent() {
        let input = reference_input();
        let result = engine(PostLoopAdjustment::None).project(&input);

        for year in &result.years {
            let expected =
                input.annual_expense_base * (1.0 + input.inflation_rate).powi(year.year_index as i32);
            assert_relative_eq!(year.expense, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn test_zero_inflation_constant_expense() {
        let mut input = reference_input();
        input.inflation_rate = 0.0;
        let result = engine(PostLoopAdjustment::None).project(&input);

        for year in &result.years {
            assert_relative_eq!(year.expense, 2_000_000.0);
        }
    }

    #[test]
    fn test_deficit_scenario_positive_shortfall() {
        let result = engine(PostLoopAdjustment::None).project(&reference_input());

        assert!(result.total_shortfall > 0.0);
        assert_eq!(result.deficit_year_count, 20);
        assert_relative_eq!(result.remaining_deficit, result.total_shortfall);
    }

    #[test]
    fn test_ample_income_yields_surplus() {
        let mut input = reference_input();
        // Income above the final-year inflated expense covers every year
        input.annual_income = input.annual_expense_base * (1.024_f64).powi(20) + 1.0;
        let result = engine(PostLoopAdjustment::None).project(&input);

        assert!(result.total_shortfall <= 0.0);
        assert_eq!(result.deficit_year_count, 0);
    }

    #[test]
    fn test_deficit_year_count_matches_negative_balances() {
        let mut input = reference_input();
        // Income between year-10 and year-11 expense: first 10 years surplus
        input.annual_income = input.annual_expense_base * (1.024_f64).powi(10) + 1.0;
        let result = engine(PostLoopAdjustment::None).project(&input);

        let negatives = result.years.iter().filter(|y| y.balance < 0.0).count() as u32;
        assert_eq!(result.deficit_year_count, negatives);
        assert_eq!(negatives, 10);
    }

    #[test]
    fn test_add_reserve_adjustment() {
        let input = reference_input();
        let plain = engine(PostLoopAdjustment::None).project(&input);
        let reserved = engine(PostLoopAdjustment::AddReserve).project(&input);

        assert_relative_eq!(
            reserved.remaining_deficit,
            plain.total_shortfall + 30_000_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(reserved.total_shortfall, plain.total_shortfall);
    }

    #[test]
    fn test_subtract_net_assets_adjustment() {
        let input = reference_input();
        let result = engine(PostLoopAdjustment::SubtractNetAssets).project(&input);

        assert_relative_eq!(
            result.remaining_deficit,
            result.total_shortfall - 10_000_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_horizon() {
        let mut input = reference_input();
        input.horizon_years = 0;

        let plain = engine(PostLoopAdjustment::None).project(&input);
        assert!(plain.years.is_empty());
        assert_relative_eq!(plain.total_shortfall, 0.0);
        assert_relative_eq!(plain.remaining_deficit, 0.0);
        assert_eq!(plain.deficit_year_count, 0);

        // The adjustment stays active on an empty projection
        let netted = engine(PostLoopAdjustment::SubtractNetAssets).project(&input);
        assert_relative_eq!(netted.remaining_deficit, -10_000_000.0);
    }

    #[test]
    fn test_idempotence() {
        let input = reference_input();
        let engine = engine(PostLoopAdjustment::AddReserve);

        let a = engine.project(&input);
        let b = engine.project(&input);
        assert_eq!(a, b);
    }

    #[test]
    fn test_project_profile_derives_inputs() {
        let profile = Profile::new(
            7,
            Gender::Female,
            30,
            65,
            IncomeBracket::Third,
            MonthlyExpenses {
                food: 540_000.0,
                housing: 450_000.0,
                medical: 360_000.0,
                leisure: 450_000.0,
            },
            PensionInput::DirectMonthly(1_000_000.0),
        );

        let result = engine(PostLoopAdjustment::AddReserve).project_profile(&profile);

        // Female default expectancy 86, retiring at 65 -> 21 years
        assert_eq!(result.years.len(), 21);
        assert_relative_eq!(
            result.years[0].expense,
            1_800_000.0 * 12.0 * 1.024,
            max_relative = 1e-12
        );
        assert_eq!(result.years[0].attained_age, 66);
    }

    #[test]
    fn test_horizon_override() {
        let profile = Profile::new(
            8,
            Gender::Male,
            40,
            60,
            IncomeBracket::First,
            MonthlyExpenses {
                food: 330_000.0,
                housing: 275_000.0,
                medical: 220_000.0,
                leisure: 275_000.0,
            },
            PensionInput::DirectMonthly(500_000.0),
        );

        let engine = ProjectionEngine::new(
            Assumptions::default_planning(),
            ProjectionConfig {
                adjustment: PostLoopAdjustment::None,
                horizon_override: Some(5),
            },
        );

        assert_eq!(engine.project_profile(&profile).years.len(), 5);
    }
}
