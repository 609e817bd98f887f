//! Household profile data structures produced by the input collectors

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::assumptions::{derived_monthly_pension, LifeExpectancy};

/// Longest projection horizon the input boundary accepts, in years
pub const MAX_HORIZON_YEARS: u32 = 100;

/// Gender of the planner, used only to select a default life expectancy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

/// Income bracket used to suggest a monthly expense level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeBracket {
    /// Bottom bracket (annual income under 10M)
    First,
    /// Middle bracket (annual income 30-50M)
    Third,
    /// Top bracket (annual income over 100M)
    Fifth,
}

impl IncomeBracket {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeBracket::First => "1st bracket (under 10M/yr)",
            IncomeBracket::Third => "3rd bracket (30-50M/yr)",
            IncomeBracket::Fifth => "5th bracket (over 100M/yr)",
        }
    }
}

/// Itemized monthly living expenses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyExpenses {
    pub food: f64,
    pub housing: f64,
    pub medical: f64,
    pub leisure: f64,
}

impl MonthlyExpenses {
    /// Total monthly expense across all categories
    pub fn total(&self) -> f64 {
        self.food + self.housing + self.medical + self.leisure
    }

    /// Total annual expense
    pub fn annual(&self) -> f64 {
        self.total() * 12.0
    }
}

/// How the pension amount was provided
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PensionInput {
    /// Monthly pension amount entered directly
    DirectMonthly(f64),
    /// Derived from an annual income level via the statutory accrual factor
    DerivedFromIncome {
        annual_income_level: f64,
    },
}

impl PensionInput {
    /// Monthly pension amount in currency units
    pub fn monthly_amount(&self) -> f64 {
        match self {
            PensionInput::DirectMonthly(amount) => *amount,
            PensionInput::DerivedFromIncome {
                annual_income_level,
            } => derived_monthly_pension(*annual_income_level),
        }
    }

    /// Annual pension amount in currency units
    pub fn annual_amount(&self) -> f64 {
        self.monthly_amount() * 12.0
    }
}

/// Validation failures raised at the input-collection boundary.
///
/// The projection engine itself is total over validated inputs and never fails.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("{field} must be between 20 and 100, got {value}")]
    AgeOutOfRange { field: &'static str, value: u8 },

    #[error("retirement age {retirement_age} must be greater than current age {current_age}")]
    RetirementBeforeCurrent {
        current_age: u8,
        retirement_age: u8,
    },

    #[error("{field} must be non-negative, got {value}")]
    NegativeAmount { field: &'static str, value: f64 },

    #[error("inflation rate must be in [0, 1), got {0}")]
    InflationOutOfRange(f64),

    #[error("loan interest rate must be in [0, 1), got {0}")]
    LoanRateOutOfRange(f64),

    #[error("projection horizon of {years} years exceeds the {MAX_HORIZON_YEARS}-year limit")]
    HorizonTooLong { years: u32 },
}

/// A single household planning profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    /// Unique profile identifier
    pub profile_id: u32,

    /// Gender (selects the default life expectancy)
    pub gender: Gender,

    /// Current age of the planner
    pub current_age: u8,

    /// Planned retirement age
    pub retirement_age: u8,

    /// Provision all the way to age 100 regardless of the gender default
    #[serde(default)]
    pub plan_to_100: bool,

    /// Explicit life-expectancy override (wins over defaults when set)
    #[serde(default)]
    pub life_expectancy_override: Option<u8>,

    /// Income bracket used for expense suggestions
    pub bracket: IncomeBracket,

    /// Itemized monthly expenses
    pub expenses: MonthlyExpenses,

    /// Pension entry (direct or derived)
    pub pension: PensionInput,

    /// Lump-sum reserve earmarked for medical and long-term care
    pub reserve_fund: f64,

    /// Annual inflation rate as a fraction (0.024 = 2.4%)
    pub inflation_rate: f64,

    /// Current assets
    #[serde(default)]
    pub assets: f64,

    /// Current debt
    #[serde(default)]
    pub debt: f64,

    /// Interest rate on the outstanding debt, as a fraction
    #[serde(default)]
    pub loan_interest_rate: f64,

    /// Years over which the debt is repaid (zero when there is no schedule)
    #[serde(default)]
    pub repayment_term_years: u32,
}

impl Profile {
    /// Create a profile with bracket-suggested expenses and common defaults
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_id: u32,
        gender: Gender,
        current_age: u8,
        retirement_age: u8,
        bracket: IncomeBracket,
        expenses: MonthlyExpenses,
        pension: PensionInput,
    ) -> Self {
        Self {
            profile_id,
            gender,
            current_age,
            retirement_age,
            plan_to_100: false,
            life_expectancy_override: None,
            bracket,
            expenses,
            pension,
            reserve_fund: 30_000_000.0,
            inflation_rate: 0.024,
            assets: 0.0,
            debt: 0.0,
            loan_interest_rate: 0.0,
            repayment_term_years: 0,
        }
    }

    /// Planning age under the given life-expectancy assumptions
    pub fn life_expectancy(&self, life: &LifeExpectancy) -> u8 {
        life.resolve(self.gender, self.plan_to_100, self.life_expectancy_override)
    }

    /// Years from retirement to the planning age (zero when retiring at or
    /// beyond the planning age)
    pub fn horizon_years(&self, life: &LifeExpectancy) -> u32 {
        let expectancy = self.life_expectancy(life);
        expectancy.saturating_sub(self.retirement_age) as u32
    }

    /// Annual expense baseline at today's prices
    pub fn annual_expense(&self) -> f64 {
        self.expenses.annual()
    }

    /// Fixed nominal annual pension income
    pub fn annual_income(&self) -> f64 {
        self.pension.annual_amount()
    }

    /// Assets net of debt; negative when debt exceeds assets
    pub fn net_assets(&self) -> f64 {
        self.assets - self.debt
    }

    /// Level annual repayment on the outstanding debt over the repayment
    /// term, at the loan interest rate. Zero when there is no debt or no
    /// repayment schedule. Informational only; the projection loop does not
    /// consume it.
    pub fn annual_debt_service(&self) -> f64 {
        if self.debt <= 0.0 || self.repayment_term_years == 0 {
            return 0.0;
        }
        let n = self.repayment_term_years as f64;
        let r = self.loan_interest_rate;
        if r == 0.0 {
            self.debt / n
        } else {
            self.debt * r / (1.0 - (1.0 + r).powf(-n))
        }
    }

    /// Range checks the input collectors must pass before projecting
    pub fn validate(&self, life: &LifeExpectancy) -> Result<(), ProfileError> {
        if !(20..=100).contains(&self.current_age) {
            return Err(ProfileError::AgeOutOfRange {
                field: "current age",
                value: self.current_age,
            });
        }
        if !(20..=100).contains(&self.retirement_age) {
            return Err(ProfileError::AgeOutOfRange {
                field: "retirement age",
                value: self.retirement_age,
            });
        }
        if self.retirement_age <= self.current_age {
            return Err(ProfileError::RetirementBeforeCurrent {
                current_age: self.current_age,
                retirement_age: self.retirement_age,
            });
        }

        let money_fields = [
            ("food expense", self.expenses.food),
            ("housing expense", self.expenses.housing),
            ("medical expense", self.expenses.medical),
            ("leisure expense", self.expenses.leisure),
            ("monthly pension", self.pension.monthly_amount()),
            ("reserve fund", self.reserve_fund),
            ("assets", self.assets),
            ("debt", self.debt),
        ];
        for (field, value) in money_fields {
            if value < 0.0 {
                return Err(ProfileError::NegativeAmount { field, value });
            }
        }

        if !(0.0..1.0).contains(&self.inflation_rate) {
            return Err(ProfileError::InflationOutOfRange(self.inflation_rate));
        }
        if !(0.0..1.0).contains(&self.loan_interest_rate) {
            return Err(ProfileError::LoanRateOutOfRange(self.loan_interest_rate));
        }

        let years = self.horizon_years(life);
        if years > MAX_HORIZON_YEARS {
            return Err(ProfileError::HorizonTooLong { years });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_profile() -> Profile {
        Profile::new(
            1,
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
        )
    }

    #[test]
    fn test_horizon_from_life_expectancy() {
        let life = LifeExpectancy::population_defaults();
        let mut profile = test_profile();

        // Female default 86, retiring at 65
        assert_eq!(profile.life_expectancy(&life), 86);
        assert_eq!(profile.horizon_years(&life), 21);

        profile.plan_to_100 = true;
        assert_eq!(profile.horizon_years(&life), 35);

        // Retiring past the planning age yields a zero horizon, not underflow
        profile.plan_to_100 = false;
        profile.retirement_age = 90;
        assert_eq!(profile.horizon_years(&life), 0);
    }

    #[test]
    fn test_annual_figures() {
        let profile = test_profile();

        assert_relative_eq!(profile.annual_expense(), 1_800_000.0 * 12.0);
        assert_relative_eq!(profile.annual_income(), 12_000_000.0);
    }

    #[test]
    fn test_net_assets_can_be_negative() {
        let mut profile = test_profile();
        profile.assets = 50_000_000.0;
        profile.debt = 80_000_000.0;

        assert_relative_eq!(profile.net_assets(), -30_000_000.0);
    }

    #[test]
    fn test_derived_pension_amount() {
        let pension = PensionInput::DerivedFromIncome {
            annual_income_level: 30_000_000.0,
        };

        assert_relative_eq!(pension.monthly_amount(), 37_500.0);
        assert_relative_eq!(pension.annual_amount(), 450_000.0);
    }

    #[test]
    fn test_validate_accepts_sane_profile() {
        let life = LifeExpectancy::population_defaults();
        assert!(test_profile().validate(&life).is_ok());
    }

    #[test]
    fn test_validate_rejects_retirement_before_current() {
        let life = LifeExpectancy::population_defaults();
        let mut profile = test_profile();
        profile.current_age = 70;
        profile.retirement_age = 65;

        assert!(matches!(
            profile.validate(&life),
            Err(ProfileError::RetirementBeforeCurrent { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_negative_amounts() {
        let life = LifeExpectancy::population_defaults();
        let mut profile = test_profile();
        profile.reserve_fund = -1.0;

        assert!(matches!(
            profile.validate(&life),
            Err(ProfileError::NegativeAmount { field: "reserve fund", .. })
        ));
    }

    #[test]
    fn test_annual_debt_service() {
        let mut profile = test_profile();
        assert_relative_eq!(profile.annual_debt_service(), 0.0);

        // Interest-free schedule splits the principal evenly
        profile.debt = 60_000_000.0;
        profile.repayment_term_years = 10;
        assert_relative_eq!(profile.annual_debt_service(), 6_000_000.0);

        // Level amortization at 5% over 10 years
        profile.loan_interest_rate = 0.05;
        assert_relative_eq!(
            profile.annual_debt_service(),
            7_770_275.0,
            max_relative = 1e-4
        );

        // Debt without a schedule yields no service figure
        profile.repayment_term_years = 0;
        assert_relative_eq!(profile.annual_debt_service(), 0.0);
    }

    #[test]
    fn test_validate_rejects_loan_rate_out_of_range() {
        let life = LifeExpectancy::population_defaults();
        let mut profile = test_profile();
        profile.loan_interest_rate = 1.2;

        assert!(matches!(
            profile.validate(&life),
            Err(ProfileError::LoanRateOutOfRange(_))
        ));
    }

    #[test]
    fn test_validate_rejects_inflation_out_of_range() {
        let life = LifeExpectancy::population_defaults();
        let mut profile = test_profile();
        profile.inflation_rate = 1.0;

        assert!(matches!(
            profile.validate(&life),
            Err(ProfileError::InflationOutOfRange(_))
        ));
    }
}
