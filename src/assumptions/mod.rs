//! Planning assumptions: life expectancy and consumption presets

mod expense;
mod life;

pub use expense::{derived_monthly_pension, CategorySplit, ExpensePresets, PENSION_DERIVATION_FACTOR};
pub use life::LifeExpectancy;

/// Container for all planning assumptions
#[derive(Debug, Clone)]
pub struct Assumptions {
    pub life: LifeExpectancy,
    pub expense: ExpensePresets,
}

impl Assumptions {
    /// Create assumptions with population-average defaults
    pub fn default_planning() -> Self {
        Self {
            life: LifeExpectancy::population_defaults(),
            expense: ExpensePresets::household_survey(),
        }
    }
}

impl Default for Assumptions {
    fn default() -> Self {
        Self::default_planning()
    }
}
