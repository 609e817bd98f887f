//! Consumption assumptions: bracket expense presets and pension derivation

use crate::profile::{IncomeBracket, MonthlyExpenses};

/// Fraction of the annual income level paid out as annual pension when the
/// pension amount is derived rather than entered directly.
pub const PENSION_DERIVATION_FACTOR: f64 = 0.015;

/// Split of a monthly expense total across the itemized categories
#[derive(Debug, Clone)]
pub struct CategorySplit {
    pub food: f64,
    pub housing: f64,
    pub medical: f64,
    pub leisure: f64,
}

impl Default for CategorySplit {
    fn default() -> Self {
        Self {
            food: 0.30,
            housing: 0.25,
            medical: 0.20,
            leisure: 0.25,
        }
    }
}

/// Suggested monthly expense levels by income bracket
#[derive(Debug, Clone)]
pub struct ExpensePresets {
    first_bracket: f64,
    third_bracket: f64,
    fifth_bracket: f64,
    split: CategorySplit,
}

impl ExpensePresets {
    /// Household survey presets: 1.1M / 1.8M / 2.3M currency units per month
    pub fn household_survey() -> Self {
        Self {
            first_bracket: 1_100_000.0,
            third_bracket: 1_800_000.0,
            fifth_bracket: 2_300_000.0,
            split: CategorySplit::default(),
        }
    }

    /// Suggested monthly expense total for a bracket
    pub fn monthly_total(&self, bracket: IncomeBracket) -> f64 {
        match bracket {
            IncomeBracket::First => self.first_bracket,
            IncomeBracket::Third => self.third_bracket,
            IncomeBracket::Fifth => self.fifth_bracket,
        }
    }

    /// Suggested itemized monthly expenses for a bracket
    pub fn default_categories(&self, bracket: IncomeBracket) -> MonthlyExpenses {
        let total = self.monthly_total(bracket);
        MonthlyExpenses {
            food: total * self.split.food,
            housing: total * self.split.housing,
            medical: total * self.split.medical,
            leisure: total * self.split.leisure,
        }
    }

    pub fn split(&self) -> &CategorySplit {
        &self.split
    }
}

impl Default for ExpensePresets {
    fn default() -> Self {
        Self::household_survey()
    }
}

/// Monthly pension derived from an annual income level
pub fn derived_monthly_pension(annual_income_level: f64) -> f64 {
    annual_income_level * PENSION_DERIVATION_FACTOR / 12.0
}
