//! Running state for a single projection

use super::records::ProjectionInput;

/// State carried across the year loop.
///
/// The compound inflation factor is accumulated multiplicatively so year i
/// sees (1 + inflation)^i, with the first projected year already carrying one
/// year of inflation.
#[derive(Debug, Clone)]
pub struct ProjectionState {
    /// Current projection year (1-indexed; 0 before the first advance)
    pub year_index: u32,

    /// Age during the current year
    pub attained_age: u8,

    /// (1 + inflation)^year_index
    pub inflation_factor: f64,

    /// Running sum of (expense - income)
    pub cumulative_shortfall: f64,

    /// Years so far with a negative balance
    pub deficit_years: u32,
}

impl ProjectionState {
    /// Initialize state at projection start
    pub fn from_input(input: &ProjectionInput) -> Self {
        Self {
            year_index: 0,
            attained_age: input.retirement_age,
            inflation_factor: 1.0,
            cumulative_shortfall: 0.0,
            deficit_years: 0,
        }
    }

    /// Advance to the next projection year
    pub fn advance_year(&mut self, input: &ProjectionInput) {
        self.year_index += 1;
        self.attained_age = input
            .retirement_age
            .saturating_add(self.year_index.min(u8::MAX as u32) as u8);
        self.inflation_factor *= 1.0 + input.inflation_rate;
    }

    /// Record the year's balance into the running aggregates
    pub fn accumulate(&mut self, expense: f64, income: f64) {
        self.cumulative_shortfall += expense - income;
        if income - expense < 0.0 {
            self.deficit_years += 1;
        }
    }
}
