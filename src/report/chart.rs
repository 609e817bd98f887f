//! Expense-vs-income chart data and terminal rendering
//!
//! The core produces `ChartSeries` points; graphical frontends render them.
//! `render_ascii` is the built-in terminal renderer, marking the portion of
//! each year's expense bar that pension income fails to cover.

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::projection::ProjectionResult;

/// A single data point for chart rendering
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Year of retirement, 1-indexed
    pub year_index: u32,

    /// Calendar year this projection year falls in
    pub calendar_year: i32,

    /// Age during this year
    pub attained_age: u8,

    /// Inflated annual expense
    pub expense: f64,

    /// Nominal annual income
    pub income: f64,

    /// Uncovered expense for the year, present only in deficit years
    pub deficit: Option<f64>,
}

/// Per-year chart series for a projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub points: Vec<ChartPoint>,
}

impl ChartSeries {
    /// Build the series from a projection result, labeling years starting at
    /// the given first calendar year of retirement.
    pub fn from_result(result: &ProjectionResult, first_calendar_year: i32) -> Self {
        let points = result
            .years
            .iter()
            .map(|y| ChartPoint {
                year_index: y.year_index,
                calendar_year: first_calendar_year + y.year_index as i32 - 1,
                attained_age: y.attained_age,
                expense: y.expense,
                income: y.income,
                deficit: (y.balance < 0.0).then_some(-y.balance),
            })
            .collect();
        Self { points }
    }

    /// Render an ASCII bar chart, one row per year.
    ///
    /// The expense bar is scaled to `width` columns; `#` marks the portion
    /// covered by income, `!` the uncovered deficit.
    pub fn render_ascii(&self, width: usize) -> String {
        let mut out = String::new();
        if self.points.is_empty() {
            out.push_str("(no projected years)\n");
            return out;
        }

        let max_expense = self
            .points
            .iter()
            .map(|p| p.expense)
            .fold(f64::MIN, f64::max)
            .max(1.0);

        writeln!(
            out,
            "{:>6} {:>4}  {:<width$}  {:>16} {:>16}",
            "Year",
            "Age",
            "Expense vs income (# covered, ! deficit)",
            "Expense",
            "Income",
            width = width
        )
        .unwrap();

        for point in &self.points {
            let bar_len = ((point.expense / max_expense) * width as f64).round() as usize;
            let covered = point.income.min(point.expense).max(0.0);
            let covered_len = ((covered / max_expense) * width as f64).round() as usize;
            let covered_len = covered_len.min(bar_len);

            let mut bar = "#".repeat(covered_len);
            bar.push_str(&"!".repeat(bar_len - covered_len));

            writeln!(
                out,
                "{:>6} {:>4}  {:<width$}  {:>16.0} {:>16.0}",
                point.calendar_year,
                point.attained_age,
                bar,
                point.expense,
                point.income,
                width = width
            )
            .unwrap();
        }

        out
    }
}
