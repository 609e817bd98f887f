//! Result rendering: text summary, chart data, and exports

mod chart;
mod verdict;

pub use chart::{ChartPoint, ChartSeries};
pub use verdict::{classify, Verdict, VerdictThresholds};

use chrono::{Datelike, Local};
use std::error::Error;
use std::fmt::Write as _;

use crate::profile::Profile;
use crate::projection::ProjectionResult;

/// Format a currency amount with thousands separators
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let rounded = amount.abs().round() as u64;
    let digits = rounded.to_string();

    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Calendar year in which the profile's retirement starts
pub fn retirement_start_year(profile: &Profile) -> i32 {
    let years_until = profile.retirement_age.saturating_sub(profile.current_age) as i32;
    Local::now().year() + years_until
}

/// Render the full text report: summary block, verdict, and ASCII chart
pub fn render_text(
    profile: &Profile,
    result: &ProjectionResult,
    thresholds: &VerdictThresholds,
) -> String {
    let summary = result.summary();
    let verdict = classify(result, thresholds);
    let first_year = retirement_start_year(profile);
    let series = ChartSeries::from_result(result, first_year);

    let mut out = String::new();
    writeln!(out, "Retirement funding report ({})", Local::now().format("%Y-%m-%d")).unwrap();
    writeln!(out, "{}", "=".repeat(60)).unwrap();
    writeln!(out, "Years after retirement: {}", summary.horizon_years).unwrap();
    writeln!(
        out,
        "Annual expense baseline: {}",
        format_currency(profile.annual_expense())
    )
    .unwrap();
    writeln!(
        out,
        "Annual pension income:   {}",
        format_currency(profile.annual_income())
    )
    .unwrap();
    writeln!(
        out,
        "Accumulated shortfall:   {}",
        format_currency(summary.total_shortfall)
    )
    .unwrap();
    writeln!(
        out,
        "Total required funds:    {}  (adjustment: {})",
        format_currency(summary.remaining_deficit),
        result.adjustment.as_str()
    )
    .unwrap();
    writeln!(out, "Deficit years:           {}", summary.deficit_year_count).unwrap();
    if summary.peak_annual_deficit > 0.0 {
        writeln!(
            out,
            "Peak annual deficit:     {}",
            format_currency(summary.peak_annual_deficit)
        )
        .unwrap();
    }
    if profile.debt > 0.0 {
        writeln!(
            out,
            "Outstanding debt:        {}",
            format_currency(profile.debt)
        )
        .unwrap();
        if profile.repayment_term_years > 0 {
            writeln!(
                out,
                "Annual debt repayment:   {}  ({} years at {:.1}%)",
                format_currency(profile.annual_debt_service()),
                profile.repayment_term_years,
                profile.loan_interest_rate * 100.0
            )
            .unwrap();
        }
    }
    writeln!(out).unwrap();
    writeln!(out, "Verdict: {:?}", verdict).unwrap();
    writeln!(out, "  {}", verdict.message()).unwrap();
    writeln!(out).unwrap();
    out.push_str(&series.render_ascii(40));
    out
}

/// Write the per-year table as CSV
pub fn write_year_csv<W: std::io::Write>(
    writer: W,
    result: &ProjectionResult,
) -> Result<(), Box<dyn Error>> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for year in &result.years {
        csv_writer.serialize(year)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::Assumptions;
    use crate::profile::{Gender, IncomeBracket, MonthlyExpenses, PensionInput};
    use crate::projection::{PostLoopAdjustment, ProjectionConfig, ProjectionEngine};

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
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "0");
        assert_eq!(format_currency(848_000.0), "848,000");
        assert_eq!(format_currency(2_048_000.4), "2,048,000");
        assert_eq!(format_currency(-30_000_000.0), "-30,000,000");
    }

    #[test]
    fn test_render_text_sections() {
        let profile = test_profile();
        let engine = ProjectionEngine::new(
            Assumptions::default_planning(),
            ProjectionConfig {
                adjustment: PostLoopAdjustment::AddReserve,
                horizon_override: None,
            },
        );
        let result = engine.project_profile(&profile);

        let report = render_text(&profile, &result, &VerdictThresholds::default());
        assert!(report.contains("Years after retirement: 21"));
        assert!(report.contains("adjustment: add reserve"));
        assert!(report.contains("Verdict:"));
        // One chart row per projected year
        assert!(report.lines().filter(|l| l.contains('#')).count() >= 21);
    }

    #[test]
    fn test_render_text_shows_debt_schedule() {
        let mut profile = test_profile();
        profile.debt = 60_000_000.0;
        profile.loan_interest_rate = 0.05;
        profile.repayment_term_years = 10;

        let engine = ProjectionEngine::new(
            Assumptions::default_planning(),
            ProjectionConfig::default(),
        );
        let result = engine.project_profile(&profile);

        let report = render_text(&profile, &result, &VerdictThresholds::default());
        assert!(report.contains("Outstanding debt:        60,000,000"));
        assert!(report.contains("10 years at 5.0%"));

        // No schedule, no repayment line
        profile.repayment_term_years = 0;
        let report = render_text(&profile, &result, &VerdictThresholds::default());
        assert!(report.contains("Outstanding debt"));
        assert!(!report.contains("Annual debt repayment"));
    }

    #[test]
    fn test_year_csv_has_row_per_year() {
        let engine = ProjectionEngine::new(
            Assumptions::default_planning(),
            ProjectionConfig::default(),
        );
        let result = engine.project_profile(&test_profile());

        let mut buffer = Vec::new();
        write_year_csv(&mut buffer, &result).expect("csv write failed");
        let text = String::from_utf8(buffer).unwrap();

        // Header + 21 data rows
        assert_eq!(text.lines().count(), 22);
        assert!(text.lines().next().unwrap().contains("year_index"));
    }
}
