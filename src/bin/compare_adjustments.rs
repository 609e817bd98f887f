//! Compare the post-loop aggregation policies for a single profile
//!
//! Usage: cargo run --bin compare_adjustments [cohort.csv]

use retirement_planner::profile::{
    load_profiles, Gender, IncomeBracket, MonthlyExpenses, PensionInput, Profile,
};
use retirement_planner::report::{classify, format_currency, VerdictThresholds};
use retirement_planner::ScenarioRunner;
use std::env;

fn sample_profile() -> Profile {
    let mut profile = Profile::new(
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
    );
    profile.assets = 150_000_000.0;
    profile.debt = 30_000_000.0;
    profile
}

fn main() {
    env_logger::init();

    let profiles = match env::args().nth(1) {
        Some(path) => {
            println!("Loading profiles from {}...", path);
            load_profiles(&path).expect("Failed to load profiles")
        }
        None => vec![sample_profile()],
    };

    let runner = ScenarioRunner::new();
    let thresholds = VerdictThresholds::default();

    for profile in &profiles {
        println!("\n{}", "=".repeat(70));
        println!(
            "Profile {} ({:?}, retiring at {}, horizon {} years)",
            profile.profile_id,
            profile.gender,
            profile.retirement_age,
            profile.horizon_years(&runner.assumptions().life),
        );
        println!("{}", "=".repeat(70));
        println!(
            "{:<22} {:>18} {:>18} {:>8}  {}",
            "Adjustment", "Shortfall", "Remaining", "Deficits", "Verdict"
        );
        println!("{:-<90}", "");

        for (adjustment, result) in runner.run_adjustments(profile) {
            let verdict = classify(&result, &thresholds);
            println!(
                "{:<22} {:>18} {:>18} {:>8}  {:?}",
                adjustment.as_str(),
                format_currency(result.total_shortfall),
                format_currency(result.remaining_deficit),
                result.deficit_year_count,
                verdict,
            );
        }
    }
}
