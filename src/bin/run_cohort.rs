//! Run projections for an entire cohort of profiles from a CSV
//!
//! Outputs per-year aggregated cash flows across the cohort.

use rayon::prelude::*;
use retirement_planner::profile::load_profiles;
use retirement_planner::projection::{ProjectionConfig, ProjectionEngine, ProjectionResult};
use retirement_planner::Assumptions;
use std::env;
use std::fs::File;
use std::io::Write;
use std::time::Instant;

/// Aggregated yearly results across all profiles
#[derive(Debug, Clone, Default)]
struct AggregatedRow {
    year: u32,
    total_expense: f64,
    total_income: f64,
    total_balance: f64,
    profiles_projected: u32,
    profiles_in_deficit: u32,
}

fn main() {
    env_logger::init();

    let input_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "cohort_profiles.csv".to_string());

    let start = Instant::now();
    println!("Loading profiles from {}...", input_path);

    let profiles = load_profiles(&input_path).expect("Failed to load profiles");
    println!("Loaded {} profiles in {:?}", profiles.len(), start.elapsed());

    let assumptions = Assumptions::default_planning();
    let config = ProjectionConfig::default();

    println!("Running projections...");
    let proj_start = Instant::now();

    let results: Vec<ProjectionResult> = profiles
        .par_iter()
        .map(|profile| {
            let engine = ProjectionEngine::new(assumptions.clone(), config.clone());
            engine.project_profile(profile)
        })
        .collect();

    println!("Projections complete in {:?}", proj_start.elapsed());

    // Aggregate by year index up to the longest horizon in the cohort
    let max_horizon = results.iter().map(|r| r.years.len()).max().unwrap_or(0);
    let mut aggregated: Vec<AggregatedRow> = (1..=max_horizon as u32)
        .map(|year| AggregatedRow {
            year,
            ..Default::default()
        })
        .collect();

    for result in &results {
        for record in &result.years {
            let agg = &mut aggregated[(record.year_index - 1) as usize];
            agg.total_expense += record.expense;
            agg.total_income += record.income;
            agg.total_balance += record.balance;
            agg.profiles_projected += 1;
            if record.balance < 0.0 {
                agg.profiles_in_deficit += 1;
            }
        }
    }

    let output_path = "cohort_projection_output.csv";
    let mut file = File::create(output_path).expect("Failed to create output file");

    writeln!(
        file,
        "Year,TotalExpense,TotalIncome,TotalBalance,ProfilesProjected,ProfilesInDeficit"
    )
    .unwrap();

    for row in &aggregated {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{},{}",
            row.year,
            row.total_expense,
            row.total_income,
            row.total_balance,
            row.profiles_projected,
            row.profiles_in_deficit,
        )
        .unwrap();
    }

    println!("Output written to {}", output_path);

    let cohort_shortfall: f64 = results.iter().map(|r| r.total_shortfall).sum();
    let cohort_remaining: f64 = results.iter().map(|r| r.remaining_deficit).sum();
    let underfunded = results
        .iter()
        .filter(|r| r.remaining_deficit > 0.0)
        .count();

    println!("\nCohort Summary:");
    println!("  Profiles: {}", results.len());
    println!("  Longest horizon: {} years", max_horizon);
    println!("  Accumulated shortfall: {:.0}", cohort_shortfall);
    println!("  Remaining deficit (adjusted): {:.0}", cohort_remaining);
    println!(
        "  Profiles with a positive remaining deficit: {} of {}",
        underfunded,
        results.len()
    );

    println!("\nTotal time: {:?}", start.elapsed());
}
