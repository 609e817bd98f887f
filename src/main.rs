//! Retirement Planner CLI
//!
//! Interactive session: collects a household profile (or loads one from a
//! cohort CSV), runs the projection, and renders the report.

use anyhow::{anyhow, Context};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use retirement_planner::profile::{interview, load_profiles};
use retirement_planner::projection::{
    PostLoopAdjustment, ProjectionConfig, ProjectionEngine,
};
use retirement_planner::report::{self, VerdictThresholds};
use retirement_planner::Assumptions;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum AdjustmentArg {
    /// Report the accumulated shortfall as-is
    None,
    /// Add the reserve fund to the total need
    AddReserve,
    /// Net assets minus debt against the total need
    SubtractNetAssets,
}

impl From<AdjustmentArg> for PostLoopAdjustment {
    fn from(arg: AdjustmentArg) -> Self {
        match arg {
            AdjustmentArg::None => PostLoopAdjustment::None,
            AdjustmentArg::AddReserve => PostLoopAdjustment::AddReserve,
            AdjustmentArg::SubtractNetAssets => PostLoopAdjustment::SubtractNetAssets,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "retirement_planner", about = "Retirement funding projection")]
struct Cli {
    /// Load the profile from a cohort CSV instead of running the interview
    #[arg(long)]
    profile: Option<PathBuf>,

    /// Row to use when loading from a CSV (0-based)
    #[arg(long, default_value_t = 0)]
    row: usize,

    /// Post-loop aggregation policy
    #[arg(long, value_enum, default_value = "add-reserve")]
    adjustment: AdjustmentArg,

    /// Write the per-year table to this CSV path
    #[arg(long)]
    csv_out: Option<PathBuf>,

    /// Print the full result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let assumptions = Assumptions::default_planning();

    let profile = match &cli.profile {
        Some(path) => {
            let profiles = load_profiles(path)
                .map_err(|e| anyhow!("failed to load {}: {}", path.display(), e))?;
            let profile = profiles
                .get(cli.row)
                .ok_or_else(|| {
                    anyhow!("row {} out of range ({} profiles)", cli.row, profiles.len())
                })?
                .clone();
            profile
                .validate(&assumptions.life)
                .context("profile failed validation")?;
            profile
        }
        None => {
            let stdin = io::stdin();
            let mut input = BufReader::new(stdin.lock());
            let mut output = io::stdout();
            interview::collect_profile(&mut input, &mut output, &assumptions)
                .map_err(|e| anyhow!("interview failed: {}", e))?
        }
    };

    let config = ProjectionConfig {
        adjustment: cli.adjustment.into(),
        horizon_override: None,
    };
    let engine = ProjectionEngine::new(assumptions, config);
    let result = engine.project_profile(&profile);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!();
        print!(
            "{}",
            report::render_text(&profile, &result, &VerdictThresholds::default())
        );
    }

    if let Some(path) = &cli.csv_out {
        let file = File::create(path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        report::write_year_csv(file, &result)
            .map_err(|e| anyhow!("failed to write year table: {}", e))?;
        println!("\nPer-year table written to: {}", path.display());
    }

    Ok(())
}
