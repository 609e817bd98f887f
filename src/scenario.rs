//! Scenario runner for batch projections
//!
//! Holds assumptions once, then runs many projections with different
//! profiles or configurations without rebuilding them.

use crate::assumptions::Assumptions;
use crate::profile::Profile;
use crate::projection::{
    PostLoopAdjustment, ProjectionConfig, ProjectionEngine, ProjectionResult,
};

/// Pre-loaded scenario runner
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    base_assumptions: Assumptions,
}

impl ScenarioRunner {
    /// Create a runner with default planning assumptions
    pub fn new() -> Self {
        Self {
            base_assumptions: Assumptions::default_planning(),
        }
    }

    /// Create a runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            base_assumptions: assumptions,
        }
    }

    /// Run a single projection with the given config
    pub fn run(&self, profile: &Profile, config: ProjectionConfig) -> ProjectionResult {
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        engine.project_profile(profile)
    }

    /// Run projections for multiple profiles with the same config
    pub fn run_batch(&self, profiles: &[Profile], config: ProjectionConfig) -> Vec<ProjectionResult> {
        log::debug!("running batch of {} profiles", profiles.len());
        let engine = ProjectionEngine::new(self.base_assumptions.clone(), config);
        profiles.iter().map(|p| engine.project_profile(p)).collect()
    }

    /// Run multiple configurations for a single profile
    pub fn run_scenarios(
        &self,
        profile: &Profile,
        configs: &[ProjectionConfig],
    ) -> Vec<ProjectionResult> {
        configs
            .iter()
            .map(|config| {
                let engine =
                    ProjectionEngine::new(self.base_assumptions.clone(), config.clone());
                engine.project_profile(profile)
            })
            .collect()
    }

    /// Run one profile under every post-loop adjustment policy
    pub fn run_adjustments(
        &self,
        profile: &Profile,
    ) -> Vec<(PostLoopAdjustment, ProjectionResult)> {
        [
            PostLoopAdjustment::None,
            PostLoopAdjustment::AddReserve,
            PostLoopAdjustment::SubtractNetAssets,
        ]
        .into_iter()
        .map(|adjustment| {
            let config = ProjectionConfig {
                adjustment,
                horizon_override: None,
            };
            (adjustment, self.run(profile, config))
        })
        .collect()
    }

    /// Get reference to base assumptions for inspection
    pub fn assumptions(&self) -> &Assumptions {
        &self.base_assumptions
    }

    /// Get mutable reference to base assumptions for customization
    pub fn assumptions_mut(&mut self) -> &mut Assumptions {
        &mut self.base_assumptions
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{Gender, IncomeBracket, MonthlyExpenses, PensionInput};
    use approx::assert_relative_eq;

    fn test_profile() -> Profile {
        let mut profile = Profile::new(
            1,
            Gender::Male,
            40,
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
        profile.assets = 120_000_000.0;
        profile.debt = 20_000_000.0;
        profile
    }

    #[test]
    fn test_run_adjustments_covers_all_policies() {
        let runner = ScenarioRunner::new();
        let results = runner.run_adjustments(&test_profile());

        assert_eq!(results.len(), 3);

        let (_, plain) = &results[0];
        let (_, reserved) = &results[1];
        let (_, netted) = &results[2];

        // Same loop everywhere, only the post-loop figure differs
        assert_relative_eq!(plain.total_shortfall, reserved.total_shortfall);
        assert_relative_eq!(
            reserved.remaining_deficit,
            plain.remaining_deficit + 30_000_000.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            netted.remaining_deficit,
            plain.remaining_deficit - 100_000_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_run_batch() {
        let runner = ScenarioRunner::new();
        let profiles = vec![test_profile(), test_profile()];
        let results = runner.run_batch(&profiles, ProjectionConfig::default());

        assert_eq!(results.len(), 2);
        assert_eq!(results[0], results[1]);
    }

    #[test]
    fn test_horizon_override_scenarios() {
        let runner = ScenarioRunner::new();
        let configs: Vec<_> = [5, 10, 15]
            .iter()
            .map(|&h| ProjectionConfig {
                adjustment: PostLoopAdjustment::None,
                horizon_override: Some(h),
            })
            .collect();

        let results = runner.run_scenarios(&test_profile(), &configs);
        assert_eq!(results.len(), 3);

        // Longer horizons accumulate more need (every year runs a deficit here)
        assert!(results[2].total_shortfall > results[0].total_shortfall);
    }
}
