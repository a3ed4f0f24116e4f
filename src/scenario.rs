//! Scenario runner for comparing several projections at once
//!
//! Runs the same engine over many inputs on the rayon pool, keeping results
//! in the order the inputs were given.

use rayon::prelude::*;

use crate::catalog::RateOption;
use crate::projection::{project, CalculationInput, ProjectionPoint, ProjectionSummary};

/// One projected rate option
#[derive(Debug, Clone)]
pub struct RateScenario {
    pub option: RateOption,
    pub points: Vec<ProjectionPoint>,
}

impl RateScenario {
    pub fn summary(&self) -> Option<ProjectionSummary> {
        ProjectionSummary::from_points(&self.points)
    }
}

/// Batch runner over the projection engine
///
/// # Example
/// ```
/// use compound_returns::{catalog, CalculationInput, ScenarioRunner};
///
/// let runner = ScenarioRunner::new();
/// let base = CalculationInput::calculator_defaults();
/// let scenarios = runner.compare_rates(&base, &catalog::preset_options());
/// assert_eq!(scenarios.len(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ScenarioRunner;

impl ScenarioRunner {
    pub fn new() -> Self {
        Self
    }

    /// Run a single projection
    pub fn run(&self, input: &CalculationInput) -> Vec<ProjectionPoint> {
        project(input)
    }

    /// Run projections for many inputs in parallel
    pub fn run_batch(&self, inputs: &[CalculationInput]) -> Vec<Vec<ProjectionPoint>> {
        inputs.par_iter().map(project).collect()
    }

    /// Project the base input once per rate option, replacing its interest rate
    pub fn compare_rates(&self, base: &CalculationInput, options: &[RateOption]) -> Vec<RateScenario> {
        options
            .par_iter()
            .map(|option| {
                let input = base.clone().with_interest_rate(option.rate);
                RateScenario {
                    option: option.clone(),
                    points: project(&input),
                }
            })
            .collect()
    }
}
