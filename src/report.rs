use bandit_sim::{ArmIndex, SimulationResult};

use serde::Serialize;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error while writing report: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report to JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    pub policy: &'a str,
    pub cumulative_rewards: Vec<f64>,
    pub cumulative_regret: Vec<f64>,
    pub pulls: &'a [u64],
    pub optimal_pulls: u64,
}

/// Numeric sequences of a policy comparison, in the shape a plotting script expects.
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub probabilities: &'a [f64],
    pub optimal_arm: ArmIndex,
    pub horizon: usize,
    pub runs: Vec<RunReport<'a>>,
}

impl<'a> Report<'a> {
    pub fn new(
        probabilities: &'a [f64],
        optimal_arm: ArmIndex,
        horizon: usize,
        results: &'a [(String, SimulationResult)],
    ) -> Self {
        let runs = results
            .iter()
            .map(|(name, result)| RunReport {
                policy: name,
                cumulative_rewards: result.cumulative_rewards(),
                cumulative_regret: result.cumulative_regret(),
                pulls: &result.pulls,
                optimal_pulls: result.optimal_pulls(),
            })
            .collect();

        Self {
            probabilities,
            optimal_arm,
            horizon,
            runs,
        }
    }

    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let serialized = serde_json::to_string(self)?;
        std::fs::write(path, serialized)?;
        Ok(())
    }
}
