use crate::environment::{ArmIndex, BernoulliEnvironment, Reward};
use crate::errors::{ConfigurationError, SimulationError};
use crate::policies::{Policy, PolicyType};

use serde::Serialize;
use tracing::{debug, trace};

/// Per-step record of one run. Cumulative views are derived on demand.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SimulationResult {
    pub actions: Vec<ArmIndex>,
    pub rewards: Vec<Reward>,
    pub regrets: Vec<f64>,
    pub pulls: Vec<u64>,
    pub optimal_arm: ArmIndex,
}

impl SimulationResult {
    pub fn horizon(&self) -> usize {
        self.actions.len()
    }

    pub fn cumulative_rewards(&self) -> Vec<f64> {
        cumsum(&self.rewards)
    }

    pub fn cumulative_regret(&self) -> Vec<f64> {
        cumsum(&self.regrets)
    }

    pub fn total_reward(&self) -> f64 {
        self.rewards.iter().sum()
    }

    pub fn total_regret(&self) -> f64 {
        self.regrets.iter().sum()
    }

    pub fn optimal_pulls(&self) -> u64 {
        self.pulls[self.optimal_arm]
    }
}

fn cumsum(xs: &[f64]) -> Vec<f64> {
    xs.iter()
        .scan(0.0, |acc, x| {
            *acc += x;
            Some(*acc)
        })
        .collect()
}

pub fn run(
    environment: &mut BernoulliEnvironment,
    policy: &mut dyn Policy,
    horizon: usize,
) -> Result<SimulationResult, SimulationError> {
    if horizon < 1 {
        return Err(ConfigurationError::InvalidHorizon.into());
    }
    if environment.n_arms() != policy.n_arms() {
        return Err(ConfigurationError::ArmCountMismatch {
            environment: environment.n_arms(),
            policy: policy.n_arms(),
        }
        .into());
    }

    let (optimal_arm, optimal_mean) = environment.best();
    let mut result = SimulationResult {
        actions: Vec::with_capacity(horizon),
        rewards: Vec::with_capacity(horizon),
        regrets: Vec::with_capacity(horizon),
        pulls: vec![0; environment.n_arms()],
        optimal_arm,
    };
    debug!(horizon, n_arms = environment.n_arms(), optimal_arm, "Starting simulation");

    for t in 1..=horizon as u64 {
        let arm_id = policy.select_action(t)?;
        let reward = environment.step(arm_id)?;
        policy.update(arm_id, reward)?;

        // step() succeeded so the arm is in range
        let regret = environment
            .mean(arm_id)
            .map_or(0.0, |mean| optimal_mean - mean);
        trace!(t, arm_id, reward, regret, "Step");

        result.actions.push(arm_id);
        result.rewards.push(reward);
        result.regrets.push(regret);
        result.pulls[arm_id] += 1;
    }

    debug!(
        total_reward = result.total_reward(),
        total_regret = result.total_regret(),
        "Finished simulation"
    );
    Ok(result)
}

/// Run every policy for `horizon` steps, each against its own environment built from the same
/// probabilities and seed. Results are returned in input order, labelled by policy name.
pub fn compare(
    probabilities: &[f64],
    env_seed: u64,
    policies: Vec<PolicyType>,
    horizon: usize,
) -> Result<Vec<(String, SimulationResult)>, SimulationError> {
    policies
        .into_iter()
        .map(|policy_type| -> Result<_, SimulationError> {
            let name = policy_type.name();
            let mut environment = BernoulliEnvironment::new(probabilities.to_vec(), env_seed)?;
            let mut policy = policy_type.into_policy(environment.n_arms())?;
            debug!(policy = %name, "Running policy");

            let result = run(&mut environment, policy.as_mut(), horizon)?;
            Ok((name, result))
        })
        .collect()
}
