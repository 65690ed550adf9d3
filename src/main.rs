mod config;
mod report;

use crate::config::AppConfig;
use crate::report::{Report, ReportError};

use bandit_sim::{compare, BernoulliEnvironment, SimulationError};
use rand::{rngs::SmallRng, seq::SliceRandom, SeedableRng};
use rand_distr::{Beta, Distribution};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Error)]
enum AppError {
    #[error("Cannot read config: {0}")]
    Config(#[from] ::config::ConfigError),
    #[error("Cannot generate arm probabilities: {0}")]
    Generator(String),
    #[error(transparent)]
    Simulation(#[from] SimulationError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

/// Beta(2, 5) draws sorted then shuffled, so the arms are spread out but the best one is not
/// at a predictable index.
fn generate_probabilities(n_arms: usize, seed: u64) -> Result<Vec<f64>, AppError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let beta = Beta::new(2.0, 5.0).map_err(|e| AppError::Generator(e.to_string()))?;

    let mut probabilities: Vec<f64> = (0..n_arms).map(|_| beta.sample(&mut rng)).collect();
    probabilities.sort_by(|a, b| b.total_cmp(a));
    probabilities.shuffle(&mut rng);
    Ok(probabilities)
}

fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.log_level)),
        )
        .init();

    let probabilities = match config.environment.probabilities {
        Some(probabilities) => probabilities,
        None => generate_probabilities(
            config.environment.n_arms,
            config.environment.generator_seed,
        )?,
    };
    let (optimal_arm, optimal_mean) =
        BernoulliEnvironment::new(probabilities.clone(), config.environment.seed)
            .map_err(SimulationError::from)?
            .best();
    info!(?probabilities, optimal_arm, optimal_mean, "True Bernoulli means");

    let horizon = config.simulation.horizon;
    let results = compare(
        &probabilities,
        config.environment.seed,
        config.policies,
        horizon,
    )?;

    for (name, result) in &results {
        info!(
            policy = %name,
            total_reward = result.total_reward(),
            total_regret = result.total_regret(),
            optimal_pulls = result.optimal_pulls(),
            horizon,
            "Finished run"
        );
    }

    if let Some(path) = &config.simulation.output {
        Report::new(&probabilities, optimal_arm, horizon, &results).write(path)?;
        info!(path = ?path, "Wrote report");
    }

    Ok(())
}
