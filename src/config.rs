use bandit_sim::policies::{ExponentialDecay, PolicyType};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize)]
pub struct EnvironmentConfig {
    /// Hidden success probabilities. Generated from `generator_seed` when absent.
    pub probabilities: Option<Vec<f64>>,
    pub n_arms: usize,
    pub generator_seed: u64,
    pub seed: u64,
}

#[derive(Debug, Deserialize)]
pub struct SimulationConfig {
    pub horizon: usize,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub environment: EnvironmentConfig,
    pub simulation: SimulationConfig,
    #[serde(default = "default_policies")]
    pub policies: Vec<PolicyType>,
}

fn default_policies() -> Vec<PolicyType> {
    vec![
        PolicyType::EpsilonGreedy {
            epsilon: 0.2,
            schedule: Some(Box::new(ExponentialDecay {
                decay_factor: 0.9995,
                floor: 0.01,
            })),
            seed: 0,
        },
        PolicyType::Ucb1,
        PolicyType::ThompsonSampling {
            alpha0: 1.0,
            beta0: 1.0,
            seed: 1,
        },
    ]
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("APP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("logging.log_level", "info")?
            .set_default("environment.n_arms", 10)?
            .set_default("environment.generator_seed", 42)?
            .set_default("environment.seed", 123)?
            .set_default("simulation.horizon", 10_000)
    }
}
