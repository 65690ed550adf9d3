//! Stochastic multi-armed bandit simulator: a Bernoulli environment, three action-selection
//! policies and the loop that accumulates reward, regret and pull counts.

pub mod environment;
pub mod errors;
pub mod policies;
mod rng;
pub mod simulator;

pub use environment::{ArmIndex, BernoulliEnvironment, Reward};
pub use errors::{ConfigurationError, EnvironmentError, PolicyError, SimulationError};
pub use rng::SeededRng;
pub use simulator::{compare, run, SimulationResult};
