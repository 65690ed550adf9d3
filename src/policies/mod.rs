mod arm;
pub mod epsilon_greedy;
mod policy;
pub mod schedule;
pub mod thompson_sampling;
pub mod ucb;

pub use epsilon_greedy::EpsilonGreedy;
pub use policy::{ArmStats, Policy, PolicyStats, PolicyType};
pub use schedule::{EpsilonSchedule, ExponentialDecay, InverseTimeDecay};
pub use thompson_sampling::ThompsonSampling;
pub use ucb::Ucb1;
