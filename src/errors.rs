use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigurationError {
    #[error("At least one arm is required")]
    NoArms,
    #[error("Probability {value} of arm {arm_id} is outside [0, 1]")]
    InvalidProbability { arm_id: usize, value: f64 },
    #[error("Epsilon {0} is outside [0, 1]")]
    InvalidEpsilon(f64),
    #[error("Beta prior ({alpha}, {beta}) must be strictly positive")]
    InvalidPrior { alpha: f64, beta: f64 },
    #[error("Invalid epsilon schedule: {0}")]
    InvalidSchedule(String),
    #[error("Horizon must be at least 1")]
    InvalidHorizon,
    #[error("Environment has {environment} arms but policy has {policy}")]
    ArmCountMismatch { environment: usize, policy: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum EnvironmentError {
    #[error("Arm {arm_id} out of range for {n_arms} arms")]
    OutOfRange { arm_id: usize, n_arms: usize },
}

#[derive(Debug, Error, PartialEq)]
pub enum PolicyError {
    #[error("No arms to draw from")]
    NoArmsAvailable,
    #[error("Arm {0} not found")]
    ArmNotFound(usize),
    #[error("Reward {0} is not a Bernoulli outcome")]
    InvalidReward(f64),
    #[error("Failed to sample posterior: {0}")]
    SamplingError(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Environment(#[from] EnvironmentError),
    #[error(transparent)]
    Policy(#[from] PolicyError),
}
