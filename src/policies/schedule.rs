use crate::errors::ConfigurationError;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Exploration rate as a function of the step, for epsilon-greedy.
#[typetag::serde(tag = "type")]
pub trait EpsilonSchedule: Debug {
    /// Rate to use at the 1-based step `t`, given the configured initial rate.
    fn rate(&self, t: u64, initial_rate: f64) -> f64;
    fn validate(&self) -> Result<(), ConfigurationError>;
    fn label(&self) -> String;
}

fn check_floor(floor: f64) -> Result<(), ConfigurationError> {
    if (0.0..=1.0).contains(&floor) {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidSchedule(format!(
            "floor {floor} is outside [0, 1]"
        )))
    }
}

/// `max(floor, initial_rate * decay_factor^(t - 1))`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ExponentialDecay {
    pub decay_factor: f64,
    pub floor: f64,
}

#[typetag::serde]
impl EpsilonSchedule for ExponentialDecay {
    fn rate(&self, t: u64, initial_rate: f64) -> f64 {
        let exponent = t.saturating_sub(1).min(i32::MAX as u64) as i32;
        (initial_rate * self.decay_factor.powi(exponent))
            .max(self.floor)
            .clamp(0.0, 1.0)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        if !(self.decay_factor > 0.0 && self.decay_factor <= 1.0) {
            return Err(ConfigurationError::InvalidSchedule(format!(
                "decay factor {} is outside (0, 1]",
                self.decay_factor
            )));
        }
        check_floor(self.floor)
    }

    fn label(&self) -> String {
        format!("exp-decay={}, floor={}", self.decay_factor, self.floor)
    }
}

/// `max(floor, initial_rate / t)`
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct InverseTimeDecay {
    pub floor: f64,
}

#[typetag::serde]
impl EpsilonSchedule for InverseTimeDecay {
    fn rate(&self, t: u64, initial_rate: f64) -> f64 {
        (initial_rate / t.max(1) as f64)
            .max(self.floor)
            .clamp(0.0, 1.0)
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        check_floor(self.floor)
    }

    fn label(&self) -> String {
        format!("inverse-time, floor={}", self.floor)
    }
}
