use super::epsilon_greedy::EpsilonGreedy;
use super::schedule::EpsilonSchedule;
use super::thompson_sampling::ThompsonSampling;
use super::ucb::Ucb1;

use crate::environment::{ArmIndex, Reward};
use crate::errors::{ConfigurationError, PolicyError};

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ArmStats {
    pub pulls: u64,
    pub mean_reward: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PolicyStats {
    pub arms: Vec<ArmStats>,
}

fn default_prior() -> f64 {
    1.0
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(tag = "type")]
pub enum PolicyType {
    EpsilonGreedy {
        epsilon: f64,
        #[serde(default)]
        schedule: Option<Box<dyn EpsilonSchedule>>,
        seed: u64,
    },
    Ucb1,
    ThompsonSampling {
        #[serde(default = "default_prior")]
        alpha0: f64,
        #[serde(default = "default_prior")]
        beta0: f64,
        seed: u64,
    },
}

impl PolicyType {
    pub fn name(&self) -> String {
        match self {
            PolicyType::EpsilonGreedy {
                epsilon,
                schedule: None,
                ..
            } => format!("EpsilonGreedy(eps={epsilon})"),
            PolicyType::EpsilonGreedy {
                epsilon,
                schedule: Some(schedule),
                ..
            } => format!("EpsilonGreedy(eps={epsilon}, {})", schedule.label()),
            PolicyType::Ucb1 => "UCB1".to_string(),
            PolicyType::ThompsonSampling { alpha0, beta0, .. } => {
                format!("ThompsonSampling(alpha0={alpha0}, beta0={beta0})")
            }
        }
    }

    pub fn into_policy(self, n_arms: usize) -> Result<Box<dyn Policy>, ConfigurationError> {
        let policy: Box<dyn Policy> = match self {
            PolicyType::EpsilonGreedy {
                epsilon,
                schedule,
                seed,
            } => Box::new(EpsilonGreedy::new(n_arms, epsilon, schedule, seed)?),
            PolicyType::Ucb1 => Box::new(Ucb1::new(n_arms)?),
            PolicyType::ThompsonSampling {
                alpha0,
                beta0,
                seed,
            } => Box::new(ThompsonSampling::new(n_arms, alpha0, beta0, seed)?),
        };

        Ok(policy)
    }
}

/// Action-selection contract shared by every policy. Arms are indexed `0..n_arms()`.
pub trait Policy: Debug {
    fn n_arms(&self) -> usize;
    /// `t` is the 1-based step of the current run.
    fn select_action(&mut self, t: u64) -> Result<ArmIndex, PolicyError>;
    fn update(&mut self, arm_id: ArmIndex, reward: Reward) -> Result<(), PolicyError>;
    /// Restore the state right after construction, random stream included.
    fn reset(&mut self);
    fn stats(&self) -> PolicyStats;
}

/// Index of the largest value, keeping the lowest index among ties.
pub(crate) fn argmax<I>(values: I) -> Option<ArmIndex>
where
    I: IntoIterator<Item = f64>,
{
    values
        .into_iter()
        .enumerate()
        .fold(None, |best: Option<(ArmIndex, f64)>, (arm_id, value)| {
            match best {
                Some((_, best_value)) if value <= best_value || value.is_nan() => best,
                _ => Some((arm_id, value)),
            }
        })
        .map(|(arm_id, _)| arm_id)
}

pub(crate) fn check_n_arms(n_arms: usize) -> Result<(), ConfigurationError> {
    if n_arms == 0 {
        Err(ConfigurationError::NoArms)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policies::schedule::ExponentialDecay;

    #[test]
    fn argmax_lowest_index() {
        assert_eq!(argmax(vec![0.0, 0.0, 0.0]), Some(0));
        assert_eq!(argmax(vec![0.1, 0.5, 0.5]), Some(1));
        assert_eq!(argmax(vec![0.9, 0.5, 0.9]), Some(0));
        assert_eq!(argmax(Vec::new()), None);
    }

    #[test]
    fn argmax_skips_nan() {
        assert_eq!(argmax(vec![f64::NAN, 0.2]), Some(1));
    }

    #[test]
    fn into_policy() {
        let policy_types = vec![
            PolicyType::EpsilonGreedy {
                epsilon: 0.1,
                schedule: None,
                seed: 0,
            },
            PolicyType::Ucb1,
            PolicyType::ThompsonSampling {
                alpha0: 1.0,
                beta0: 1.0,
                seed: 1,
            },
        ];

        for policy_type in policy_types {
            let policy = policy_type.into_policy(4).unwrap();
            assert_eq!(policy.n_arms(), 4);
            assert_eq!(policy.stats().arms.len(), 4);
        }
    }

    #[test]
    fn into_policy_invalid() {
        let policy_type = PolicyType::EpsilonGreedy {
            epsilon: 1.5,
            schedule: None,
            seed: 0,
        };
        assert_eq!(
            policy_type.into_policy(2).err(),
            Some(ConfigurationError::InvalidEpsilon(1.5))
        );
        assert_eq!(
            PolicyType::Ucb1.into_policy(0).err(),
            Some(ConfigurationError::NoArms)
        );
    }

    #[test]
    fn deserialize_policy_types() {
        let raw = r#"[
            {"type": "EpsilonGreedy", "epsilon": 0.2, "seed": 0,
             "schedule": {"type": "ExponentialDecay", "decay_factor": 0.9995, "floor": 0.01}},
            {"type": "Ucb1"},
            {"type": "ThompsonSampling", "seed": 1}
        ]"#;
        let policy_types: Vec<PolicyType> = serde_json::from_str(raw).unwrap();

        match &policy_types[0] {
            PolicyType::EpsilonGreedy {
                schedule: Some(schedule),
                ..
            } => assert_eq!(schedule.rate(1, 0.2), 0.2),
            other => panic!("unexpected policy type {other:?}"),
        }
        assert!(matches!(policy_types[1], PolicyType::Ucb1));
        assert!(matches!(
            policy_types[2],
            PolicyType::ThompsonSampling {
                alpha0,
                beta0,
                seed: 1
            } if alpha0 == 1.0 && beta0 == 1.0
        ));
    }

    #[test]
    fn name() {
        let policy_type = PolicyType::EpsilonGreedy {
            epsilon: 0.2,
            schedule: Some(Box::new(ExponentialDecay {
                decay_factor: 0.9995,
                floor: 0.01,
            })),
            seed: 0,
        };
        assert_eq!(policy_type.name(), "EpsilonGreedy(eps=0.2, exp-decay=0.9995, floor=0.01)");
        assert_eq!(PolicyType::Ucb1.name(), "UCB1");
    }
}
