use crate::errors::{ConfigurationError, EnvironmentError};
use crate::rng::SeededRng;

use rand::Rng;

pub type ArmIndex = usize;
pub type Reward = f64;

/// Stationary bandit whose arms pay 1 with a fixed hidden probability and 0 otherwise.
#[derive(Debug)]
pub struct BernoulliEnvironment {
    probabilities: Vec<f64>,
    best: (ArmIndex, f64),
    rng: SeededRng,
}

impl BernoulliEnvironment {
    pub fn new(probabilities: Vec<f64>, seed: u64) -> Result<Self, ConfigurationError> {
        if probabilities.is_empty() {
            return Err(ConfigurationError::NoArms);
        }

        if let Some((arm_id, &value)) = probabilities
            .iter()
            .enumerate()
            .find(|(_, p)| !(0.0..=1.0).contains(*p))
        {
            return Err(ConfigurationError::InvalidProbability { arm_id, value });
        }

        // strict comparison keeps the lowest index among ties
        let best = probabilities
            .iter()
            .enumerate()
            .fold((0, probabilities[0]), |best, (arm_id, &p)| {
                if p > best.1 {
                    (arm_id, p)
                } else {
                    best
                }
            });

        Ok(Self {
            probabilities,
            best,
            rng: SeededRng::new(seed),
        })
    }

    pub fn step(&mut self, arm_id: ArmIndex) -> Result<Reward, EnvironmentError> {
        let p = self
            .mean(arm_id)
            .ok_or(EnvironmentError::OutOfRange {
                arm_id,
                n_arms: self.n_arms(),
            })?;

        let reward = (self.rng.get_rng().random::<f64>() < p) as u8 as f64;
        Ok(reward)
    }

    pub fn best(&self) -> (ArmIndex, f64) {
        self.best
    }

    pub fn mean(&self, arm_id: ArmIndex) -> Option<f64> {
        self.probabilities.get(arm_id).copied()
    }

    pub fn n_arms(&self) -> usize {
        self.probabilities.len()
    }

    pub fn probabilities(&self) -> &[f64] {
        &self.probabilities
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: u64 = 1234;

    #[test]
    fn reject_empty() {
        assert_eq!(
            BernoulliEnvironment::new(vec![], SEED).err(),
            Some(ConfigurationError::NoArms)
        );
    }

    #[test]
    fn reject_invalid_probability() {
        assert_eq!(
            BernoulliEnvironment::new(vec![0.5, 1.2], SEED).err(),
            Some(ConfigurationError::InvalidProbability {
                arm_id: 1,
                value: 1.2
            })
        );
        assert!(BernoulliEnvironment::new(vec![-0.1], SEED).is_err());
        assert!(BernoulliEnvironment::new(vec![f64::NAN], SEED).is_err());
    }

    #[test]
    fn best_arm() {
        let env = BernoulliEnvironment::new(vec![0.2, 0.7, 0.4], SEED).unwrap();
        assert_eq!(env.best(), (1, 0.7));
    }

    #[test]
    fn best_arm_ties_lowest_index() {
        let env = BernoulliEnvironment::new(vec![0.3, 0.8, 0.8], SEED).unwrap();
        assert_eq!(env.best(), (1, 0.8));
    }

    #[test]
    fn step_out_of_range() {
        let mut env = BernoulliEnvironment::new(vec![0.5, 0.5], SEED).unwrap();
        assert_eq!(
            env.step(2),
            Err(EnvironmentError::OutOfRange {
                arm_id: 2,
                n_arms: 2
            })
        );
    }

    #[test]
    fn step_degenerate_arms() {
        let mut env = BernoulliEnvironment::new(vec![0.0, 1.0], SEED).unwrap();
        for _ in 0..100 {
            assert_eq!(env.step(0), Ok(0.0));
            assert_eq!(env.step(1), Ok(1.0));
        }
    }

    #[test]
    fn step_frequency() {
        let mut env = BernoulliEnvironment::new(vec![0.3], SEED).unwrap();
        let n = 20_000;
        let total: f64 = (0..n).map(|_| env.step(0).unwrap()).sum();
        assert!((total / n as f64 - 0.3).abs() < 0.02);
    }

    #[test]
    fn step_reproducible() {
        let mut env_1 = BernoulliEnvironment::new(vec![0.4, 0.6], SEED).unwrap();
        let mut env_2 = BernoulliEnvironment::new(vec![0.4, 0.6], SEED).unwrap();
        let actions = [0, 1, 1, 0, 1, 0, 0, 1];

        let rewards_1: Vec<_> = actions.iter().map(|&a| env_1.step(a).unwrap()).collect();
        let rewards_2: Vec<_> = actions.iter().map(|&a| env_2.step(a).unwrap()).collect();
        assert_eq!(rewards_1, rewards_2);
    }
}
