use super::arm::MeanArm;
use super::policy::{argmax, check_n_arms, Policy, PolicyStats};
use super::schedule::EpsilonSchedule;

use crate::environment::{ArmIndex, Reward};
use crate::errors::{ConfigurationError, PolicyError};
use crate::rng::SeededRng;

use rand::Rng;

#[derive(Debug)]
pub struct EpsilonGreedy {
    arms: Vec<MeanArm>,
    epsilon: f64,
    schedule: Option<Box<dyn EpsilonSchedule>>,
    rng: SeededRng,
}

impl EpsilonGreedy {
    pub fn new(
        n_arms: usize,
        epsilon: f64,
        schedule: Option<Box<dyn EpsilonSchedule>>,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        check_n_arms(n_arms)?;
        if !(0.0..=1.0).contains(&epsilon) {
            return Err(ConfigurationError::InvalidEpsilon(epsilon));
        }
        if let Some(schedule) = &schedule {
            schedule.validate()?;
        }

        Ok(Self {
            arms: vec![MeanArm::default(); n_arms],
            epsilon,
            schedule,
            rng: SeededRng::new(seed),
        })
    }

    pub fn epsilon_at(&self, t: u64) -> f64 {
        self.schedule
            .as_ref()
            .map_or(self.epsilon, |schedule| schedule.rate(t, self.epsilon))
    }

    pub fn values(&self) -> Vec<f64> {
        self.arms.iter().map(|arm| arm.value).collect()
    }
}

impl Policy for EpsilonGreedy {
    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_action(&mut self, t: u64) -> Result<ArmIndex, PolicyError> {
        let epsilon = self.epsilon_at(t);
        let rng = self.rng.get_rng();

        if rng.random::<f64>() < epsilon {
            Ok(rng.random_range(0..self.arms.len()))
        } else {
            argmax(self.arms.iter().map(|arm| arm.value)).ok_or(PolicyError::NoArmsAvailable)
        }
    }

    fn update(&mut self, arm_id: ArmIndex, reward: Reward) -> Result<(), PolicyError> {
        self.arms
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?
            .update(reward);

        Ok(())
    }

    fn reset(&mut self) {
        self.arms.iter_mut().for_each(|arm| arm.reset());
        self.rng.reset();
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(|arm| arm.stats()).collect(),
        }
    }
}
