use super::arm::MeanArm;
use super::policy::{argmax, check_n_arms, Policy, PolicyStats};

use crate::environment::{ArmIndex, Reward};
use crate::errors::{ConfigurationError, PolicyError};

#[derive(Clone, Debug)]
pub struct Ucb1 {
    arms: Vec<MeanArm>,
    step: u64,
}

impl Ucb1 {
    pub fn new(n_arms: usize) -> Result<Self, ConfigurationError> {
        check_n_arms(n_arms)?;

        Ok(Self {
            arms: vec![MeanArm::default(); n_arms],
            step: 0,
        })
    }

    pub fn step(&self) -> u64 {
        self.step
    }

    fn upper_bound(arm: &MeanArm, step: u64) -> f64 {
        arm.value + (2.0 * (step as f64).ln() / (arm.pulls as f64)).sqrt()
    }
}

impl Policy for Ucb1 {
    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    // the step counter is internal, the caller's `t` is not trusted
    fn select_action(&mut self, _: u64) -> Result<ArmIndex, PolicyError> {
        self.step += 1;

        // every arm is pulled once, in order, before any bound is computed
        if let Some(arm_id) = self.arms.iter().position(|arm| arm.pulls == 0) {
            return Ok(arm_id);
        }

        let step = self.step;
        argmax(self.arms.iter().map(|arm| Self::upper_bound(arm, step)))
            .ok_or(PolicyError::NoArmsAvailable)
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
        self.step = 0;
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(|arm| arm.stats()).collect(),
        }
    }
}
