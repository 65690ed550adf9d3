use super::policy::ArmStats;

use crate::environment::Reward;

/// Running-mean estimate of an arm's reward, shared by the value-based policies.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeanArm {
    pub(super) value: f64,
    pub(super) pulls: u64,
}

impl MeanArm {
    pub fn reset(&mut self) {
        self.value = 0.0;
        self.pulls = 0;
    }

    pub fn update(&mut self, reward: Reward) {
        self.pulls += 1;
        self.value += (reward - self.value) / (self.pulls as f64);
    }

    pub fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.pulls,
            mean_reward: self.value,
        }
    }
}
