use super::policy::{argmax, check_n_arms, ArmStats, Policy, PolicyStats};

use crate::environment::{ArmIndex, Reward};
use crate::errors::{ConfigurationError, PolicyError};
use crate::rng::SeededRng;

use rand::Rng;
use rand_distr::{Beta, Distribution};

#[derive(Clone, Debug, PartialEq)]
struct BetaArm {
    alpha: f64,
    beta: f64,
    count: u64,
}

impl BetaArm {
    fn new(alpha: f64, beta: f64) -> Self {
        Self {
            alpha,
            beta,
            count: 0,
        }
    }

    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<f64, PolicyError> {
        let s = Beta::new(self.alpha, self.beta)
            .map_err(|e| PolicyError::SamplingError(e.to_string()))?
            .sample(rng);

        Ok(s)
    }

    fn update(&mut self, reward: Reward) {
        self.alpha += reward;
        self.beta += 1.0 - reward;
        self.count += 1;
    }

    fn stats(&self) -> ArmStats {
        ArmStats {
            pulls: self.count,
            mean_reward: self.alpha / (self.alpha + self.beta),
        }
    }
}

/// Thompson sampling with a Beta prior on each arm's success probability.
#[derive(Clone, Debug)]
pub struct ThompsonSampling {
    alpha0: f64,
    beta0: f64,
    arms: Vec<BetaArm>,
    rng: SeededRng,
}

impl ThompsonSampling {
    pub fn new(
        n_arms: usize,
        alpha0: f64,
        beta0: f64,
        seed: u64,
    ) -> Result<Self, ConfigurationError> {
        check_n_arms(n_arms)?;
        let is_valid = |x: f64| x.is_finite() && x > 0.0;
        if !(is_valid(alpha0) && is_valid(beta0)) {
            return Err(ConfigurationError::InvalidPrior {
                alpha: alpha0,
                beta: beta0,
            });
        }

        Ok(Self {
            alpha0,
            beta0,
            arms: vec![BetaArm::new(alpha0, beta0); n_arms],
            rng: SeededRng::new(seed),
        })
    }

    /// Uniform Beta(1, 1) prior on every arm.
    pub fn with_uniform_prior(n_arms: usize, seed: u64) -> Result<Self, ConfigurationError> {
        Self::new(n_arms, 1.0, 1.0, seed)
    }

    /// Posterior `(alpha, beta)` of every arm.
    pub fn posteriors(&self) -> Vec<(f64, f64)> {
        self.arms.iter().map(|arm| (arm.alpha, arm.beta)).collect()
    }
}

impl Policy for ThompsonSampling {
    fn n_arms(&self) -> usize {
        self.arms.len()
    }

    fn select_action(&mut self, _: u64) -> Result<ArmIndex, PolicyError> {
        // one draw per arm, in arm order, so the stream advances identically every step
        let rng = self.rng.get_rng();
        let samples = self
            .arms
            .iter()
            .map(|arm| arm.sample(rng))
            .collect::<Result<Vec<f64>, PolicyError>>()?;

        argmax(samples).ok_or(PolicyError::NoArmsAvailable)
    }

    fn update(&mut self, arm_id: ArmIndex, reward: Reward) -> Result<(), PolicyError> {
        if !(0.0..=1.0).contains(&reward) {
            return Err(PolicyError::InvalidReward(reward));
        }

        self.arms
            .get_mut(arm_id)
            .ok_or(PolicyError::ArmNotFound(arm_id))?
            .update(reward);

        Ok(())
    }

    fn reset(&mut self) {
        let (alpha0, beta0) = (self.alpha0, self.beta0);
        self.arms
            .iter_mut()
            .for_each(|arm| *arm = BetaArm::new(alpha0, beta0));
        self.rng.reset();
    }

    fn stats(&self) -> PolicyStats {
        PolicyStats {
            arms: self.arms.iter().map(|arm| arm.stats()).collect(),
        }
    }
}
