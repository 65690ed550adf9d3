use rand::{rngs::SmallRng, SeedableRng};

/// Random stream owned by a single policy or environment, remembering its seed so it can be
/// rewound to the start of a run.
#[derive(Clone, Debug)]
pub struct SeededRng {
    seed: u64,
    rng: SmallRng,
}

impl SeededRng {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn reset(&mut self) {
        self.rng = SmallRng::seed_from_u64(self.seed);
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    const SEED: u64 = 1234;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeededRng::new(SEED);
        let mut b = SeededRng::new(SEED);
        let xs: Vec<f64> = (0..16).map(|_| a.get_rng().random()).collect();
        let ys: Vec<f64> = (0..16).map(|_| b.get_rng().random()).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn reset_rewinds() {
        let mut rng = SeededRng::new(SEED);
        let first: u64 = rng.get_rng().random();
        let _: u64 = rng.get_rng().random();

        rng.reset();
        assert_eq!(rng.get_rng().random::<u64>(), first);
        assert_eq!(rng.seed(), SEED);
    }
}
