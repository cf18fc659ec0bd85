// src/perturbation.rs

use std::sync::OnceLock;

use glam::DVec3;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::{PERTURBATION_AMPLITUDE, PERTURBATION_SEED, PERTURBATION_TABLE_SIZE};

/// Fixed table of tiny offsets used to knock inserted points off exact
/// coplanarity with existing faces.
///
/// There is one table per process. It is filled from a fixed seed the first
/// time it is touched and never written again, so two rebuilds of the same
/// point store always see the same jitter.
pub struct PerturbationTable {
    values: [f64; PERTURBATION_TABLE_SIZE],
}

const MASK: usize = PERTURBATION_TABLE_SIZE - 1;

impl PerturbationTable {
    fn generate(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut values = [0.0; PERTURBATION_TABLE_SIZE];
        for v in values.iter_mut() {
            *v = rng.gen_range(-PERTURBATION_AMPLITUDE..=PERTURBATION_AMPLITUDE);
        }
        Self { values }
    }

    pub fn global() -> &'static PerturbationTable {
        static TABLE: OnceLock<PerturbationTable> = OnceLock::new();
        TABLE.get_or_init(|| Self::generate(PERTURBATION_SEED))
    }

    #[inline]
    pub fn offset(&self, index: usize) -> f64 {
        self.values[index & MASK]
    }

    /// Nudges the point inserted at position `k` by `|p| * offset(3k..3k+3)`.
    pub fn perturb(&self, k: usize, point: DVec3) -> DVec3 {
        let m = point.length();
        let base = k.wrapping_mul(3);
        point
            + m * DVec3::new(
                self.offset(base),
                self.offset(base.wrapping_add(1)),
                self.offset(base.wrapping_add(2)),
            )
    }
}
