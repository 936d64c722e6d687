//! Shared source of randomness for reply selection and pacing.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::ops::RangeInclusive;
use std::sync::{Mutex, PoisonError};

/// Seedable random source.
///
/// Production code draws from entropy; tests seed it to replay a run.
#[derive(Debug)]
pub struct RandomSource {
    rng: Mutex<StdRng>,
}

impl RandomSource {
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    fn with_rng<T>(&self, f: impl FnOnce(&mut StdRng) -> T) -> T {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut *rng)
    }

    /// Pick one entry of a fixed pool. An empty pool yields `""`.
    #[must_use]
    pub fn choose(&self, pool: &[&'static str]) -> &'static str {
        self.with_rng(|rng| pool.choose(rng).copied().unwrap_or_default())
    }

    /// True with probability `p`, clamped to `[0, 1]`.
    #[must_use]
    pub fn chance(&self, p: f64) -> bool {
        let p = if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) };
        self.with_rng(|rng| rng.gen_bool(p))
    }

    #[must_use]
    pub fn uniform(&self, range: RangeInclusive<f64>) -> f64 {
        if range.start() >= range.end() {
            return *range.start();
        }
        self.with_rng(|rng| rng.gen_range(range))
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_entropy()
    }
}
