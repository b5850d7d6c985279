//! Random source used by the sampler and generator.
//!
//! There is no process-wide RNG: every sampling call takes `&mut GeoRng`
//! explicitly.  Production callers create one with
//! [`GeoRng::from_entropy`]; tests and reproducible runs use
//! [`GeoRng::new`] with a fixed seed.
//!
//! `GeoRng` is `Send` but not meant to be shared.  Concurrent generators each
//! hold their own, optionally derived from a root via [`GeoRng::child`].

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Seedable random source for coordinate sampling and city picks.
pub struct GeoRng(SmallRng);

impl GeoRng {
    /// Deterministic RNG from a fixed seed.
    pub fn new(seed: u64) -> Self {
        GeoRng(SmallRng::seed_from_u64(seed))
    }

    /// Non-deterministic RNG seeded from the operating system.
    pub fn from_entropy() -> Self {
        GeoRng(SmallRng::from_entropy())
    }

    /// Seeded when `seed` is `Some`, entropy-backed otherwise.
    pub fn from_seed_opt(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => GeoRng::new(s),
            None => GeoRng::from_entropy(),
        }
    }

    /// Derive an independent child stream, e.g. one per concurrent caller.
    pub fn child(&mut self, offset: u64) -> GeoRng {
        let child_seed: u64 = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        GeoRng(SmallRng::seed_from_u64(child_seed))
    }

    /// Uniform `f64` in the closed interval `[0, 1]`.
    #[inline]
    pub fn unit(&mut self) -> f64 {
        self.0.gen_range(0.0..=1.0)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
