//! Deterministic random number generation for deck shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Per-player streams**: Each seat shuffles from its own stream, so one
//!   player's deck order does not depend on how many cards another holds
//!
//! ```
//! use rust_ccg_match::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_index_inclusive(9), b.gen_index_inclusive(9));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Derive an independent stream, e.g. one per player seat.
    #[must_use]
    pub fn stream(&self, stream: u64) -> Self {
        let stream_seed = self
            .seed
            .wrapping_add(stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(stream_seed)
    }

    /// Seed this RNG was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly pick an index in `0..=upper`.
    pub fn gen_index_inclusive(&mut self, upper: usize) -> usize {
        self.inner.gen_range(0..=upper)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.gen_index_inclusive(1000), rng2.gen_index_inclusive(1000));
        }
    }

    #[test]
    fn test_index_stays_in_range() {
        let mut rng = GameRng::new(7);

        for _ in 0..1000 {
            assert!(rng.gen_index_inclusive(3) <= 3);
        }
        assert_eq!(rng.gen_index_inclusive(0), 0);
    }

    #[test]
    fn test_streams_differ() {
        let rng = GameRng::new(42);
        let mut s0 = rng.stream(0);
        let mut s1 = rng.stream(1);

        let seq0: Vec<_> = (0..10).map(|_| s0.gen_index_inclusive(1000)).collect();
        let seq1: Vec<_> = (0..10).map(|_| s1.gen_index_inclusive(1000)).collect();

        assert_ne!(seq0, seq1);
        assert_eq!(rng.stream(0).seed(), rng.stream(0).seed());
    }
}
