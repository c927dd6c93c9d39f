//! Deterministic random number generation.
//!
//! Every random choice the engine makes (deck shuffle, recycling, the colour
//! given to a wild that turns up as the first card) goes through a
//! `GameRng`, so a seed reproduces a whole game.
//!
//! ```
//! use uno_engine::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.gen_range_usize(0..100), b.gen_range_usize(0..100));
//!
//! // Independent streams for different purposes
//! let mut colors = a.for_context("colors");
//! let _ = colors.gen_range_usize(0..4);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;
use std::hash::Hasher;

/// Seeded ChaCha8 RNG.
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

    /// The seed this stream was started from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The sub-seed is an `FxHasher` digest of the raw seed and context
    /// bytes, so it is pinned by the `rustc-hash` version rather than the
    /// toolchain's `DefaultHasher`.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write(context.as_bytes());
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        slice.choose(&mut self.inner)
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
            assert_eq!(rng1.gen_range_usize(0..1000), rng2.gen_range_usize(0..1000));
        }
    }

    #[test]
    fn test_context_streams_differ() {
        let rng = GameRng::new(42);
        let mut deck = rng.for_context("deck");
        let mut colors = rng.for_context("colors");

        let seq1: Vec<_> = (0..10).map(|_| deck.gen_range_usize(0..1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| colors.gen_range_usize(0..1000)).collect();

        assert_ne!(seq1, seq2);
        assert_eq!(rng.for_context("deck").seed(), GameRng::new(42).for_context("deck").seed());
    }

    #[test]
    fn test_context_seed_mixes_seed_and_context() {
        let a = GameRng::new(1);
        let b = GameRng::new(2);

        assert_ne!(a.for_context("deck").seed(), b.for_context("deck").seed());
        assert_ne!(a.for_context("deck").seed(), a.for_context("starter").seed());
        assert_ne!(a.for_context("deck").seed(), a.seed());
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = GameRng::new(42);
        let mut data: Vec<u32> = (1..=10).collect();
        let original = data.clone();

        rng.shuffle(&mut data);
        assert_ne!(data, original);

        data.sort_unstable();
        assert_eq!(data, original);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = [1, 2, 3, 4, 5];
        assert!(items.contains(rng.choose(&items).unwrap()));

        let empty: [i32; 0] = [];
        assert!(rng.choose(&empty).is_none());
    }
}
