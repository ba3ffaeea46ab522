//! Deterministic random number generation for boards and move selection.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical hazard layouts and moves
//! - **Forkable**: Independent per-game streams for batch runs
//! - **Context streams**: Hazard placement and blind-move choice never share
//!   a sequence, so changing one does not perturb the other
//!
//! ## Usage
//!
//! ```
//! use minefield_kb::core::SweepRng;
//!
//! let rng = SweepRng::new(42);
//! let mut placement = rng.for_context("placement");
//! let mut placement2 = SweepRng::new(42).for_context("placement");
//!
//! let mut a = vec![1, 2, 3, 4, 5];
//! let mut b = a.clone();
//! placement.shuffle(&mut a);
//! placement2.shuffle(&mut b);
//! assert_eq!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Deterministic RNG built on ChaCha8.
#[derive(Clone, Debug)]
pub struct SweepRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl SweepRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    /// Used to give every game of a batch its own seed.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    /// The context seed is FNV-1a over the seed's little-endian bytes and
    /// the context's bytes, so it is stable across platforms and toolchains.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let context_seed = self
            .seed
            .to_le_bytes()
            .iter()
            .chain(context.as_bytes())
            .fold(FNV_OFFSET, |hash, &byte| (hash ^ u64::from(byte)).wrapping_mul(FNV_PRIME));

        Self {
            inner: ChaCha8Rng::seed_from_u64(context_seed),
            seed: context_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut SweepRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..32).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = SweepRng::new(42);
        let mut rng2 = SweepRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = SweepRng::new(1);
        let mut rng2 = SweepRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = SweepRng::new(42);
        let mut forked = rng.fork();

        assert_ne!(shuffled(&mut rng), shuffled(&mut forked));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = SweepRng::new(42);
        let mut rng2 = SweepRng::new(42);

        let first1 = rng1.fork();
        let first2 = rng2.fork();
        let second1 = rng1.fork();

        assert_eq!(first1.seed(), first2.seed());
        assert_ne!(first1.seed(), second1.seed());
    }

    #[test]
    fn test_context_streams() {
        let rng = SweepRng::new(42);
        let mut placement = rng.for_context("placement");
        let mut moves = rng.for_context("moves");
        let mut placement_again = SweepRng::new(42).for_context("placement");

        let a = shuffled(&mut placement);
        assert_ne!(a, shuffled(&mut moves));
        assert_eq!(a, shuffled(&mut placement_again));
    }

    #[test]
    fn test_context_seed_is_fixed() {
        // Pinned so stored seeds keep reproducing the same games
        assert_eq!(SweepRng::new(42).for_context("placement").seed(), 0x74b0_fb10_41c2_09be);
        assert_ne!(
            SweepRng::new(42).for_context("moves").seed(),
            SweepRng::new(43).for_context("moves").seed()
        );
    }

    #[test]
    fn test_shuffle_keeps_elements() {
        let mut rng = SweepRng::new(42);
        let mut data = shuffled(&mut rng);

        assert_ne!(data, (0..32).collect::<Vec<_>>());
        data.sort();
        assert_eq!(data, (0..32).collect::<Vec<_>>());
    }

    #[test]
    fn test_choose() {
        let mut rng = SweepRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(chosen.is_some());
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }
}
