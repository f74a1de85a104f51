//! Random number generation for dungeon layout
//!
//! Uses a seeded ChaCha RNG so a layout can be reproduced from its seed.
//! One instance is threaded through every draw of a generation pass.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Layout random number generator
///
/// Wraps ChaCha8Rng and remembers the seed it was built from, so the seed can
/// be reported alongside the finished dungeon.
#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl DungeonRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform value in `lo..hi`
    ///
    /// Returns `lo` if the range is empty.
    pub fn range(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        self.rng.gen_range(lo..hi)
    }

    /// Uniform index into a collection of `len` items
    ///
    /// Returns 0 if `len` is 0.
    pub fn index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.rng.gen_range(0..len)
    }
}

impl Default for DungeonRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
