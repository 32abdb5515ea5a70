//! Deterministic random number generation for rule seeds and sessions.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Signed rule seeds**: Any `i64` is a valid rule seed
//! - **Warm-up**: Rule-seed streams discard a seed-dependent prefix
//! - **Context streams**: Independent sequences for different purposes,
//!   derived only from the seed and a label
//!
//! ## Usage
//!
//! ```
//! use simon_screams::core::PuzzleRng;
//!
//! let session = PuzzleRng::new(42);
//!
//! // Arrangement and flash sequence draw from separate streams
//! let mut colors = session.for_context("arrangement");
//! let mut flashes = session.for_context("sequence");
//! let _ = (colors.gen_range_usize(0..6), flashes.gen_range_usize(0..6));
//!
//! // Same seed and context, same stream
//! let mut again = PuzzleRng::new(42).for_context("arrangement");
//! let mut colors = PuzzleRng::new(42).for_context("arrangement");
//! assert_eq!(again.gen_range_usize(0..1000), colors.gen_range_usize(0..1000));
//! ```

use std::hash::Hasher;
use std::ops::{Range, RangeInclusive};

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHasher;

/// Upper bound (exclusive) on the number of words discarded by [`PuzzleRng::warm_up`].
pub const WARM_UP_LIMIT: usize = 16;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct PuzzleRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl PuzzleRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create the RNG for a signed rule seed.
    ///
    /// Negative seeds are reinterpreted bitwise, so every `i64` maps to a
    /// distinct stream.
    #[must_use]
    pub fn from_rule_seed(seed: i64) -> Self {
        Self::new(seed as u64)
    }

    /// Seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Discard a seed-dependent number of 32-bit words.
    ///
    /// Draws the count from the stream itself, so the amount skipped is a
    /// pure function of the seed. Returns the number of words discarded.
    pub fn warm_up(&mut self) -> usize {
        let skip = self.inner.gen_range(0..WARM_UP_LIMIT);
        for _ in 0..skip {
            self.inner.next_u32();
        }
        skip
    }

    /// Create an independent stream for a specific context.
    ///
    /// The stream seed is an `FxHasher` digest of the seed and the label
    /// bytes, fed as little-endian `u64` words. `FxHasher` mixes at pointer
    /// width, so a replay reproduces only on targets of the same width.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        let mut hasher = FxHasher::default();
        hasher.write_u64(self.seed);
        hasher.write_u64(context.len() as u64);
        for chunk in context.as_bytes().chunks(8) {
            let mut word = [0u8; 8];
            word[..chunk.len()].copy_from_slice(chunk);
            hasher.write_u64(u64::from_le_bytes(word));
        }
        Self::new(hasher.finish())
    }

    /// Generate a random usize in the given half-open range.
    pub fn gen_range_usize(&mut self, range: Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random usize in the given inclusive range.
    pub fn gen_range_inclusive(&mut self, range: RangeInclusive<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }

    /// Uniform random permutation of `0..N`.
    pub fn permutation<const N: usize>(&mut self) -> [usize; N] {
        let mut perm: [usize; N] = std::array::from_fn(|i| i);
        self.shuffle(&mut perm);
        perm
    }
}
