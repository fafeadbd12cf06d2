//! Deterministic random number generation for round generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rounds
//! - **Replayable**: The seed is kept so a session can be replayed
//! - **Injectable**: Round generation takes the RNG explicitly
//!
//! ```
//! use type_trivia::core::QuizRng;
//!
//! let mut a = QuizRng::new(42);
//! let mut b = QuizRng::new(42);
//!
//! let mut xs = [1, 2, 3, 4, 5];
//! let mut ys = xs;
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG backing every shuffle in a quiz session.
///
/// Uses ChaCha8 so a seed reproduces the exact same sequence of rounds
/// on every platform.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from OS entropy.
    ///
    /// The drawn seed is still recorded and available via [`QuizRng::seed`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
