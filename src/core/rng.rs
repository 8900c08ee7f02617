//! Deterministic random number generation for move ordering.
//!
//! Alpha-beta examines candidate moves in an order that only affects how
//! much gets pruned, never the result. The order is still drawn from a
//! seeded generator so two searches with the same seed visit the same
//! nodes and report the same counters.
//!
//! ```
//! use ggp_search::core::SearchRng;
//!
//! let mut a = SearchRng::new(7);
//! let mut b = SearchRng::new(7);
//!
//! let mut xs = vec![1, 2, 3, 4, 5];
//! let mut ys = xs.clone();
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG used to order candidate moves.
///
/// ChaCha8 keeps sequences identical across platforms.
#[derive(Clone, Debug)]
pub struct SearchRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl SearchRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Rewind to the start of the seeded sequence.
    pub fn reset(&mut self) {
        self.inner = ChaCha8Rng::seed_from_u64(self.seed);
    }

    /// Permute `items` in place.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.inner);
    }
}
