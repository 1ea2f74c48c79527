//! Deterministic random number generation for dealing.
//!
//! A session owns one `GameRng`. Each new game forks a child stream, so a
//! fixed session seed reproduces the same sequence of deals while every
//! "new game" still gets a different shuffle.
//!
//! ```
//! use klondike::core::GameRng;
//!
//! let mut session = GameRng::new(42);
//! let first = session.fork();
//! let second = session.fork();
//! assert_ne!(first.seed(), second.seed());
//!
//! // Forks are deterministic per session seed.
//! let mut again = GameRng::new(42);
//! assert_eq!(again.fork().seed(), first.seed());
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment used to spread fork seeds.
const FORK_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG with forking for per-game streams.
///
/// Uses ChaCha8 for speed while keeping a uniform shuffle.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent, deterministic child stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self
            .seed
            .wrapping_add(self.fork_counter.wrapping_mul(FORK_MIX));
        Self::new(fork_seed)
    }

    /// Shuffle a slice in place (uniform Fisher-Yates).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}
