//! Deterministic random number generation for stick throws.
//!
//! Same seed, same game: every throw in a match is drawn from a single
//! seeded ChaCha8 stream owned by the game, so a seed is a complete
//! record of the chance element. `from_entropy` exists for casual play
//! and still records the seed it drew, keeping every game replayable.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG owned by a game.
///
/// Uses ChaCha8 for speed while maintaining high-quality randomness.
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

    /// Create a new RNG seeded from OS entropy.
    ///
    /// The drawn seed is retained and can be read back with [`seed`],
    /// so even unseeded games can be reproduced afterwards.
    ///
    /// [`seed`]: GameRng::seed
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random::<u64>())
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random boolean with given probability of true.
    pub fn gen_bool(&mut self, probability: f64) -> bool {
        self.inner.gen_bool(probability)
    }
}
