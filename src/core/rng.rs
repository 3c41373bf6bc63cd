//! Deterministic random number generation for bots and simulations.
//!
//! Same seed, same sequence. Each bot in a simulated match takes its own
//! stream via [`GameRng::for_player`], so one bot's draws never shift
//! another's.
//!
//! ```
//! use rust_tbg::core::{GameRng, PlayerId};
//!
//! let mut a = GameRng::new(7).for_player(PlayerId::new(0));
//! let mut b = GameRng::new(7).for_player(PlayerId::new(0));
//! assert_eq!(a.gen_index(100), b.gen_index(100));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::player::PlayerId;

const STREAM_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Seeded ChaCha8 generator.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Independent stream for one player, derived from the seed only.
    #[must_use]
    pub fn for_player(&self, player: PlayerId) -> Self {
        let stream = (player.0 as u64 + 1).wrapping_mul(STREAM_MIX);
        Self::new(self.seed ^ stream)
    }

    /// Uniform index in `0..len`.
    ///
    /// Panics if `len` is zero.
    pub fn gen_index(&mut self, len: usize) -> usize {
        assert!(len > 0, "cannot pick from an empty range");
        self.inner.gen_range(0..len)
    }
}
