//! Pseudo-random number generator wrapper for dice sessions.
//!
//! This module provides [`RollerRng`], a seeded PRNG wrapper offering
//! reproducible face-value generation. The seed is stored alongside the
//! generator so any run can be logged and replayed.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::roll::Roll;

/// Dice-session random number generator.
///
/// Wraps `rand::rngs::StdRng` with static dispatch (no `Box<dyn Rng>`) and
/// keeps the initialisation seed observable for reproducibility reporting.
///
/// # Examples
///
/// ```rust
/// use roller_core::RollerRng;
///
/// let mut rng1 = RollerRng::from_seed(42);
/// let mut rng2 = RollerRng::from_seed(42);
///
/// // Same seed produces identical sequences.
/// assert_eq!(rng1.roll_face(), rng2.roll_face());
/// ```
pub struct RollerRng {
    /// The underlying PRNG instance.
    inner: StdRng,
    /// The seed used for initialisation.
    seed: u64,
}

impl RollerRng {
    /// Creates a new RNG initialised with the given seed.
    ///
    /// The same seed always produces the same sequence of face values,
    /// enabling deterministic tests and replayable sessions.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Creates a new RNG seeded from system entropy.
    ///
    /// A fresh seed is drawn from the thread RNG and then fed through
    /// [`RollerRng::from_seed`], so the effective seed stays observable via
    /// [`RollerRng::seed`] even for entropy-seeded runs.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Returns the seed used for initialisation.
    ///
    /// Useful for logging and for replaying a previous session.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generates a single uniformly distributed face value in `[1, 6]`.
    #[inline]
    pub fn roll_face(&mut self) -> u8 {
        self.inner.gen_range(Roll::MIN_FACE..=Roll::MAX_FACE)
    }
}
