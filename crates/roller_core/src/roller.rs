//! The roll generator.

use crate::rng::RollerRng;
use crate::roll::Roll;

/// Produces uniformly distributed six-sided die rolls.
///
/// Owns its [`RollerRng`] directly (concrete type, no trait object), so a
/// roller built from a fixed seed is fully deterministic.
///
/// # Examples
///
/// ```rust
/// use roller_core::DiceRoller;
///
/// let mut roller = DiceRoller::from_seed(42);
/// let rolls = roller.roll_many(10);
/// assert_eq!(rolls.len(), 10);
/// ```
pub struct DiceRoller {
    rng: RollerRng,
}

impl DiceRoller {
    /// Creates a roller from an existing RNG.
    #[inline]
    pub fn new(rng: RollerRng) -> Self {
        Self { rng }
    }

    /// Creates a roller with a deterministic seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self::new(RollerRng::from_seed(seed))
    }

    /// Returns the seed of the underlying RNG.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Generates one roll. Generation cannot fail.
    #[inline]
    pub fn roll(&mut self) -> Roll {
        Roll::new_unchecked(self.rng.roll_face())
    }

    /// Generates `n` independent rolls.
    pub fn roll_many(&mut self, n: usize) -> Vec<Roll> {
        (0..n).map(|_| self.roll()).collect()
    }
}
