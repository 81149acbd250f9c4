//! The die-outcome value type.

use std::fmt;

/// One simulated six-sided die outcome.
///
/// A `Roll` always holds a face value in `[1, 6]`; construction from a raw
/// integer is validated. The derived ordering compares face values, so a
/// max-heap of rolls yields the largest face first.
///
/// # Examples
///
/// ```rust
/// use roller_core::Roll;
///
/// let high = Roll::new(6).expect("valid face");
/// let low = Roll::new(1).expect("valid face");
/// assert!(high > low);
/// assert_eq!(high.value(), 6);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Roll(u8);

impl Roll {
    /// Smallest face value of a six-sided die.
    pub const MIN_FACE: u8 = 1;

    /// Largest face value of a six-sided die.
    pub const MAX_FACE: u8 = 6;

    /// Creates a roll from a raw face value.
    ///
    /// # Errors
    ///
    /// Returns [`RollError::FaceOutOfRange`] when `face` lies outside
    /// `[1, 6]`.
    pub fn new(face: u8) -> Result<Self, RollError> {
        if (Self::MIN_FACE..=Self::MAX_FACE).contains(&face) {
            Ok(Self(face))
        } else {
            Err(RollError::FaceOutOfRange(face))
        }
    }

    /// Creates a roll from a face value already known to be in range.
    ///
    /// Only the generator uses this; callers outside the crate go through
    /// [`Roll::new`].
    pub(crate) fn new_unchecked(face: u8) -> Self {
        debug_assert!((Self::MIN_FACE..=Self::MAX_FACE).contains(&face));
        Self(face)
    }

    /// Returns the face value.
    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Roll {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error for invalid roll construction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RollError {
    /// Face value outside the valid range `[1, 6]`.
    #[error("face value {0} is outside the valid range [1, 6]")]
    FaceOutOfRange(u8),
}
