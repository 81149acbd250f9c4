//! Session orchestration and output formatting.
//!
//! A session runs the full pipeline: generate-and-print, buffer insert,
//! fixed-count pop-and-print ("removed" phase), then drain the remainder as
//! one concatenated line.

use std::io::Write;

use crate::buffer::PriorityBuffer;
use crate::roll::Roll;
use crate::roller::DiceRoller;

/// Number of rolls generated per session.
pub const DEFAULT_ROLL_COUNT: usize = 10;

/// Number of rolls removed explicitly before the drain phase.
pub const DEFAULT_REMOVAL_COUNT: usize = 5;

/// Separator printed between the roll phase and the removal phase.
const SEPARATOR: &str = "######################################";

/// Dice session configuration.
///
/// Immutable once constructed; [`SessionConfig::new`] validates that both
/// counts are non-zero and that the removal count does not exceed the roll
/// count. The default is the fixed 10-roll, 5-removal session.
///
/// # Examples
///
/// ```rust
/// use roller_core::SessionConfig;
///
/// let config = SessionConfig::default();
/// assert_eq!(config.roll_count(), 10);
/// assert_eq!(config.removal_count(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    /// Number of rolls to generate.
    roll_count: usize,
    /// Number of rolls popped in the explicit removal phase.
    removal_count: usize,
}

impl SessionConfig {
    /// Creates a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when either count is zero or when
    /// `removal_count` exceeds `roll_count`.
    pub fn new(roll_count: usize, removal_count: usize) -> Result<Self, ConfigError> {
        if roll_count == 0 {
            return Err(ConfigError::ZeroRollCount);
        }
        if removal_count == 0 {
            return Err(ConfigError::ZeroRemovalCount);
        }
        if removal_count > roll_count {
            return Err(ConfigError::RemovalExceedsRolls {
                removal_count,
                roll_count,
            });
        }
        Ok(Self {
            roll_count,
            removal_count,
        })
    }

    /// Returns the number of rolls to generate.
    #[inline]
    pub fn roll_count(&self) -> usize {
        self.roll_count
    }

    /// Returns the number of rolls popped in the explicit removal phase.
    #[inline]
    pub fn removal_count(&self) -> usize {
        self.removal_count
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            roll_count: DEFAULT_ROLL_COUNT,
            removal_count: DEFAULT_REMOVAL_COUNT,
        }
    }
}

/// Session configuration error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// Roll count of zero; a session must generate at least one roll.
    #[error("roll count must be non-zero")]
    ZeroRollCount,

    /// Removal count of zero; a session must remove at least one roll.
    #[error("removal count must be non-zero")]
    ZeroRemovalCount,

    /// More removals requested than rolls generated.
    #[error("removal count {removal_count} exceeds roll count {roll_count}")]
    RemovalExceedsRolls {
        /// Requested removal count.
        removal_count: usize,
        /// Configured roll count.
        roll_count: usize,
    },
}

/// Session runtime error.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// Writing session output failed.
    #[error("failed to write session output")]
    Io(#[from] std::io::Error),
}

/// Record of a completed session.
///
/// Captures what was generated and in which phase each roll left the
/// buffer, so properties can be asserted without scraping the text output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionReport {
    /// All generated rolls, in generation order.
    pub rolls: Vec<Roll>,
    /// Rolls popped in the explicit removal phase, in pop order.
    pub removed: Vec<Roll>,
    /// Rolls drained after the removal phase, in pop order.
    pub drained: Vec<Roll>,
}

/// Runs one dice session, writing its output to `out`.
///
/// Phases:
/// 1. Generate `roll_count` rolls, printing `roll {i}: {face}` for each and
///    inserting it into the priority buffer.
/// 2. Print the separator line.
/// 3. Pop `removal_count` times, printing `removed {face}` per pop. The pop
///    is guarded by an emptiness check; the guard cannot trigger under a
///    validated configuration.
/// 4. Drain the remaining rolls in descending order onto a single line with
///    no separators.
///
/// # Errors
///
/// Returns [`SessionError::Io`] when writing to `out` fails.
///
/// # Examples
///
/// ```rust
/// use roller_core::{run_session, DiceRoller, SessionConfig};
///
/// let mut roller = DiceRoller::from_seed(42);
/// let mut out = Vec::new();
/// let report = run_session(&SessionConfig::default(), &mut roller, &mut out)
///     .expect("write to Vec");
///
/// assert_eq!(report.rolls.len(), 10);
/// assert_eq!(report.removed.len(), 5);
/// assert_eq!(report.drained.len(), 5);
/// ```
pub fn run_session<W: Write>(
    config: &SessionConfig,
    roller: &mut DiceRoller,
    out: &mut W,
) -> Result<SessionReport, SessionError> {
    let mut buffer = PriorityBuffer::with_capacity(config.roll_count());
    let mut rolls = Vec::with_capacity(config.roll_count());

    for i in 1..=config.roll_count() {
        let roll = roller.roll();
        writeln!(out, "roll {}: {}", i, roll)?;
        buffer.push(roll);
        rolls.push(roll);
    }

    writeln!(out, "{}", SEPARATOR)?;

    let mut removed = Vec::with_capacity(config.removal_count());
    for _ in 0..config.removal_count() {
        if let Some(roll) = buffer.pop_max() {
            writeln!(out, "removed {}", roll)?;
            removed.push(roll);
        }
    }

    let mut drained = Vec::with_capacity(buffer.len());
    while let Some(roll) = buffer.pop_max() {
        write!(out, "{}", roll)?;
        drained.push(roll);
    }
    writeln!(out)?;

    Ok(SessionReport {
        rolls,
        removed,
        drained,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_with_seed(seed: u64) -> (SessionReport, String) {
        let mut roller = DiceRoller::from_seed(seed);
        let mut out = Vec::new();
        let report = run_session(&SessionConfig::default(), &mut roller, &mut out)
            .expect("write to Vec cannot fail");
        (report, String::from_utf8(out).expect("output is UTF-8"))
    }

    #[test]
    fn test_config_validation() {
        assert!(SessionConfig::new(10, 5).is_ok());
        assert!(SessionConfig::new(1, 1).is_ok());
        assert_eq!(SessionConfig::new(0, 5), Err(ConfigError::ZeroRollCount));
        assert_eq!(SessionConfig::new(10, 0), Err(ConfigError::ZeroRemovalCount));
        assert_eq!(
            SessionConfig::new(5, 10),
            Err(ConfigError::RemovalExceedsRolls {
                removal_count: 10,
                roll_count: 5,
            })
        );
    }

    #[test]
    fn test_default_config_is_ten_five() {
        let config = SessionConfig::default();
        assert_eq!(config.roll_count(), DEFAULT_ROLL_COUNT);
        assert_eq!(config.removal_count(), DEFAULT_REMOVAL_COUNT);
        assert_eq!(
            SessionConfig::new(DEFAULT_ROLL_COUNT, DEFAULT_REMOVAL_COUNT),
            Ok(config)
        );
    }

    #[test]
    fn test_phase_counts() {
        let (report, _) = run_with_seed(42);

        assert_eq!(report.rolls.len(), 10);
        assert_eq!(report.removed.len(), 5);
        assert_eq!(report.drained.len(), 5);
    }

    #[test]
    fn test_removed_are_the_five_largest() {
        let (report, _) = run_with_seed(42);

        let mut expected: Vec<Roll> = report.rolls.clone();
        expected.sort_unstable_by(|a, b| b.cmp(a));

        assert_eq!(report.removed, &expected[..5]);
        assert_eq!(report.drained, &expected[5..]);
    }

    #[test]
    fn test_pop_phases_are_non_increasing() {
        let (report, _) = run_with_seed(1234);

        assert!(report.removed.windows(2).all(|w| w[0] >= w[1]));
        assert!(report.drained.windows(2).all(|w| w[0] >= w[1]));
        // The drain continues where the removal phase left off.
        assert!(report.removed.last() >= report.drained.first());
    }

    #[test]
    fn test_output_shape() {
        let (report, output) = run_with_seed(42);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 17);
        for (i, line) in lines[..10].iter().enumerate() {
            assert_eq!(
                *line,
                format!("roll {}: {}", i + 1, report.rolls[i]),
                "roll line {} malformed",
                i + 1
            );
        }
        assert_eq!(lines[10], SEPARATOR);
        for (i, line) in lines[11..16].iter().enumerate() {
            assert_eq!(*line, format!("removed {}", report.removed[i]));
        }

        let concatenated: String = report.drained.iter().map(Roll::to_string).collect();
        assert_eq!(lines[16], concatenated);
        assert!(output.ends_with('\n'));
    }

    #[test]
    fn test_separator_is_38_hashes() {
        assert_eq!(SEPARATOR.len(), 38);
        assert!(SEPARATOR.bytes().all(|b| b == b'#'));
    }

    #[test]
    fn test_same_seed_same_output() {
        let (report_a, output_a) = run_with_seed(777);
        let (report_b, output_b) = run_with_seed(777);

        assert_eq!(report_a, report_b);
        assert_eq!(output_a, output_b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let (report_a, _) = run_with_seed(1);
        let (report_b, _) = run_with_seed(2);

        // Ten rolls agreeing across two seeds would be a 1-in-6^10 fluke.
        assert_ne!(report_a.rolls, report_b.rolls);
    }
}
