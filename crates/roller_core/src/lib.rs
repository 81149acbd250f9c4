//! Dice-roll session engine.
//!
//! This crate implements a small simulation pipeline: a seeded roller
//! produces six-sided die outcomes, a max-heap priority buffer collects
//! them, and a session drains the buffer in two phases (an explicit
//! "removed" phase followed by a concatenated drain of the remainder).
//!
//! # Layout
//!
//! - [`rng`] - Seeded PRNG wrapper ([`RollerRng`])
//! - [`roll`] - The [`Roll`] value type and its validation
//! - [`roller`] - The [`DiceRoller`] generator
//! - [`buffer`] - The [`PriorityBuffer`] max-heap container
//! - [`session`] - Orchestration and output formatting
//!
//! # Examples
//!
//! ```rust
//! use roller_core::{run_session, DiceRoller, SessionConfig};
//!
//! let config = SessionConfig::default();
//! let mut roller = DiceRoller::from_seed(42);
//! let mut out = Vec::new();
//!
//! let report = run_session(&config, &mut roller, &mut out).expect("write to Vec");
//! assert_eq!(report.removed.len() + report.drained.len(), 10);
//! ```

pub mod buffer;
pub mod rng;
pub mod roll;
pub mod roller;
pub mod session;

pub use buffer::PriorityBuffer;
pub use rng::RollerRng;
pub use roll::{Roll, RollError};
pub use roller::DiceRoller;
pub use session::{
    run_session, ConfigError, SessionConfig, SessionError, SessionReport, DEFAULT_REMOVAL_COUNT,
    DEFAULT_ROLL_COUNT,
};
