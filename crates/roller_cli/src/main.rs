//! Roller CLI - command-line dice-roll sessions.
//!
//! Runs one fixed session: ten rolls in, the five largest popped and
//! printed, the remainder drained in descending order.
//!
//! # Usage
//!
//! - `roller` - run a session with an entropy-drawn seed
//! - `roller --seed 42` - run a reproducible session
//! - `roller --verbose` - log the effective seed before rolling

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod error;

pub use error::{CliError, Result};

use roller_core::{run_session, DiceRoller, RollerRng, SessionConfig};

/// Dice-roll session runner
#[derive(Parser)]
#[command(name = "roller")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// RNG seed for a reproducible session (defaults to system entropy)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let rng = match cli.seed {
        Some(seed) => RollerRng::from_seed(seed),
        None => RollerRng::from_entropy(),
    };

    if cli.verbose {
        info!(seed = rng.seed(), "starting dice session");
    }

    let config = SessionConfig::default();
    let mut roller = DiceRoller::new(rng);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_session(&config, &mut roller, &mut out)?;

    Ok(())
}
