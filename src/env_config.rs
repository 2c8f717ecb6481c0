//! Shared environment configuration for the lottery binaries.
//!
//! Reads `LOTTERY_LOG`, `RAYON_NUM_THREADS`, `LOTTERY_SIM_TRIALS` and
//! `LOTTERY_SIM_SEED`.

use tracing_subscriber::EnvFilter;

use crate::constants::{SIMULATION_SEED, SIMULATION_TRIALS};

/// Install the fmt subscriber, filtered by `LOTTERY_LOG` (default `warn`).
///
/// Logs go to stderr so stdout stays clean for results. Safe to call more
/// than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env("LOTTERY_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Read `RAYON_NUM_THREADS` (fallback `OMP_NUM_THREADS`, default: rayon's choice).
/// Tolerates an already-initialized pool. Returns the thread count in use.
pub fn init_rayon_threads() -> usize {
    let requested = std::env::var("RAYON_NUM_THREADS")
        .or_else(|_| std::env::var("OMP_NUM_THREADS"))
        .ok()
        .and_then(|s| s.parse::<usize>().ok());
    if let Some(n) = requested {
        if rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .is_err()
        {
            tracing::debug!("rayon pool already initialized");
        }
    }
    let threads = rayon::current_num_threads();
    tracing::info!(threads, "rayon threads");
    threads
}

/// Read `LOTTERY_SIM_TRIALS` (default [`SIMULATION_TRIALS`]).
pub fn simulation_trials() -> usize {
    parse_var("LOTTERY_SIM_TRIALS").unwrap_or(SIMULATION_TRIALS)
}

/// Read `LOTTERY_SIM_SEED` (default [`SIMULATION_SEED`]).
pub fn simulation_seed() -> u64 {
    parse_var("LOTTERY_SIM_SEED").unwrap_or(SIMULATION_SEED)
}

fn parse_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = std::env::var(name).ok()?;
    match raw.parse() {
        Ok(v) => Some(v),
        Err(_) => {
            tracing::warn!(var = name, value = %raw, "ignoring unparsable environment variable");
            None
        }
    }
}
