//! Monte-Carlo validator — replays the sequential draw process many times.
//!
//! Each trial performs W draws: on draw j a uniform integer r in [1, N - j]
//! is picked, and the draw is a friend win iff r ≤ (friends who have not won
//! yet). A trial succeeds when `wins * T >= F`. The fraction of successful
//! trials estimates the probability [`crate::api_computations`] computes
//! exactly; the two should agree within
//! [`crate::constants::SIMULATION_TOLERANCE`].
//!
//! Trials run in parallel with rayon. Trial i uses
//! `SmallRng::seed_from_u64(seed + i)`, so a (config, trials, seed) triple
//! always reproduces the same estimate regardless of thread count.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;
use std::time::{Duration, Instant};

use crate::api_computations::evaluate_config;
use crate::constants::SIMULATION_TRIALS;
use crate::error::Result;
use crate::types::{DrawConfiguration, Method};

/// Outcome of a batch of simulated drawings.
#[derive(Clone, Debug, Serialize)]
pub struct SimulationResult {
    pub trials: usize,
    pub successes: usize,
    pub probability: f64,
    #[serde(skip)]
    pub elapsed: Duration,
}

/// Analytic answer next to its simulated estimate.
#[derive(Clone, Debug, Serialize)]
pub struct CrossValidation {
    pub analytic: f64,
    pub simulated: SimulationResult,
    pub tolerance: f64,
    pub plausible: bool,
}

/// Run one drawing; returns the number of friend wins.
#[inline(always)]
fn simulate_trial(config: &DrawConfiguration, rng: &mut SmallRng) -> usize {
    let mut wins = 0u32;
    for j in 0..config.winners {
        let pool = config.entrants - j;
        let r: u32 = rng.random_range(1..=pool);
        if config.friends - wins >= r {
            wins += 1;
        }
    }
    wins as usize
}

/// Simulate `trials` independent drawings of `config` in parallel.
pub fn simulate_drawing(config: &DrawConfiguration, trials: usize, seed: u64) -> SimulationResult {
    let start = Instant::now();

    let successes = (0..trials)
        .into_par_iter()
        .filter(|&i| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            config.is_sufficient(simulate_trial(config, &mut rng))
        })
        .count();

    let elapsed = start.elapsed();
    let probability = if trials == 0 {
        0.0
    } else {
        successes as f64 / trials as f64
    };

    tracing::debug!(
        trials,
        successes,
        probability,
        elapsed_ms = elapsed.as_secs_f64() * 1000.0,
        "simulated drawings"
    );

    SimulationResult {
        trials,
        successes,
        probability,
        elapsed,
    }
}

/// True when `analytic` lies strictly within `tolerance` of `simulated`.
pub fn is_plausible(analytic: f64, simulated: f64, tolerance: f64) -> bool {
    analytic < simulated + tolerance && analytic > simulated - tolerance
}

/// Trials needed so that `tolerance` spans `sigmas` standard errors of an
/// estimate of `probability`. Never fewer than [`SIMULATION_TRIALS`].
pub fn recommended_trials(probability: f64, tolerance: f64, sigmas: f64) -> usize {
    let variance = probability * (1.0 - probability);
    let needed = (sigmas * sigmas * variance / (tolerance * tolerance)).ceil();
    (needed as usize).max(SIMULATION_TRIALS)
}

/// Compute `config` analytically and by simulation, and compare.
pub fn cross_validate(
    config: &DrawConfiguration,
    method: Method,
    trials: usize,
    seed: u64,
    tolerance: f64,
) -> Result<CrossValidation> {
    let analytic = evaluate_config(config, method)?.probability;
    let simulated = simulate_drawing(config, trials, seed);
    let plausible = is_plausible(analytic, simulated.probability, tolerance);
    if !plausible {
        tracing::warn!(
            analytic,
            simulated = simulated.probability,
            tolerance,
            "analytic probability outside simulation tolerance"
        );
    }
    Ok(CrossValidation {
        analytic,
        simulated,
        tolerance,
        plausible,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trial_wins_bounded() {
        let cfg = DrawConfiguration::new(20, 3, 10, 1).unwrap();
        let mut rng = SmallRng::seed_from_u64(42);
        for _ in 0..1000 {
            let wins = simulate_trial(&cfg, &mut rng);
            assert!(wins <= 3);
        }
    }

    #[test]
    fn test_drawing_everyone_always_wins() {
        let cfg = DrawConfiguration::new(6, 6, 6, 1).unwrap();
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(simulate_trial(&cfg, &mut rng), 6);
    }

    #[test]
    fn test_simulation_deterministic() {
        let cfg = DrawConfiguration::new(50, 2, 5, 1).unwrap();
        let a = simulate_drawing(&cfg, 10_000, 123);
        let b = simulate_drawing(&cfg, 10_000, 123);
        assert_eq!(a.successes, b.successes);
    }

    #[test]
    fn test_zero_trials() {
        let cfg = DrawConfiguration::new(10, 1, 1, 1).unwrap();
        let r = simulate_drawing(&cfg, 0, 1);
        assert_eq!(r.probability, 0.0);
    }

    #[test]
    fn test_is_plausible_is_strict() {
        assert!(is_plausible(0.0100, 0.0105, 0.001));
        assert!(!is_plausible(0.0100, 0.0112, 0.001));
        assert!(!is_plausible(0.5, 0.1, 0.001));
    }

    #[test]
    fn test_recommended_trials() {
        assert_eq!(recommended_trials(0.0, 0.001, 5.0), SIMULATION_TRIALS);
        // p = 0.5, 5 sigma: 25 * 0.25 / 1e-6
        let n = recommended_trials(0.5, 0.001, 5.0);
        assert!((6_249_999..=6_250_001).contains(&n), "n={n}");
    }
}
