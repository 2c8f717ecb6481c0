//! Model constants: defaults applied to a [`crate::types::DrawRequest`],
//! the enumeration ceiling, and validator tolerances.
//!
//! Notation used throughout the crate:
//! - N = entrants (pool size)
//! - F = friends (marked entrants)
//! - W = winners (sequential draws without replacement)
//! - T = tickets per friend win

/// Default number of draws W when the request omits `winners`.
pub const DEFAULT_WINNERS: u32 = 1;

/// Default group size F when the request omits `friends`.
pub const DEFAULT_FRIENDS: u32 = 1;

/// Tickets per win when the request omits `tickets`: effectively unlimited,
/// so a single friend win always covers the whole group.
///
/// Large enough that `wins * UNLIMITED_TICKETS` exceeds any valid F, small
/// enough that the product stays far from `u64::MAX`.
pub const UNLIMITED_TICKETS: u32 = u32::MAX;

/// Practical ceiling on W for full enumeration.
///
/// `generate_cases` is O(2^W) in time and memory. Each scenario is a `Vec`
/// header plus its own heap block, so 2^24 scenarios take roughly 1 GB.
/// Above this, `generate_cases` refuses and only the closed form applies.
pub const MAX_ENUMERATED_DRAWS: usize = 24;

/// Largest W that [`crate::types::Method::Auto`] enumerates (2^16 scenarios,
/// a few MB). Past it the closed form gives the same answer far cheaper.
pub const AUTO_ENUMERATION_LIMIT: usize = 16;

/// Tolerance for the conservation check: Σ P(s) over all scenarios = 1.
pub const CONSERVATION_TOLERANCE: f64 = 1e-9;

/// Number of Monte-Carlo trials the validator runs by default.
pub const SIMULATION_TRIALS: usize = 1_000_000;

/// Absolute tolerance between analytic and simulated probabilities.
pub const SIMULATION_TOLERANCE: f64 = 0.001;

/// Default RNG seed for the validator.
pub const SIMULATION_SEED: u64 = 42;
