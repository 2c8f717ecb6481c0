//! # Lottery — can the group get enough tickets?
//!
//! A lottery draws W winners one at a time, without replacement, from N
//! entrants. F of the entrants are friends. Every draw won by a friend earns
//! the group T tickets; the group is covered once it holds at least F
//! tickets. This crate computes the exact probability of that happening.
//!
//! ## Pipeline
//!
//! | Stage | Module | Description |
//! |-------|--------|-------------|
//! | 1 | [`scenario_generator`] | Enumerate all 2^W win/loss sequences (bit-indexed, parallel) |
//! | 2 | [`scenario_filter`] | Keep sequences with `wins * T >= F` |
//! | 3 | [`scenario_probability`] | Exact probability of one sequence under sampling without replacement |
//! | 4 | [`api_computations`] | Compose 1–3 and sum; entry point [`api_computations::can_we_get_tickets`] |
//!
//! Enumeration is O(2^W) and capped at [`constants::MAX_ENUMERATED_DRAWS`].
//! [`hypergeometric`] gives the same answer in O(min(F, W)) and is used
//! automatically above the cap.
//!
//! ## Validation
//!
//! [`simulation`] replays the drawing with seeded RNGs and checks the
//! analytic result lies within 0.001 of the empirical frequency.
//!
//! ## Model
//!
//! The pool shrinks by one per draw whatever the outcome. A friend who has
//! won is no longer counted among the friends still able to win, so each
//! entrant wins at most once.

pub mod api_computations;
pub mod constants;
pub mod env_config;
pub mod error;
pub mod hypergeometric;
pub mod scenario_filter;
pub mod scenario_generator;
pub mod scenario_probability;
pub mod simulation;
pub mod types;

pub use api_computations::{can_we_get_tickets, can_we_get_tickets_with};
pub use error::{ErrorKind, LotteryError};
pub use types::{Draw, DrawConfiguration, DrawRequest, Method, Scenario, SufficiencyReport};
