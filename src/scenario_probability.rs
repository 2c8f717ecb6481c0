//! Exact probability of one scenario under sequential sampling without replacement.
//!
//! A pool of N entrants holds F friends. Draw i (0-based) picks uniformly from
//! the N - i entrants still in the pool. With r friends not yet drawn:
//!
//! ```text
//! P(draw i = FriendWin) = r / (N - i)        then r -= 1
//! P(draw i = Other)     = 1 - r / (N - i)
//! ```
//!
//! The scenario's probability is the product over its draws. A friend who has
//! won leaves the pool and no longer counts towards r, so each entrant wins at
//! most once. Once r hits 0, any later FriendWin contributes a factor of 0.

use crate::error::{LotteryError, Result};
use crate::types::{Draw, Scenario};

/// Probability of `scenario` for `friends` marked entrants in a pool of `entrants`.
///
/// Fails with [`LotteryError::ExhaustedPool`] if the scenario has more draws
/// than the pool has entrants, and with [`LotteryError::FriendsOutOfRange`]
/// if `friends > entrants`.
pub fn calculate_scenario_probability(
    scenario: &Scenario,
    friends: u32,
    entrants: u32,
) -> Result<f64> {
    if entrants == 0 {
        return Err(LotteryError::NonPositiveEntrants { entrants: 0 });
    }
    if friends > entrants {
        return Err(LotteryError::FriendsOutOfRange {
            friends: friends as i64,
            entrants: entrants as i64,
        });
    }
    if scenario.len() > entrants as usize {
        return Err(LotteryError::ExhaustedPool {
            draw: entrants as usize,
            entrants,
        });
    }

    let mut remaining = friends;
    let mut probability = 1.0f64;

    for (i, &draw) in scenario.draws().iter().enumerate() {
        let pool = (entrants as usize - i) as f64;
        let p_friend = remaining as f64 / pool;
        match draw {
            Draw::FriendWin => {
                if remaining == 0 {
                    return Ok(0.0);
                }
                probability *= p_friend;
                remaining -= 1;
            }
            Draw::Other => {
                probability *= 1.0 - p_friend;
            }
        }
    }

    Ok(probability)
}
