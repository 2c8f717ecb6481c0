//! Closed-form sufficiency probability via the hypergeometric distribution.
//!
//! The number of friend wins K after W draws without replacement from N
//! entrants holding F friends is hypergeometric:
//!
//! ```text
//! P(K = k) = C(F, k) · C(N - F, W - k) / C(N, W),   k ∈ [max(0, W - (N - F)), min(F, W)]
//! ```
//!
//! Summing the per-scenario products of [`crate::scenario_probability`] over
//! every scenario with k wins gives exactly this pmf, so
//! `P(K * T >= F)` equals the enumerate-filter-sum pipeline in
//! O(min(F, W)) instead of O(2^W).
//!
//! ## Numerics
//!
//! Binomial coefficients overflow f64 long before realistic pool sizes, so
//! weights are built from the term ratio
//!
//! ```text
//! P(k + 1) / P(k) = (F - k)(W - k) / ((k + 1)(N - F - W + k + 1))
//! ```
//!
//! anchored at the mode (weight 1) and normalised by their sum. Every weight
//! is ≤ 1, tails underflow harmlessly to 0, and the pmf sums to 1 by
//! construction.

use crate::error::{LotteryError, Result};
use crate::types::DrawConfiguration;

/// Hypergeometric parameters for one query.
#[derive(Clone, Copy, Debug)]
struct Params {
    entrants: u64,
    friends: u64,
    draws: u64,
}

impl Params {
    fn new(friends: u32, entrants: u32, draws: u32) -> Result<Self> {
        if entrants == 0 {
            return Err(LotteryError::NonPositiveEntrants { entrants: 0 });
        }
        if friends > entrants {
            return Err(LotteryError::FriendsOutOfRange {
                friends: friends as i64,
                entrants: entrants as i64,
            });
        }
        if draws > entrants {
            return Err(LotteryError::WinnersExceedEntrants {
                winners: draws as i64,
                entrants: entrants as i64,
            });
        }
        Ok(Self {
            entrants: entrants as u64,
            friends: friends as u64,
            draws: draws as u64,
        })
    }

    /// Smallest and largest attainable win counts.
    fn support(&self) -> (u64, u64) {
        let others = self.entrants - self.friends;
        (
            self.draws.saturating_sub(others),
            self.friends.min(self.draws),
        )
    }

    fn mode(&self) -> u64 {
        let (lo, hi) = self.support();
        let m = ((self.draws + 1) as f64 * (self.friends + 1) as f64 / (self.entrants + 2) as f64)
            .floor() as u64;
        m.clamp(lo, hi)
    }

    /// P(k + 1) / P(k), valid for k in [lo, hi).
    #[inline(always)]
    fn ratio(&self, k: u64) -> f64 {
        let num = (self.friends - k) as f64 * (self.draws - k) as f64;
        let den = (k + 1) as f64 * (self.entrants + k + 1 - self.friends - self.draws) as f64;
        num / den
    }

    /// Visit every (k, unnormalised weight) with weight(mode) = 1.
    /// Stops walking a tail once it underflows to zero.
    fn for_each_weight(&self, mut visit: impl FnMut(u64, f64)) {
        let (lo, hi) = self.support();
        let mode = self.mode();

        visit(mode, 1.0);

        let mut w = 1.0f64;
        for k in mode..hi {
            w *= self.ratio(k);
            if w == 0.0 {
                break;
            }
            visit(k + 1, w);
        }

        let mut w = 1.0f64;
        for k in (lo..mode).rev() {
            w /= self.ratio(k);
            if w == 0.0 {
                break;
            }
            visit(k, w);
        }
    }
}

/// Full pmf of friend wins: element `k` is P(K = k), for k in `0..=draws`.
///
/// Allocates `draws + 1` entries; intended for small W or reporting.
pub fn friend_win_distribution(friends: u32, entrants: u32, draws: u32) -> Result<Vec<f64>> {
    let params = Params::new(friends, entrants, draws)?;
    let mut pmf = vec![0.0f64; draws as usize + 1];
    let mut total = 0.0f64;
    params.for_each_weight(|k, w| {
        pmf[k as usize] = w;
        total += w;
    });
    for p in &mut pmf {
        *p /= total;
    }
    Ok(pmf)
}

/// P(wins * tickets_per_win >= friends) for `config`, without enumeration.
pub fn sufficiency_probability(config: &DrawConfiguration) -> Result<f64> {
    let params = Params::new(config.friends, config.entrants, config.winners)?;
    let mut total = 0.0f64;
    let mut sufficient = 0.0f64;
    params.for_each_weight(|k, w| {
        total += w;
        if config.is_sufficient(k as usize) {
            sufficient += w;
        }
    });

    let probability = (sufficient / total).clamp(0.0, 1.0);
    tracing::debug!(
        entrants = config.entrants,
        friends = config.friends,
        winners = config.winners,
        probability,
        "closed-form sufficiency"
    );
    Ok(probability)
}
