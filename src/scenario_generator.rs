//! Exhaustive enumeration of win/loss sequences.
//!
//! Scenario `k` of `2^W` is the binary expansion of `k` (bit i = draw i), so
//! every index maps to a distinct sequence and generation needs no recursion.
//! Indices are independent and are decoded in parallel with rayon.
//!
//! Cost is O(2^W) time and memory. [`MAX_ENUMERATED_DRAWS`] bounds W; beyond
//! it use [`crate::hypergeometric`] instead.

use rayon::prelude::*;

use crate::constants::MAX_ENUMERATED_DRAWS;
use crate::error::{LotteryError, Result};
use crate::types::Scenario;

/// Number of scenarios for `draws` draws: 2^draws, or `None` past 63 draws.
#[inline]
pub fn case_count(draws: usize) -> Option<u64> {
    1u64.checked_shl(u32::try_from(draws).ok()?)
}

/// All `2^draws` distinct scenarios of length `draws`.
///
/// `draws == 0` yields the single empty scenario. Collection order is the
/// index order, but callers must not rely on it.
pub fn generate_cases(draws: usize) -> Result<Vec<Scenario>> {
    if draws > MAX_ENUMERATED_DRAWS {
        return Err(LotteryError::TooManyDraws {
            draws,
            max: MAX_ENUMERATED_DRAWS,
        });
    }

    let count = case_count(draws).ok_or(LotteryError::TooManyDraws {
        draws,
        max: MAX_ENUMERATED_DRAWS,
    })?;
    let cases: Vec<Scenario> = (0..count)
        .into_par_iter()
        .map(|index| Scenario::from_index(index, draws))
        .collect();

    tracing::debug!(draws, cases = cases.len(), "generated scenarios");
    Ok(cases)
}
