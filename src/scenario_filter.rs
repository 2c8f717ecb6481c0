//! Ticket-sufficiency filter over enumerated scenarios.

use crate::error::{LotteryError, Result};
use crate::types::Scenario;

/// Scenarios whose `wins * multiplier >= required`, in input order.
///
/// Borrows from `cases`; nothing is copied or reordered. All scenarios must
/// have the same length, otherwise [`LotteryError::ScenarioLengthMismatch`].
pub fn filter_cases(cases: &[Scenario], required: u64, multiplier: u32) -> Result<Vec<&Scenario>> {
    if multiplier < 1 {
        return Err(LotteryError::TicketsPerWinTooSmall {
            tickets: multiplier as i64,
        });
    }
    if let Some(first) = cases.first() {
        let expected = first.len();
        if let Some((index, bad)) = cases
            .iter()
            .enumerate()
            .find(|(_, c)| c.len() != expected)
        {
            return Err(LotteryError::ScenarioLengthMismatch {
                index,
                expected,
                found: bad.len(),
            });
        }
    }

    Ok(cases
        .iter()
        .filter(|c| (c.wins() as u64).saturating_mul(multiplier as u64) >= required)
        .collect())
}

/// [`filter_cases`] with one ticket per win.
pub fn filter_cases_single(cases: &[Scenario], required: u64) -> Result<Vec<&Scenario>> {
    filter_cases(cases, required, 1)
}
