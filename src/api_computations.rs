//! Ticket-sufficiency queries: "can the group get enough tickets?"
//!
//! The enumerate path composes the three pipeline stages:
//!
//! ```text
//! winners ─► generate_cases ─► filter_cases(friends, tickets) ─► Σ calculate_scenario_probability
//! ```
//!
//! [`Method::Auto`] takes that path up to [`AUTO_ENUMERATION_LIMIT`] draws and
//! switches to [`crate::hypergeometric::sufficiency_probability`] above it.
//! Every query validates eagerly; nothing is computed for a bad request.

use rayon::prelude::*;

use crate::constants::{AUTO_ENUMERATION_LIMIT, MAX_ENUMERATED_DRAWS};
use crate::error::Result;
use crate::hypergeometric;
use crate::scenario_filter::filter_cases;
use crate::scenario_generator::generate_cases;
use crate::scenario_probability::calculate_scenario_probability;
use crate::types::{DrawConfiguration, DrawRequest, Method, Scenario, SufficiencyReport};

/// Probability that the group collects at least one ticket per friend.
///
/// Missing fields default to one winner, one friend, unlimited tickets.
pub fn can_we_get_tickets(request: &DrawRequest) -> Result<f64> {
    can_we_get_tickets_with(request, Method::Auto)
}

/// [`can_we_get_tickets`] with an explicit computation method.
pub fn can_we_get_tickets_with(request: &DrawRequest, method: Method) -> Result<f64> {
    evaluate(request, method).map(|report| report.probability)
}

/// Resolve `request` and answer it with `method`, reporting how.
pub fn evaluate(request: &DrawRequest, method: Method) -> Result<SufficiencyReport> {
    let config = request.resolve()?;
    evaluate_config(&config, method)
}

/// Answer an already-validated configuration.
pub fn evaluate_config(config: &DrawConfiguration, method: Method) -> Result<SufficiencyReport> {
    match method {
        Method::Enumerate => enumerate_sufficiency(config),
        Method::ClosedForm => closed_form_sufficiency(config),
        Method::Auto => {
            if config.winners as usize <= AUTO_ENUMERATION_LIMIT {
                enumerate_sufficiency(config)
            } else {
                tracing::debug!(
                    winners = config.winners,
                    limit = AUTO_ENUMERATION_LIMIT,
                    "too many draws to enumerate, using closed form"
                );
                closed_form_sufficiency(config)
            }
        }
    }
}

/// Generate all scenarios, keep the sufficient ones, sum their probabilities.
pub fn enumerate_sufficiency(config: &DrawConfiguration) -> Result<SufficiencyReport> {
    let cases = generate_cases(config.winners as usize)?;
    let sufficient = filter_cases(&cases, config.required_tickets(), config.tickets_per_win)?;
    let probability = sum_probabilities(&sufficient, config)?.clamp(0.0, 1.0);

    tracing::debug!(
        entrants = config.entrants,
        friends = config.friends,
        winners = config.winners,
        tickets_per_win = config.tickets_per_win,
        enumerated = cases.len(),
        sufficient = sufficient.len(),
        probability,
        "enumerated sufficiency"
    );

    Ok(SufficiencyReport {
        config: *config,
        method: Method::Enumerate,
        scenarios_enumerated: Some(cases.len()),
        scenarios_sufficient: Some(sufficient.len()),
        probability,
    })
}

fn closed_form_sufficiency(config: &DrawConfiguration) -> Result<SufficiencyReport> {
    Ok(SufficiencyReport {
        config: *config,
        method: Method::ClosedForm,
        scenarios_enumerated: None,
        scenarios_sufficient: None,
        probability: hypergeometric::sufficiency_probability(config)?,
    })
}

/// Per-scenario terms are computed in parallel but summed in input order,
/// so the result does not depend on the rayon pool size.
fn sum_probabilities(scenarios: &[&Scenario], config: &DrawConfiguration) -> Result<f64> {
    let terms = scenarios
        .par_iter()
        .map(|s| calculate_scenario_probability(s, config.friends, config.entrants))
        .collect::<Result<Vec<f64>>>()?;
    Ok(terms.iter().sum())
}

/// Σ P(s) over every scenario of `draws` draws. Equals 1 for any valid input.
pub fn total_probability(friends: u32, entrants: u32, draws: usize) -> Result<f64> {
    let cases = generate_cases(draws)?;
    let all: Vec<&Scenario> = cases.iter().collect();
    let config = DrawConfiguration {
        entrants,
        friends,
        winners: draws as u32,
        tickets_per_win: 1,
    };
    sum_probabilities(&all, &config)
}
