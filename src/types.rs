//! Core data structures: draw requests, resolved configurations, scenarios.
//!
//! A [`DrawRequest`] is what a caller hands in: any field may be missing and
//! the integers are signed, so bad input can be reported rather than
//! unrepresentable. [`DrawRequest::resolve`] applies defaults and validates,
//! yielding a [`DrawConfiguration`] whose unsigned fields satisfy
//! `friends <= entrants` and `winners <= entrants`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{LotteryError, Result};

/// Raw query as supplied by a caller (CLI flags, JSON body).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawRequest {
    pub entrants: Option<i64>,
    pub friends: Option<i64>,
    pub winners: Option<i64>,
    pub tickets: Option<i64>,
}

impl DrawRequest {
    /// Request with only the pool size set; everything else defaults.
    pub fn with_entrants(entrants: i64) -> Self {
        Self {
            entrants: Some(entrants),
            ..Self::default()
        }
    }

    /// Apply defaults and validate.
    ///
    /// Defaults: winners = [`DEFAULT_WINNERS`], friends = [`DEFAULT_FRIENDS`],
    /// tickets = [`UNLIMITED_TICKETS`].
    pub fn resolve(&self) -> Result<DrawConfiguration> {
        let entrants = self.entrants.ok_or(LotteryError::MissingEntrants)?;
        if entrants <= 0 {
            return Err(LotteryError::NonPositiveEntrants { entrants });
        }
        let winners = self.winners.unwrap_or(DEFAULT_WINNERS as i64);
        let friends = self.friends.unwrap_or(DEFAULT_FRIENDS as i64);
        let tickets = self.tickets.unwrap_or(UNLIMITED_TICKETS as i64);

        if friends < 0 || friends > entrants {
            return Err(LotteryError::FriendsOutOfRange { friends, entrants });
        }
        if tickets < 1 {
            return Err(LotteryError::TicketsPerWinTooSmall { tickets });
        }
        if winners < 0 {
            return Err(LotteryError::NegativeWinners { winners });
        }
        if winners > entrants {
            return Err(LotteryError::WinnersExceedEntrants { winners, entrants });
        }

        let entrants = u32::try_from(entrants)
            .map_err(|_| LotteryError::EntrantsTooLarge { entrants })?;
        Ok(DrawConfiguration {
            entrants,
            // Both bounded by entrants above.
            friends: friends as u32,
            winners: winners as u32,
            // Anything past u32::MAX is already unlimited.
            tickets_per_win: u32::try_from(tickets).unwrap_or(UNLIMITED_TICKETS),
        })
    }
}

/// Validated query parameters. Never mutated once built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawConfiguration {
    /// N: size of the draw pool.
    pub entrants: u32,
    /// F: marked entrants belonging to the group.
    pub friends: u32,
    /// W: sequential draws without replacement.
    pub winners: u32,
    /// T: tickets credited per friend win.
    pub tickets_per_win: u32,
}

impl DrawConfiguration {
    /// Build a configuration directly, with the same checks as [`DrawRequest::resolve`].
    pub fn new(entrants: u32, friends: u32, winners: u32, tickets_per_win: u32) -> Result<Self> {
        DrawRequest {
            entrants: Some(entrants as i64),
            friends: Some(friends as i64),
            winners: Some(winners as i64),
            tickets: Some(tickets_per_win as i64),
        }
        .resolve()
    }

    /// Tickets the group needs: one per friend.
    #[inline]
    pub fn required_tickets(&self) -> u64 {
        self.friends as u64
    }

    /// True when `wins` friend wins earn at least [`Self::required_tickets`].
    #[inline]
    pub fn is_sufficient(&self, wins: usize) -> bool {
        (wins as u64).saturating_mul(self.tickets_per_win as u64) >= self.required_tickets()
    }
}

/// Outcome of one draw from the group's point of view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Draw {
    /// The drawn entrant was a friend who had not yet won.
    FriendWin,
    /// The drawn entrant was outside the group.
    Other,
}

impl Draw {
    #[inline]
    pub fn is_win(self) -> bool {
        matches!(self, Draw::FriendWin)
    }
}

/// One ordered win/loss sequence across all W draws. Position = draw index.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Scenario {
    draws: Vec<Draw>,
}

impl Scenario {
    pub fn new(draws: Vec<Draw>) -> Self {
        Self { draws }
    }

    /// Decode the binary expansion of `index`: bit i set means draw i was a friend win.
    pub fn from_index(index: u64, len: usize) -> Self {
        debug_assert!(len <= 64, "len {} exceeds index width", len);
        let draws = (0..len)
            .map(|i| {
                if index & (1u64 << i) != 0 {
                    Draw::FriendWin
                } else {
                    Draw::Other
                }
            })
            .collect();
        Self { draws }
    }

    /// Parse 0/1 cells (1 = friend win).
    pub fn from_bits(bits: &[u8]) -> Result<Self> {
        let draws = bits
            .iter()
            .enumerate()
            .map(|(position, &value)| match value {
                1 => Ok(Draw::FriendWin),
                0 => Ok(Draw::Other),
                _ => Err(LotteryError::InvalidOutcomeCell { position, value }),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { draws })
    }

    pub fn to_bits(&self) -> Vec<u8> {
        self.draws.iter().map(|d| d.is_win() as u8).collect()
    }

    pub fn draws(&self) -> &[Draw] {
        &self.draws
    }

    pub fn len(&self) -> usize {
        self.draws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.draws.is_empty()
    }

    /// Number of friend wins in the sequence.
    pub fn wins(&self) -> usize {
        self.draws.iter().filter(|d| d.is_win()).count()
    }
}

impl From<Vec<Draw>> for Scenario {
    fn from(draws: Vec<Draw>) -> Self {
        Self { draws }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.draws {
            f.write_str(if d.is_win() { "1" } else { "0" })?;
        }
        Ok(())
    }
}

/// How `can_we_get_tickets` computes its answer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    /// Generate every scenario, filter, sum. O(2^W).
    Enumerate,
    /// Hypergeometric direct sum. O(min(F, W)).
    ClosedForm,
    /// Enumerate up to [`AUTO_ENUMERATION_LIMIT`] draws, closed form above.
    #[default]
    Auto,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "enumerate" => Ok(Method::Enumerate),
            "closed-form" => Ok(Method::ClosedForm),
            "auto" => Ok(Method::Auto),
            other => Err(format!(
                "unknown method '{}': expected enumerate, closed-form or auto",
                other
            )),
        }
    }
}

/// Result of a ticket-sufficiency query, with how it was obtained.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SufficiencyReport {
    pub config: DrawConfiguration,
    /// Method actually used (never `Auto`).
    pub method: Method,
    /// Scenarios generated; `None` for the closed form.
    pub scenarios_enumerated: Option<usize>,
    /// Scenarios meeting the threshold; `None` for the closed form.
    pub scenarios_sufficient: Option<usize>,
    pub probability: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_resolve_defaults() {
        let cfg = DrawRequest::with_entrants(100).resolve().unwrap();
        assert_eq!(cfg.entrants, 100);
        assert_eq!(cfg.friends, DEFAULT_FRIENDS);
        assert_eq!(cfg.winners, DEFAULT_WINNERS);
        assert_eq!(cfg.tickets_per_win, UNLIMITED_TICKETS);
    }

    #[test]
    fn test_resolve_errors() {
        assert_eq!(
            DrawRequest::default().resolve(),
            Err(LotteryError::MissingEntrants)
        );
        let bad = |r: DrawRequest| r.resolve().unwrap_err().kind();
        assert_eq!(
            bad(DrawRequest::with_entrants(0)),
            ErrorKind::Configuration
        );
        assert_eq!(
            bad(DrawRequest {
                friends: Some(11),
                ..DrawRequest::with_entrants(10)
            }),
            ErrorKind::Configuration
        );
        assert_eq!(
            bad(DrawRequest {
                tickets: Some(0),
                ..DrawRequest::with_entrants(10)
            }),
            ErrorKind::Configuration
        );
        assert_eq!(
            bad(DrawRequest {
                winners: Some(-1),
                ..DrawRequest::with_entrants(10)
            }),
            ErrorKind::Domain
        );
        assert_eq!(
            bad(DrawRequest {
                winners: Some(11),
                ..DrawRequest::with_entrants(10)
            }),
            ErrorKind::Domain
        );
    }

    #[test]
    fn test_resolve_from_json() {
        let req: DrawRequest =
            serde_json::from_str(r#"{"entrants": 80, "friends": 4, "winners": 4, "tickets": 2}"#)
                .unwrap();
        let cfg = req.resolve().unwrap();
        assert_eq!(cfg, DrawConfiguration::new(80, 4, 4, 2).unwrap());
    }

    #[test]
    fn test_is_sufficient_unlimited_does_not_overflow() {
        let cfg = DrawConfiguration::new(100, 100, 100, UNLIMITED_TICKETS).unwrap();
        assert!(!cfg.is_sufficient(0));
        assert!(cfg.is_sufficient(1));
        assert!(cfg.is_sufficient(100));
    }

    #[test]
    fn test_scenario_bits() {
        let s = Scenario::from_bits(&[1, 0, 1, 1]).unwrap();
        assert_eq!(s.len(), 4);
        assert_eq!(s.wins(), 3);
        assert_eq!(s.to_bits(), vec![1, 0, 1, 1]);
        assert_eq!(s.to_string(), "1011");
        assert_eq!(
            Scenario::from_bits(&[1, 2]),
            Err(LotteryError::InvalidOutcomeCell {
                position: 1,
                value: 2
            })
        );
    }

    #[test]
    fn test_scenario_from_index() {
        // 0b1101: draws 0, 2, 3 are wins
        let s = Scenario::from_index(0b1101, 4);
        assert_eq!(s.to_bits(), vec![1, 0, 1, 1]);
        assert!(Scenario::from_index(0, 0).is_empty());
    }

    #[test]
    fn test_method_parse() {
        assert_eq!("closed-form".parse::<Method>(), Ok(Method::ClosedForm));
        assert!("fast".parse::<Method>().is_err());
    }
}
