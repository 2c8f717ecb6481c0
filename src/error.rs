//! Error types for every fallible lottery operation.
//!
//! Each variant belongs to one of two kinds (see [`ErrorKind`]):
//! configuration errors are bad inputs, domain errors are inputs the
//! probability model cannot be evaluated on.

/// Broad category of a [`LotteryError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or out-of-range fields, malformed scenarios.
    Configuration,
    /// Draw counts the pool cannot support, or enumeration past the ceiling.
    Domain,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LotteryError {
    #[error("entrants is required")]
    MissingEntrants,

    #[error("entrants must be positive, got {entrants}")]
    NonPositiveEntrants { entrants: i64 },

    #[error("entrants must fit in 32 bits, got {entrants}")]
    EntrantsTooLarge { entrants: i64 },

    #[error("friends must be in [0, {entrants}], got {friends}")]
    FriendsOutOfRange { friends: i64, entrants: i64 },

    #[error("tickets per win must be at least 1, got {tickets}")]
    TicketsPerWinTooSmall { tickets: i64 },

    #[error("scenario {index} has {found} draws, expected {expected}")]
    ScenarioLengthMismatch {
        index: usize,
        expected: usize,
        found: usize,
    },

    #[error("outcome cell at draw {position} must be 0 or 1, got {value}")]
    InvalidOutcomeCell { position: usize, value: u8 },

    #[error("winners must be non-negative, got {winners}")]
    NegativeWinners { winners: i64 },

    #[error("cannot draw {winners} winners from {entrants} entrants")]
    WinnersExceedEntrants { winners: i64, entrants: i64 },

    #[error("pool exhausted at draw {draw}: {entrants} entrants cannot supply it")]
    ExhaustedPool { draw: usize, entrants: u32 },

    #[error("enumerating {draws} draws exceeds the ceiling of {max}")]
    TooManyDraws { draws: usize, max: usize },
}

impl LotteryError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            LotteryError::MissingEntrants
            | LotteryError::NonPositiveEntrants { .. }
            | LotteryError::EntrantsTooLarge { .. }
            | LotteryError::FriendsOutOfRange { .. }
            | LotteryError::TicketsPerWinTooSmall { .. }
            | LotteryError::ScenarioLengthMismatch { .. }
            | LotteryError::InvalidOutcomeCell { .. } => ErrorKind::Configuration,
            LotteryError::NegativeWinners { .. }
            | LotteryError::WinnersExceedEntrants { .. }
            | LotteryError::ExhaustedPool { .. }
            | LotteryError::TooManyDraws { .. } => ErrorKind::Domain,
        }
    }
}

pub type Result<T> = std::result::Result<T, LotteryError>;
