//! Exchange error model.

use thiserror::Error;

use crate::currency::Currency;

/// Result type used across the money crates.
pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Exchange-level error.
///
/// Every failure is synchronous and terminal for the operation that raised it:
/// an evaluation either yields a concrete amount or one of these.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExchangeError {
    /// No rate was ever registered for this ordered, cross-currency pair.
    #[error("no exchange rate registered from {from} to {to}")]
    UnknownRatePair { from: Currency, to: Currency },

    /// A registered rate cannot be used as a divisor (zero, or the division overflows).
    #[error("exchange rate {rate} from {from} to {to} cannot be applied")]
    DegenerateRate {
        from: Currency,
        to: Currency,
        rate: i64,
    },

    /// A rate table document could not be read.
    #[error("invalid rate configuration: {0}")]
    InvalidConfig(String),
}

impl ExchangeError {
    pub fn unknown_rate_pair(from: &Currency, to: &Currency) -> Self {
        Self::UnknownRatePair {
            from: from.clone(),
            to: to.clone(),
        }
    }

    pub fn degenerate_rate(from: &Currency, to: &Currency, rate: i64) -> Self {
        Self::DegenerateRate {
            from: from.clone(),
            to: to.clone(),
            rate,
        }
    }

    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }

    /// True when the failure is a missing rate rather than a bad one.
    pub fn is_unknown_rate(&self) -> bool {
        matches!(self, Self::UnknownRatePair { .. })
    }
}
