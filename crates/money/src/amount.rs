//! Atomic amounts: a magnitude in one currency.

use core::ops::{Add, Mul};
use serde::{Deserialize, Serialize};

use cambio_core::{Currency, ExchangeError, ExchangeResult, ValueObject};

use crate::bank::Bank;
use crate::expression::{Evaluate, Expression, Sum};

/// An integer magnitude paired with a currency code.
///
/// Equality and hashing cover both fields, so `5 USD != 5 BRL` and amounts can
/// key hash maps.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    magnitude: i64,
    currency: Currency,
}

impl Amount {
    pub fn new(magnitude: i64, currency: impl Into<Currency>) -> Self {
        Self {
            magnitude,
            currency: currency.into(),
        }
    }

    /// An amount in US dollars.
    pub fn dollar(magnitude: i64) -> Self {
        Self::new(magnitude, Currency::usd())
    }

    /// An amount in Brazilian reais.
    pub fn real(magnitude: i64) -> Self {
        Self::new(magnitude, Currency::brl())
    }

    pub fn magnitude(&self) -> i64 {
        self.magnitude
    }

    pub fn currency(&self) -> &Currency {
        &self.currency
    }

    /// Multiply the magnitude, keeping the currency. The receiver is untouched.
    #[must_use]
    pub fn scale(&self, factor: i64) -> Amount {
        Self::new(self.magnitude * factor, self.currency.clone())
    }

    /// Build a sum with `self` as augend.
    pub fn plus(&self, addend: impl Into<Expression>) -> Sum {
        Sum::new(self.clone(), addend)
    }
}

impl ValueObject for Amount {}

impl Evaluate for Amount {
    fn evaluate(&self, bank: &Bank, to: &Currency) -> ExchangeResult<Amount> {
        let rate = bank.rate(&self.currency, to)?;
        let magnitude = self
            .magnitude
            .checked_div(rate)
            .ok_or_else(|| ExchangeError::degenerate_rate(&self.currency, to, rate))?;
        Ok(Amount::new(magnitude, to.clone()))
    }
}

impl core::fmt::Display for Amount {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.magnitude, self.currency)
    }
}

impl Mul<i64> for Amount {
    type Output = Amount;

    fn mul(self, factor: i64) -> Amount {
        self.scale(factor)
    }
}

impl Mul<i64> for &Amount {
    type Output = Amount;

    fn mul(self, factor: i64) -> Amount {
        self.scale(factor)
    }
}

impl<T: Into<Expression>> Add<T> for Amount {
    type Output = Sum;

    fn add(self, addend: T) -> Sum {
        Sum::new(self, addend)
    }
}
