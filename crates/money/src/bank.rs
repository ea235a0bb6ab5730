//! The conversion authority: directional exchange rates and evaluation entry point.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use cambio_core::{Currency, ExchangeError, ExchangeResult, ValueObject};

use crate::amount::Amount;
use crate::expression::{Evaluate, Expression};

/// Ordered `(from, to)` currency pair keying the rate map.
///
/// `BRL/USD` and `USD/BRL` are different pairs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RatePair {
    pub from: Currency,
    pub to: Currency,
}

impl RatePair {
    pub fn new(from: impl Into<Currency>, to: impl Into<Currency>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}

impl ValueObject for RatePair {}

impl core::fmt::Display for RatePair {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.from, self.to)
    }
}

/// Holds exchange rates and reduces expressions to a single amount.
///
/// A rate `r` for `from -> to` means `n from` converts to `n / r to`
/// (integer division). Same-currency conversion never consults the map.
///
/// Registration takes `&mut self` and evaluation `&self`, so a shared `Bank`
/// is read-only for the duration of any evaluation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bank {
    rates: HashMap<RatePair, i64>,
}

impl Bank {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the rate for `from -> to`. The inverse pair is not touched.
    ///
    /// Registering the same pair again replaces the rate (last write wins);
    /// the previous rate is returned.
    pub fn add_rate(
        &mut self,
        from: impl Into<Currency>,
        to: impl Into<Currency>,
        rate: i64,
    ) -> Option<i64> {
        let pair = RatePair::new(from, to);
        tracing::debug!(pair = %pair, rate, "registering exchange rate");

        let previous = self.rates.insert(pair.clone(), rate);
        if let Some(old) = previous {
            if old != rate {
                tracing::debug!(pair = %pair, old, new = rate, "exchange rate replaced");
            }
        }
        previous
    }

    /// Builder form of [`Bank::add_rate`].
    #[must_use]
    pub fn with_rate(mut self, from: impl Into<Currency>, to: impl Into<Currency>, rate: i64) -> Self {
        self.add_rate(from, to, rate);
        self
    }

    /// Rate for converting `from` into `to`.
    ///
    /// Identical currencies always yield 1, even if a self-rate was registered.
    pub fn rate(&self, from: &Currency, to: &Currency) -> ExchangeResult<i64> {
        if from == to {
            return Ok(1);
        }

        let pair = RatePair::new(from, to);
        self.rates
            .get(&pair)
            .copied()
            .ok_or_else(|| ExchangeError::unknown_rate_pair(from, to))
    }

    /// Reduce `expression` to a single amount in `to`.
    pub fn evaluate<E>(&self, expression: &E, to: &Currency) -> ExchangeResult<Amount>
    where
        E: Evaluate + ?Sized,
    {
        let result = expression.evaluate(self, to);
        match &result {
            Ok(amount) => tracing::trace!(target_currency = %to, result = %amount, "evaluated expression"),
            Err(err) => tracing::debug!(target_currency = %to, error = %err, "evaluation failed"),
        }
        result
    }

    /// Cross-currency pairs `expression` needs that have no registered rate.
    ///
    /// Empty means evaluating into `to` cannot fail with
    /// [`ExchangeError::UnknownRatePair`].
    pub fn missing_rates(&self, expression: &Expression, to: &Currency) -> Vec<RatePair> {
        expression
            .currencies()
            .into_iter()
            .filter(|from| from != to)
            .map(|from| RatePair::new(from, to))
            .filter(|pair| !self.rates.contains_key(pair))
            .collect()
    }

    /// Registered rates, in no particular order.
    pub fn rates(&self) -> impl Iterator<Item = (&RatePair, i64)> {
        self.rates.iter().map(|(pair, rate)| (pair, *rate))
    }

    pub fn len(&self) -> usize {
        self.rates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }
}
