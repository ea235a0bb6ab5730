//! Rate tables: seeding a [`Bank`] from a JSON document.
//!
//! ```json
//! { "rates": [ { "from": "BRL", "to": "USD", "rate": 2 } ] }
//! ```
//!
//! [`Bank::to_table`] exports the current rates in the same shape; nothing in
//! this crate writes a table to storage.

use std::io::Read;

use serde::{Deserialize, Serialize};

use cambio_core::{Currency, ExchangeError, ExchangeResult};

use crate::bank::Bank;

/// One directional rate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateEntry {
    pub from: Currency,
    pub to: Currency,
    pub rate: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateTable {
    #[serde(default)]
    pub rates: Vec<RateEntry>,
}

impl RateTable {
    pub fn from_json(json: &str) -> ExchangeResult<Self> {
        serde_json::from_str(json).map_err(|e| ExchangeError::invalid_config(e.to_string()))
    }

    pub fn from_reader(reader: impl Read) -> ExchangeResult<Self> {
        serde_json::from_reader(reader).map_err(|e| ExchangeError::invalid_config(e.to_string()))
    }
}

impl Bank {
    /// Build a bank from a table. Later entries for a pair win.
    pub fn from_table(table: RateTable) -> Self {
        let mut bank = Bank::new();
        for entry in table.rates {
            bank.add_rate(entry.from, entry.to, entry.rate);
        }
        tracing::debug!(rates = bank.len(), "bank loaded from rate table");
        bank
    }

    /// Current rates as a table, sorted by pair.
    pub fn to_table(&self) -> RateTable {
        let mut rates: Vec<RateEntry> = self
            .rates()
            .map(|(pair, rate)| RateEntry {
                from: pair.from.clone(),
                to: pair.to.clone(),
                rate,
            })
            .collect();
        rates.sort_by(|a, b| (&a.from, &a.to).cmp(&(&b.from, &b.to)));
        RateTable { rates }
    }
}

impl From<RateTable> for Bank {
    fn from(table: RateTable) -> Self {
        Bank::from_table(table)
    }
}
