//! Money expressions and currency conversion.
//!
//! Amounts in different currencies combine into [`Sum`] expressions; a [`Bank`]
//! holds directional integer exchange rates and reduces any [`Expression`] to a
//! single [`Amount`] in a target currency.
//!
//! Pure domain logic only: no IO beyond reading a [`RateTable`] document.
//!
//! ```
//! use cambio_money::{Amount, Bank, Currency};
//!
//! let mut bank = Bank::new();
//! bank.add_rate("BRL", "USD", 2);
//!
//! let sum = Amount::dollar(5).plus(Amount::real(10));
//! let total = bank.evaluate(&sum, &Currency::usd()).unwrap();
//! assert_eq!(total, Amount::dollar(10));
//! ```

pub mod amount;
pub mod bank;
pub mod expression;
pub mod rates;

pub use amount::Amount;
pub use bank::{Bank, RatePair};
pub use expression::{Evaluate, Expression, Sum};
pub use rates::{RateEntry, RateTable};

pub use cambio_core::{Currency, ExchangeError, ExchangeResult};
