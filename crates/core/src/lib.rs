//! `cambio-core` — currency and error primitives shared by the money crates.
//!
//! This crate contains **pure domain** primitives (no IO, no logging setup).

pub mod currency;
pub mod error;
pub mod value_object;

pub use currency::Currency;
pub use error::{ExchangeError, ExchangeResult};
pub use value_object::ValueObject;
