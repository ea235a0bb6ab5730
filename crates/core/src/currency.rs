//! Currency codes.

use core::convert::Infallible;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::value_object::ValueObject;

/// A currency code such as `"USD"` or `"BRL"`.
///
/// Codes are compared as exact strings: no case folding, no ISO 4217 checks.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Currency(String);

impl Currency {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// US dollar.
    pub fn usd() -> Self {
        Self::new("USD")
    }

    /// Brazilian real.
    pub fn brl() -> Self {
        Self::new("BRL")
    }
}

impl ValueObject for Currency {}

impl core::fmt::Display for Currency {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Currency {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Currency {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Currency {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&Currency> for Currency {
    fn from(value: &Currency) -> Self {
        value.clone()
    }
}

impl FromStr for Currency {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl PartialEq<str> for Currency {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Currency {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn codes_match_exactly() {
        assert_eq!(Currency::usd(), "USD");
        assert_ne!(Currency::new("usd"), Currency::usd());
        assert_ne!(Currency::new("USD "), Currency::usd());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Currency::brl()).unwrap();
        assert_eq!(json, "\"BRL\"");
    }

    proptest! {
        #[test]
        fn equal_codes_hash_equally(code in "[A-Z]{3}") {
            let a = Currency::new(code.clone());
            let b: Currency = code.parse().unwrap();
            prop_assert_eq!(&a, &b);
            prop_assert_eq!(hash_of(&a), hash_of(&b));
        }
    }
}
