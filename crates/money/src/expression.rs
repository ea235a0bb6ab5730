//! Money expressions: amounts and sums of expressions.
//!
//! Expression trees are owned (each `Sum` owns both operands), so they are
//! always finite and evaluation always terminates.

use core::ops::Add;
use serde::{Deserialize, Serialize};

use cambio_core::{Currency, ExchangeResult};

use crate::amount::Amount;
use crate::bank::Bank;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::Amount {}
    impl Sealed for super::Sum {}
    impl Sealed for super::Expression {}
}

/// Anything that reduces to an [`Amount`] in a target currency, given a bank.
///
/// Implemented by [`Amount`], [`Sum`] and the [`Expression`] enum only; the
/// trait is sealed.
///
/// ```compile_fail
/// use cambio_money::{Amount, Bank, Currency, Evaluate, ExchangeResult};
///
/// struct Product;
///
/// impl Evaluate for Product {
///     fn evaluate(&self, _bank: &Bank, to: &Currency) -> ExchangeResult<Amount> {
///         Ok(Amount::new(0, to.clone()))
///     }
/// }
/// ```
pub trait Evaluate: sealed::Sealed {
    fn evaluate(&self, bank: &Bank, to: &Currency) -> ExchangeResult<Amount>;
}

/// A money expression: either an atomic amount or a sum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expression {
    Amount(Amount),
    Sum(Sum),
}

impl Expression {
    /// Build a sum with `self` as augend.
    pub fn plus(self, addend: impl Into<Expression>) -> Sum {
        Sum::new(self, addend)
    }

    /// Distinct leaf currencies, in first-seen (left-to-right) order.
    pub fn currencies(&self) -> Vec<Currency> {
        let mut out = Vec::new();
        self.collect_currencies(&mut out);
        out
    }

    fn collect_currencies(&self, out: &mut Vec<Currency>) {
        match self {
            Expression::Amount(amount) => {
                if !out.contains(amount.currency()) {
                    out.push(amount.currency().clone());
                }
            }
            Expression::Sum(sum) => {
                sum.augend.collect_currencies(out);
                sum.addend.collect_currencies(out);
            }
        }
    }
}

impl Evaluate for Expression {
    fn evaluate(&self, bank: &Bank, to: &Currency) -> ExchangeResult<Amount> {
        match self {
            Expression::Amount(amount) => amount.evaluate(bank, to),
            Expression::Sum(sum) => sum.evaluate(bank, to),
        }
    }
}

impl From<Amount> for Expression {
    fn from(value: Amount) -> Self {
        Expression::Amount(value)
    }
}

impl From<Sum> for Expression {
    fn from(value: Sum) -> Self {
        Expression::Sum(value)
    }
}

impl<T: Into<Expression>> Add<T> for Expression {
    type Output = Sum;

    fn add(self, addend: T) -> Sum {
        Sum::new(self, addend)
    }
}

/// Sum of two expressions (augend + addend).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sum {
    augend: Box<Expression>,
    addend: Box<Expression>,
}

impl Sum {
    pub fn new(augend: impl Into<Expression>, addend: impl Into<Expression>) -> Self {
        Self {
            augend: Box::new(augend.into()),
            addend: Box::new(addend.into()),
        }
    }

    pub fn augend(&self) -> &Expression {
        &self.augend
    }

    pub fn addend(&self) -> &Expression {
        &self.addend
    }

    /// Extend to the right; the current sum becomes the new augend.
    pub fn plus(self, addend: impl Into<Expression>) -> Sum {
        Sum::new(self, addend)
    }
}

impl Evaluate for Sum {
    fn evaluate(&self, bank: &Bank, to: &Currency) -> ExchangeResult<Amount> {
        let augend = self.augend.evaluate(bank, to)?;
        let addend = self.addend.evaluate(bank, to)?;
        Ok(Amount::new(augend.magnitude() + addend.magnitude(), to.clone()))
    }
}

impl<T: Into<Expression>> Add<T> for Sum {
    type Output = Sum;

    fn add(self, addend: T) -> Sum {
        self.plus(addend)
    }
}
