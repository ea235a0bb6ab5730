//! End-to-end scenarios against the public API.

use cambio_money::{Amount, Bank, Currency, Evaluate, ExchangeError, Expression, RateTable, Sum};

#[test]
fn adds_amounts_in_different_currencies() -> anyhow::Result<()> {
    let five_dollars = Amount::dollar(5);
    let ten_reais: Expression = Amount::real(10).into();

    let mut bank = Bank::new();
    bank.add_rate("BRL", "USD", 2);

    let result = bank.evaluate(&five_dollars.plus(ten_reais), &Currency::usd())?;
    assert_eq!(result, Amount::dollar(10));
    Ok(())
}

#[test]
fn converts_single_amount() -> anyhow::Result<()> {
    let bank = Bank::new().with_rate("BRL", "USD", 5);
    assert_eq!(bank.evaluate(&Amount::real(5), &Currency::usd())?, Amount::dollar(1));
    Ok(())
}

#[test]
fn same_currency_amount_evaluates_to_itself() -> anyhow::Result<()> {
    let bank = Bank::new();
    assert_eq!(bank.evaluate(&Amount::dollar(1), &Currency::usd())?, Amount::dollar(1));
    assert_eq!(bank.rate(&Currency::usd(), &Currency::usd())?, 1);
    Ok(())
}

#[test]
fn sums_same_currency_without_rates() -> anyhow::Result<()> {
    let bank = Bank::new();
    let sum = Sum::new(Amount::dollar(3), Amount::dollar(4));
    assert_eq!(bank.evaluate(&sum, &Currency::usd())?, Amount::dollar(7));

    let five = Amount::dollar(5);
    assert_eq!(bank.evaluate(&five.plus(five.clone()), &Currency::usd())?, Amount::dollar(10));
    Ok(())
}

#[test]
fn unknown_pair_is_distinguishable_from_bad_rate() {
    let bank = Bank::new().with_rate("BRL", "USD", 0);

    let missing = bank
        .evaluate(&Amount::new(1, "EUR"), &Currency::usd())
        .unwrap_err();
    let degenerate = bank.evaluate(&Amount::real(1), &Currency::usd()).unwrap_err();

    assert!(missing.is_unknown_rate());
    assert!(matches!(degenerate, ExchangeError::DegenerateRate { rate: 0, .. }));
}

#[test]
fn scaling_does_not_affect_other_holders() {
    let base = Amount::dollar(320);
    let shared = &base;
    let doubled = shared * 2;
    let tripled = base.scale(3);

    assert_eq!(doubled, Amount::dollar(640));
    assert_eq!(tripled, Amount::dollar(960));
    assert_eq!(base, Amount::dollar(320));
}

#[test]
fn evaluates_expression_trees_through_trait_objects() -> anyhow::Result<()> {
    let bank = Bank::new().with_rate("BRL", "USD", 2).with_rate("EUR", "USD", 1);
    let parts: Vec<Box<dyn Evaluate>> = vec![
        Box::new(Amount::dollar(1)),
        Box::new(Amount::real(4) + Amount::new(3, "EUR")),
    ];

    let total: i64 = parts
        .iter()
        .map(|p| bank.evaluate(p.as_ref(), &Currency::usd()).map(|a| a.magnitude()))
        .sum::<Result<i64, _>>()?;
    assert_eq!(total, 6);
    Ok(())
}

#[test]
fn configured_bank_checks_missing_rates_before_evaluating() -> anyhow::Result<()> {
    cambio_observability::init();

    let bank = Bank::from(RateTable::from_json(
        r#"{ "rates": [ { "from": "BRL", "to": "USD", "rate": 2 } ] }"#,
    )?);
    let expr: Expression = (Amount::dollar(5) + Amount::real(10) + Amount::new(7, "JPY")).into();

    let missing = bank.missing_rates(&expr, &Currency::usd());
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0].to_string(), "JPY/USD");
    assert!(bank.evaluate(&expr, &Currency::usd()).is_err());
    Ok(())
}
