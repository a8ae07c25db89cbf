use rust_decimal::Decimal;
use teller_core::{currency::Money, errors::BankError};

#[test]
fn formats_with_symbol_and_grouping() {
    assert_eq!(Money::from_cents(123_456_789).to_string(), "$1,234,567.89");
    assert_eq!(Money::from_cents(-5_000).to_string(), "-$50.00");
    assert_eq!(Money::ZERO.to_string(), "$0.00");
}

#[test]
fn many_small_deposits_do_not_drift() {
    let dime = Money::parse("0.10").unwrap();
    let total = (0..1_000).try_fold(Money::ZERO, |sum, _| sum.checked_add(dime));
    assert_eq!(total, Some(Money::from_cents(10_000)));
}

#[test]
fn parse_rejects_sub_cent_and_garbage() {
    assert!(matches!(Money::parse("0.001"), Err(BankError::InvalidAmount(_))));
    assert!(matches!(Money::parse("ten"), Err(BankError::InvalidAmount(_))));
    assert_eq!(Money::parse("$2,500.5").unwrap(), Money::from_cents(250_050));
}

#[test]
fn decimal_conversions_keep_two_places() {
    let money = Money::try_from(Decimal::new(7, 1)).unwrap();
    assert_eq!(Decimal::from(money).scale(), 2);
    assert_eq!(money.to_string(), "$0.70");
}

#[test]
fn oversized_amounts_are_refused_instead_of_rounded() {
    assert!(matches!(
        Money::parse("9999999999999999999999999999"),
        Err(BankError::InvalidAmount(_))
    ));
    assert!(Money::try_from(Decimal::MAX).is_err());
    assert_eq!(Money::MAX.checked_add(Money::from_cents(1)), None);
}
