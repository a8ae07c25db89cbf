use std::{fmt, str::FromStr};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::errors::BankError;

/// Number of fractional digits carried by every monetary amount.
pub const MINOR_UNIT_DIGITS: u32 = 2;

const CURRENCY_SYMBOL: char = '$';
const GROUPING_SEPARATOR: char = ',';

/// Fixed-point currency amount with two decimal places.
///
/// Backed by [`Decimal`] so repeated deposits and withdrawals never pick up
/// binary floating-point drift. Values are rounded half away from zero on
/// construction and never exceed [`Money::MAX`] in magnitude, which keeps
/// every sum of two amounts exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::from_parts(0, 0, 0, false, MINOR_UNIT_DIGITS));

    /// $999,999,999,999,999.99
    pub const MAX: Money = Money(Decimal::from_parts(
        1_569_325_055,
        23_283_064,
        0,
        false,
        MINOR_UNIT_DIGITS,
    ));

    pub fn new(value: Decimal) -> Result<Self, BankError> {
        let mut rounded =
            value.round_dp_with_strategy(MINOR_UNIT_DIGITS, RoundingStrategy::MidpointAwayFromZero);
        if rounded.abs() > Self::MAX.0 {
            return Err(BankError::InvalidAmount(format!(
                "{} exceeds the largest supported amount {}",
                value,
                Self::MAX
            )));
        }
        rounded.rescale(MINOR_UNIT_DIGITS);
        Ok(Self(rounded))
    }

    /// Builds an amount from an integer count of cents.
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, MINOR_UNIT_DIGITS))
    }

    /// Parses user-supplied text such as `150`, `150.5` or `$1,250.00`.
    ///
    /// More than two fractional digits is rejected rather than rounded.
    pub fn parse(input: &str) -> Result<Self, BankError> {
        let trimmed = input.trim();
        let (negative, unsigned) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest.trim_start()),
            None => (false, trimmed),
        };
        let unsigned = unsigned.strip_prefix(CURRENCY_SYMBOL).unwrap_or(unsigned);
        let digits: String = unsigned
            .chars()
            .filter(|ch| *ch != GROUPING_SEPARATOR)
            .collect();
        if digits.is_empty() {
            return Err(BankError::InvalidAmount(format!("`{}` is not an amount", input)));
        }
        let value = Decimal::from_str(&digits)
            .map_err(|_| BankError::InvalidAmount(format!("`{}` is not an amount", input)))?;
        if value.normalize().scale() > MINOR_UNIT_DIGITS {
            return Err(BankError::InvalidAmount(format!(
                "`{}` has more than {} decimal places",
                input, MINOR_UNIT_DIGITS
            )));
        }
        Self::new(if negative { -value } else { value })
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(&self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// `None` when the result would leave the supported range.
    pub fn checked_add(self, other: Money) -> Option<Money> {
        self.0.checked_add(other.0).and_then(Self::within_range)
    }

    pub fn checked_sub(self, other: Money) -> Option<Money> {
        self.0.checked_sub(other.0).and_then(Self::within_range)
    }

    fn within_range(value: Decimal) -> Option<Money> {
        (value.abs() <= Self::MAX.0).then_some(Money(value))
    }
}

impl FromStr for Money {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Money::parse(s)
    }
}

impl TryFrom<Decimal> for Money {
    type Error = BankError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Money::new(value)
    }
}

impl From<Money> for Decimal {
    fn from(value: Money) -> Self {
        value.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.0.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
        let sign = if self.is_negative() { "-" } else { "" };
        write!(
            f,
            "{}{}{}.{}",
            sign,
            CURRENCY_SYMBOL,
            group_thousands(whole),
            fraction
        )
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(GROUPING_SEPARATOR);
        }
        grouped.push(ch);
    }
    grouped
}
