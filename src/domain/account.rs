use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;
use crate::domain::common::*;
use crate::errors::{BankError, BankResult};

/// Balance-holding record owned by exactly one customer.
///
/// The balance is only reachable through [`Account::credit`] and
/// [`Account::debit`], which refuse to take it below zero.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Account {
    pub id: Uuid,
    balance: Money,
    pub opened_at: DateTime<Utc>,
}

impl Account {
    /// Opens an account funded with `initial_deposit`, which may be zero.
    pub fn open(initial_deposit: Money) -> BankResult<Self> {
        if initial_deposit.is_negative() {
            return Err(BankError::InvalidAmount(format!(
                "initial deposit {} cannot be negative",
                initial_deposit
            )));
        }
        if initial_deposit > Money::MAX {
            return Err(BankError::AmountOverflow);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            balance: initial_deposit,
            opened_at: Utc::now(),
        })
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn can_debit(&self, amount: Money) -> bool {
        amount <= self.balance
    }

    /// Adds `amount` and returns the resulting balance.
    pub(crate) fn credit(&mut self, amount: Money) -> BankResult<Money> {
        let updated = self
            .balance
            .checked_add(amount)
            .ok_or(BankError::AmountOverflow)?;
        self.balance = updated;
        Ok(updated)
    }

    /// Removes `amount` and returns the resulting balance. Leaves the balance
    /// untouched when funds are short.
    pub(crate) fn debit(&mut self, amount: Money) -> BankResult<Money> {
        if !self.can_debit(amount) {
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        let updated = self
            .balance
            .checked_sub(amount)
            .ok_or(BankError::AmountOverflow)?;
        self.balance = updated;
        Ok(updated)
    }
}

impl Identifiable for Account {
    fn id(&self) -> Uuid {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_rejects_negative_deposit() {
        let err = Account::open(Money::from_cents(-1)).expect_err("negative deposit must fail");
        assert!(matches!(err, BankError::InvalidAmount(_)));
    }

    #[test]
    fn debit_beyond_balance_keeps_balance() {
        let mut account = Account::open(Money::from_cents(1_000)).unwrap();
        let err = account
            .debit(Money::from_cents(1_001))
            .expect_err("overdraft must fail");
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(account.balance(), Money::from_cents(1_000));

        let remaining = account.debit(Money::from_cents(1_000)).unwrap();
        assert_eq!(remaining, Money::ZERO);
    }

    #[test]
    fn credit_returns_new_balance() {
        let mut account = Account::open(Money::ZERO).unwrap();
        assert_eq!(
            account.credit(Money::from_cents(2_550)).unwrap(),
            Money::from_cents(2_550)
        );
    }
}
