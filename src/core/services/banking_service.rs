//! Deposit, withdrawal and transfer rules.

use tracing::{debug, info, warn};

use crate::core::directory::CustomerDirectory;
use crate::currency::Money;
use crate::domain::{Customer, TransactionKind, TransactionRecord};
use crate::errors::{BankError, BankResult};

/// Number of entries shown by the "recent transactions" view.
pub const DEFAULT_RECENT_LIMIT: usize = 5;

/// Stateless banking operations over customers held by a directory.
pub struct BankingService;

impl BankingService {
    /// Credits `amount` and appends a deposit record.
    pub fn deposit(customer: &mut Customer, amount: Money) -> BankResult<&TransactionRecord> {
        Self::ensure_positive(amount)?;
        let balance = customer.account_mut().credit(amount)?;
        debug!(username = customer.username(), %amount, %balance, "deposit");
        Ok(customer.record(TransactionRecord::new(
            TransactionKind::Deposit,
            amount,
            balance,
        )))
    }

    /// Debits `amount` when the balance covers it; otherwise nothing changes.
    pub fn withdraw(customer: &mut Customer, amount: Money) -> BankResult<&TransactionRecord> {
        Self::ensure_positive(amount)?;
        let balance = match customer.account_mut().debit(amount) {
            Ok(balance) => balance,
            Err(err) => {
                warn!(username = customer.username(), %amount, "withdrawal rejected");
                return Err(err);
            }
        };
        debug!(username = customer.username(), %amount, %balance, "withdrawal");
        Ok(customer.record(TransactionRecord::new(
            TransactionKind::Withdrawal,
            amount,
            balance,
        )))
    }

    /// Moves `amount` from `source` to `destination`.
    ///
    /// Every check, including overflow on the receiving side, runs before
    /// either account is touched, so both balances change or neither does.
    /// Returns the records appended to the source and destination histories.
    pub fn transfer(
        directory: &mut CustomerDirectory,
        source: &str,
        destination: &str,
        amount: Money,
    ) -> BankResult<(TransactionRecord, TransactionRecord)> {
        if source == destination {
            return Err(BankError::SelfTransfer);
        }
        Self::ensure_positive(amount)?;

        let source_balance = directory.get(source)?.account().balance();
        let destination_balance = directory.get(destination)?.account().balance();
        if amount > source_balance {
            warn!(source, destination, %amount, "transfer rejected: insufficient funds");
            return Err(BankError::InsufficientFunds {
                requested: amount,
                available: source_balance,
            });
        }
        destination_balance
            .checked_add(amount)
            .ok_or(BankError::AmountOverflow)?;

        let sender = directory.get_mut(source)?;
        let debited = sender.account_mut().debit(amount)?;
        let outgoing = sender
            .record(TransactionRecord::new(
                TransactionKind::TransferOut {
                    to: destination.to_string(),
                },
                amount,
                debited,
            ))
            .clone();

        let receiver = directory.get_mut(destination)?;
        let credited = receiver.account_mut().credit(amount)?;
        let incoming = receiver
            .record(TransactionRecord::new(
                TransactionKind::TransferIn {
                    from: source.to_string(),
                },
                amount,
                credited,
            ))
            .clone();

        info!(source, destination, %amount, "transfer completed");
        Ok((outgoing, incoming))
    }

    /// The last `limit` records, oldest first.
    pub fn recent_transactions(customer: &Customer, limit: usize) -> &[TransactionRecord] {
        let history = customer.transaction_history();
        &history[history.len().saturating_sub(limit)..]
    }

    fn ensure_positive(amount: Money) -> BankResult<()> {
        if amount.is_positive() {
            Ok(())
        } else {
            Err(BankError::InvalidAmount(format!(
                "{} must be greater than zero",
                amount
            )))
        }
    }
}
