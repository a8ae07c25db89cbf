//! Append-only records of balance-changing events.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::currency::Money;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// Classifies a transaction record and names the counterparty for transfers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TransactionKind {
    OpeningDeposit,
    Deposit,
    Withdrawal,
    TransferOut { to: String },
    TransferIn { from: String },
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::OpeningDeposit => "Initial deposit",
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
            TransactionKind::TransferOut { .. } | TransactionKind::TransferIn { .. } => "Transfer",
        }
    }

    pub fn counterparty(&self) -> Option<&str> {
        match self {
            TransactionKind::TransferOut { to } => Some(to.as_str()),
            TransactionKind::TransferIn { from } => Some(from.as_str()),
            _ => None,
        }
    }
}

/// Immutable log entry describing one balance change on a customer's account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransactionRecord {
    pub id: Uuid,
    pub kind: TransactionKind,
    pub amount: Money,
    pub balance_after: Money,
    pub timestamp: DateTime<Utc>,
}

impl TransactionRecord {
    pub fn new(kind: TransactionKind, amount: Money, balance_after: Money) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            amount,
            balance_after,
            timestamp: Utc::now(),
        }
    }

    /// `Deposit of $50.00 | balance $150.00 | 2026-10-17 12:00:00 UTC`; transfers
    /// name the counterparty after the amount.
    pub fn describe(&self) -> String {
        let direction = match &self.kind {
            TransactionKind::TransferOut { to } => format!(" to `{}`", to),
            TransactionKind::TransferIn { from } => format!(" from `{}`", from),
            _ => String::new(),
        };
        format!(
            "{} of {}{} | balance {} | {}",
            self.kind.label(),
            self.amount,
            direction,
            self.balance_after,
            self.timestamp.format(TIMESTAMP_FORMAT)
        )
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_descriptions_name_the_counterparty() {
        let out = TransactionRecord::new(
            TransactionKind::TransferOut { to: "bob".into() },
            Money::from_cents(10_000),
            Money::from_cents(5_000),
        );
        let text = out.describe();
        assert!(
            text.starts_with("Transfer of $100.00 to `bob` | balance $50.00 | "),
            "{text}"
        );
        assert!(text.ends_with(" UTC"), "{text}");
        assert_eq!(out.kind.counterparty(), Some("bob"));
    }

    #[test]
    fn deposit_description_has_amount_balance_and_timestamp() {
        let record = TransactionRecord::new(
            TransactionKind::Deposit,
            Money::from_cents(5_000),
            Money::from_cents(15_000),
        );
        let expected = format!(
            "Deposit of $50.00 | balance $150.00 | {}",
            record.timestamp.format(TIMESTAMP_FORMAT)
        );
        assert_eq!(record.describe(), expected);
        assert_eq!(record.to_string(), expected);
    }

    #[test]
    fn kind_serializes_with_tag() {
        let json = serde_json::to_string(&TransactionKind::TransferIn {
            from: "alice".into(),
        })
        .unwrap();
        assert_eq!(json, r#"{"type":"transfer_in","from":"alice"}"#);
    }
}
