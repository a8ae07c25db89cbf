use serde::{Deserialize, Serialize};

use crate::core::auth;
use crate::domain::account::Account;
use crate::domain::common::*;
use crate::domain::transaction::TransactionRecord;
use crate::errors::BankResult;

/// Contact details captured at registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Profile {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub phone_number: String,
    pub email: String,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A registered identity with credentials, one account and its history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Customer {
    username: String,
    password_hash: String,
    pub profile: Profile,
    account: Account,
    #[serde(default)]
    transaction_history: Vec<TransactionRecord>,
}

impl Customer {
    /// Creates a customer, hashing `password` before it is stored.
    pub fn new(
        username: impl Into<String>,
        password: &str,
        profile: Profile,
        account: Account,
    ) -> BankResult<Self> {
        Ok(Self {
            username: username.into(),
            password_hash: auth::hash_password(password)?,
            profile,
            account,
            transaction_history: Vec::new(),
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn account(&self) -> &Account {
        &self.account
    }

    pub(crate) fn account_mut(&mut self) -> &mut Account {
        &mut self.account
    }

    /// Full history, oldest first.
    pub fn transaction_history(&self) -> &[TransactionRecord] {
        &self.transaction_history
    }

    pub fn verify_password(&self, candidate: &str) -> BankResult<bool> {
        auth::verify_password(candidate, &self.password_hash)
    }

    pub(crate) fn record(&mut self, record: TransactionRecord) -> &TransactionRecord {
        self.transaction_history.push(record);
        let last = self.transaction_history.len() - 1;
        &self.transaction_history[last]
    }
}

impl Displayable for Customer {
    fn display_label(&self) -> String {
        format!("{} ({})", self.profile.full_name(), self.username)
    }
}
