//! Authoritative username-to-customer mapping.

use std::collections::{btree_map::Entry, BTreeMap};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::currency::Money;
use crate::domain::{Account, Customer, Profile, TransactionKind, TransactionRecord};
use crate::errors::{BankError, BankResult};

/// Everything needed to open a new customer record.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub profile: Profile,
    pub initial_deposit: Money,
}

/// Owns every customer, keyed by a unique username.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct CustomerDirectory {
    customers: BTreeMap<String, Customer>,
}

impl CustomerDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the customer and its account together. Usernames are unique;
    /// a taken name fails before anything is hashed or stored.
    pub fn register(&mut self, registration: Registration) -> BankResult<&Customer> {
        let Registration {
            username,
            password,
            profile,
            initial_deposit,
        } = registration;

        match self.customers.entry(username) {
            Entry::Occupied(slot) => {
                warn!(username = %slot.key(), "registration rejected: duplicate username");
                Err(BankError::DuplicateUsername(slot.key().clone()))
            }
            Entry::Vacant(slot) => {
                let account = Account::open(initial_deposit)?;
                let mut customer = Customer::new(slot.key().clone(), &password, profile, account)?;
                if initial_deposit.is_positive() {
                    customer.record(TransactionRecord::new(
                        TransactionKind::OpeningDeposit,
                        initial_deposit,
                        initial_deposit,
                    ));
                }
                info!(username = %slot.key(), "customer registered");
                Ok(slot.insert(customer))
            }
        }
    }

    /// Looks up `username` and checks the stored credential.
    pub fn authenticate(&self, username: &str, password: &str) -> BankResult<&Customer> {
        let customer = self.get(username)?;
        if customer.verify_password(password)? {
            Ok(customer)
        } else {
            warn!(username, "authentication failed");
            Err(BankError::InvalidCredentials)
        }
    }

    pub fn get(&self, username: &str) -> BankResult<&Customer> {
        self.customers
            .get(username)
            .ok_or_else(|| BankError::NotFound(username.to_string()))
    }

    pub fn get_mut(&mut self, username: &str) -> BankResult<&mut Customer> {
        self.customers
            .get_mut(username)
            .ok_or_else(|| BankError::NotFound(username.to_string()))
    }

    pub fn contains(&self, username: &str) -> bool {
        self.customers.contains_key(username)
    }

    /// Read-only listing ordered by username.
    pub fn all(&self) -> impl Iterator<Item = &Customer> + '_ {
        self.customers.values()
    }

    /// Candidate transfer destinations for `username`.
    pub fn usernames_except<'a>(&'a self, username: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.customers
            .keys()
            .map(String::as_str)
            .filter(move |candidate| *candidate != username)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    /// Checks invariants that a hand-edited or corrupted store could break.
    pub(crate) fn validate(&self) -> BankResult<()> {
        for (key, customer) in &self.customers {
            if key != customer.username() {
                return Err(BankError::Storage(format!(
                    "customer stored under `{}` is named `{}`",
                    key,
                    customer.username()
                )));
            }
            if customer.account().balance().is_negative() {
                return Err(BankError::Storage(format!(
                    "customer `{}` has a negative balance",
                    key
                )));
            }
        }
        Ok(())
    }
}
