use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

use crate::currency::Money;

/// Error type that captures banking, storage and configuration failures.
#[derive(Debug, Error)]
pub enum BankError {
    #[error("Username `{0}` is unavailable. Try another.")]
    DuplicateUsername(String),
    #[error("No such user exists: `{0}`")]
    NotFound(String),
    #[error("Invalid credentials.")]
    InvalidCredentials,
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },
    #[error("Cannot transfer funds to your own account.")]
    SelfTransfer,
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Amount would overflow the account balance.")]
    AmountOverflow,
    #[error("No customer is signed in.")]
    NotAuthenticated,
    #[error("Persistence error: {0}")]
    Storage(String),
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),
}

pub type BankResult<T> = Result<T, BankError>;

impl From<io::Error> for BankError {
    fn from(err: io::Error) -> Self {
        BankError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for BankError {
    fn from(err: serde_json::Error) -> Self {
        BankError::Storage(err.to_string())
    }
}

/// User-facing CLI error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Bank(#[from] BankError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] ReadlineError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("Input closed.")]
    InputClosed,
}

impl CliError {
    /// Domain failures are reported and the menu loop carries on.
    pub fn is_recoverable(&self) -> bool {
        match self {
            CliError::Bank(err) => !matches!(err, BankError::Storage(_) | BankError::Config(_)),
            _ => false,
        }
    }
}
