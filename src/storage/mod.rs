pub mod json_backend;

use crate::{core::directory::CustomerDirectory, errors::BankError};

pub type Result<T> = std::result::Result<T, BankError>;

/// Abstraction over persistence backends that hold the whole customer directory.
///
/// The directory is imported once at startup and exported once at shutdown.
pub trait CustomerStore {
    /// Loads every customer. A store that does not exist yet yields an empty directory.
    fn import_all(&self) -> Result<CustomerDirectory>;

    /// Replaces the stored contents with `directory`.
    fn export_all(&self, directory: &CustomerDirectory) -> Result<()>;
}

pub use json_backend::{JsonFileStore, STORE_SCHEMA_VERSION};
