use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::{
    core::{
        directory::CustomerDirectory,
        utils::{sibling_with_suffix, write_atomic},
    },
    errors::BankError,
};

use super::{CustomerStore, Result};

const BACKUP_SUFFIX: &str = "bak";

pub const STORE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct StoreDocument {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    customers: CustomerDirectory,
}

/// Flat JSON file holding every customer.
///
/// Writes stage to `<file>.tmp` and rename over the target; the previous
/// file is kept as `<file>.bak`.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn backup_path(&self) -> PathBuf {
        sibling_with_suffix(&self.path, BACKUP_SUFFIX)
    }
}

impl CustomerStore for JsonFileStore {
    fn import_all(&self) -> Result<CustomerDirectory> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no customer store yet");
            return Ok(CustomerDirectory::new());
        }
        let data = fs::read_to_string(&self.path)?;
        let document: StoreDocument = serde_json::from_str(&data)?;
        if document.schema_version > STORE_SCHEMA_VERSION {
            return Err(BankError::Storage(format!(
                "customer store `{}` is from a newer schema version ({})",
                self.path.display(),
                document.schema_version
            )));
        }
        document.customers.validate()?;
        info!(
            path = %self.path.display(),
            customers = document.customers.len(),
            "customer store loaded"
        );
        Ok(document.customers)
    }

    fn export_all(&self, directory: &CustomerDirectory) -> Result<()> {
        let document = StoreDocumentRef {
            schema_version: STORE_SCHEMA_VERSION,
            saved_at: Utc::now(),
            customers: directory,
        };
        let json = serde_json::to_string_pretty(&document)?;
        if self.path.exists() {
            fs::copy(&self.path, self.backup_path())?;
        }
        write_atomic(&self.path, &json)?;
        info!(
            path = %self.path.display(),
            customers = directory.len(),
            "customer store saved"
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct StoreDocumentRef<'a> {
    schema_version: u32,
    saved_at: DateTime<Utc>,
    customers: &'a CustomerDirectory,
}
