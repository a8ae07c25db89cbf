use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::core::services::DEFAULT_RECENT_LIMIT;
use crate::core::utils::{ensure_dir, write_atomic, PathResolver};
use crate::errors::BankError;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Customer store location; relative paths resolve against the base directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_file: Option<PathBuf>,
    pub recent_transaction_limit: usize,
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: None,
            recent_transaction_limit: DEFAULT_RECENT_LIMIT,
            color: true,
        }
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, BankError> {
        Self::with_base_dir(PathResolver::base_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, BankError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
            base,
        })
    }

    pub fn load(&self) -> Result<Config, BankError> {
        if !self.path.exists() {
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)
            .map_err(|err| BankError::Config(format!("{}: {}", self.path.display(), err)))?;
        if config.recent_transaction_limit == 0 {
            return Err(BankError::Config(
                "recent_transaction_limit must be at least 1".into(),
            ));
        }
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), BankError> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)
    }

    /// Customer store path: `$TELLER_DATA_FILE`, then `config.data_file`,
    /// then `customers.json` in the base directory.
    pub fn resolve_data_file(&self, config: &Config) -> PathBuf {
        if let Some(path) = PathResolver::data_file_override() {
            return path;
        }
        match &config.data_file {
            Some(path) if path.is_absolute() => path.clone(),
            Some(path) => self.base.join(path),
            None => PathResolver::data_file_in(&self.base),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }
}
