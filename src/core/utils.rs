use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use dirs::home_dir;

use crate::errors::BankError;

const DEFAULT_DIR_NAME: &str = ".teller_core";
const CONFIG_FILE: &str = "config.json";
const DATA_FILE: &str = "customers.json";

pub const TMP_SUFFIX: &str = "tmp";

pub const HOME_ENV: &str = "TELLER_HOME";
pub const DATA_FILE_ENV: &str = "TELLER_DATA_FILE";

/// Resolves where configuration and customer data live on disk.
pub struct PathResolver;

impl PathResolver {
    /// `$TELLER_HOME`, falling back to `~/.teller_core`.
    pub fn base_dir() -> PathBuf {
        if let Some(custom) = env::var_os(HOME_ENV) {
            return PathBuf::from(custom);
        }
        home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_DIR_NAME)
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join(CONFIG_FILE)
    }

    pub fn data_file_in(base: &Path) -> PathBuf {
        base.join(DATA_FILE)
    }

    /// `$TELLER_DATA_FILE` when set, otherwise `None`.
    pub fn data_file_override() -> Option<PathBuf> {
        env::var_os(DATA_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

pub fn ensure_dir(path: &Path) -> Result<(), BankError> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// `file.json` becomes `file.json.<suffix>`.
pub fn sibling_with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut sibling = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, suffix),
        None => suffix.to_string(),
    };
    sibling.set_extension(ext);
    sibling
}

/// Stages `data` in a `.tmp` sibling, syncs it to disk, then renames it over
/// `path`. Readers see either the old file or the new one.
pub fn write_atomic(path: &Path, data: &str) -> Result<(), BankError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let tmp = sibling_with_suffix(path, TMP_SUFFIX);
    {
        let mut file = File::create(&tmp)?;
        file.write_all(data.as_bytes())?;
        file.flush()?;
        file.sync_all()?;
    }
    fs::rename(&tmp, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn write_atomic_replaces_file_and_leaves_no_staging_copy() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("config.json");
        write_atomic(&path, "first").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        assert!(!sibling_with_suffix(&path, TMP_SUFFIX).exists());
    }

    #[test]
    fn sibling_keeps_original_extension() {
        let path = Path::new("/tmp/customers.json");
        assert_eq!(
            sibling_with_suffix(path, "tmp"),
            PathBuf::from("/tmp/customers.json.tmp")
        );
        assert_eq!(
            sibling_with_suffix(Path::new("/tmp/store"), "bak"),
            PathBuf::from("/tmp/store.bak")
        );
    }
}
