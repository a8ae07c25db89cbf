#![allow(dead_code)]

use std::sync::Mutex;

use once_cell::sync::Lazy;
use teller_core::{
    config::ConfigManager,
    core::{CustomerDirectory, Registration},
    currency::Money,
    domain::Profile,
    storage::JsonFileStore,
};
use tempfile::TempDir;

pub const PASSWORD: &str = "Sup3r$ecret";

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Creates a store and config manager backed by a unique directory for each test.
pub fn setup_test_env() -> (JsonFileStore, ConfigManager) {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);

    let store = JsonFileStore::new(base.join("customers.json"));
    let config_manager =
        ConfigManager::with_base_dir(base).expect("create config manager for temp dir");
    (store, config_manager)
}

pub fn registration(username: &str, opening_cents: i64) -> Registration {
    Registration {
        username: username.to_string(),
        password: PASSWORD.to_string(),
        profile: Profile {
            first_name: "Test".into(),
            last_name: username.into(),
            address: "1 Test Lane".into(),
            phone_number: "5550000000".into(),
            email: format!("{username}@example.com"),
        },
        initial_deposit: Money::from_cents(opening_cents),
    }
}

pub fn directory_with(customers: &[(&str, i64)]) -> CustomerDirectory {
    let mut directory = CustomerDirectory::new();
    for (username, cents) in customers {
        directory
            .register(registration(username, *cents))
            .expect("register test customer");
    }
    directory
}

pub fn cents(value: i64) -> Money {
    Money::from_cents(value)
}
