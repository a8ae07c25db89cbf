#![doc(test(attr(deny(warnings))))]

//! Teller Core is a console banking simulator: customers register, sign in,
//! and move money between fixed-point accounts persisted to a JSON file.

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Teller Core tracing initialized.");
    });
}
