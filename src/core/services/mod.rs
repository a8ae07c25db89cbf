pub mod banking_service;

pub use banking_service::{BankingService, DEFAULT_RECENT_LIMIT};
