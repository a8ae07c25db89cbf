pub mod auth;
pub mod directory;
pub mod services;
pub mod session;
pub mod utils;

pub use directory::{CustomerDirectory, Registration};
pub use services::BankingService;
pub use session::{SessionController, SessionMode};
