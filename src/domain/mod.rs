pub mod account;
pub mod common;
pub mod customer;
pub mod transaction;

pub use account::Account;
pub use common::{Displayable, Identifiable};
pub use customer::{Customer, Profile};
pub use transaction::{TransactionKind, TransactionRecord};
