//! Guest/authenticated session state wrapped around the customer directory.

use tracing::info;

use crate::core::directory::CustomerDirectory;
use crate::core::services::BankingService;
use crate::currency::Money;
use crate::domain::{Customer, TransactionRecord};
use crate::errors::{BankError, BankResult};

/// Which menu the session is currently offering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionMode {
    Guest,
    Authenticated,
}

impl SessionMode {
    pub const fn menu_size(self) -> usize {
        match self {
            SessionMode::Guest => 3,
            SessionMode::Authenticated => 6,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Session {
    Guest,
    Authenticated { username: String },
}

/// Owns the directory and tracks who, if anyone, is signed in.
///
/// Starts in [`SessionMode::Guest`]; `login` and `logout` are the only
/// transitions.
#[derive(Debug)]
pub struct SessionController {
    directory: CustomerDirectory,
    session: Session,
}

impl SessionController {
    pub fn new(directory: CustomerDirectory) -> Self {
        Self {
            directory,
            session: Session::Guest,
        }
    }

    pub fn mode(&self) -> SessionMode {
        match self.session {
            Session::Guest => SessionMode::Guest,
            Session::Authenticated { .. } => SessionMode::Authenticated,
        }
    }

    pub fn menu_size(&self) -> usize {
        self.mode().menu_size()
    }

    pub fn current_username(&self) -> Option<&str> {
        match &self.session {
            Session::Guest => None,
            Session::Authenticated { username } => Some(username.as_str()),
        }
    }

    pub fn current_customer(&self) -> Option<&Customer> {
        self.current_username()
            .and_then(|username| self.directory.get(username).ok())
    }

    /// Authenticates against the directory and, on success, moves to the
    /// authenticated state.
    pub fn login(&mut self, username: &str, password: &str) -> BankResult<&Customer> {
        self.directory.authenticate(username, password)?;
        info!(username, "signed in");
        self.session = Session::Authenticated {
            username: username.to_string(),
        };
        self.directory.get(username)
    }

    /// Returns to the guest state, yielding the username that was signed in.
    pub fn logout(&mut self) -> Option<String> {
        match std::mem::replace(&mut self.session, Session::Guest) {
            Session::Guest => None,
            Session::Authenticated { username } => {
                info!(username = %username, "signed out");
                Some(username)
            }
        }
    }

    pub fn deposit(&mut self, amount: Money) -> BankResult<TransactionRecord> {
        let customer = self.current_customer_mut()?;
        BankingService::deposit(customer, amount).cloned()
    }

    pub fn withdraw(&mut self, amount: Money) -> BankResult<TransactionRecord> {
        let customer = self.current_customer_mut()?;
        BankingService::withdraw(customer, amount).cloned()
    }

    /// Transfers from the signed-in customer to `destination`, returning the
    /// record appended to the sender's history.
    pub fn transfer_to(&mut self, destination: &str, amount: Money) -> BankResult<TransactionRecord> {
        let source = self
            .current_username()
            .ok_or(BankError::NotAuthenticated)?
            .to_string();
        let (outgoing, _) =
            BankingService::transfer(&mut self.directory, &source, destination, amount)?;
        Ok(outgoing)
    }

    pub fn recent_transactions(&self, limit: usize) -> BankResult<&[TransactionRecord]> {
        let customer = self.current_customer().ok_or(BankError::NotAuthenticated)?;
        Ok(BankingService::recent_transactions(customer, limit))
    }

    pub fn directory(&self) -> &CustomerDirectory {
        &self.directory
    }

    pub fn directory_mut(&mut self) -> &mut CustomerDirectory {
        &mut self.directory
    }

    pub fn into_directory(self) -> CustomerDirectory {
        self.directory
    }

    fn current_customer_mut(&mut self) -> BankResult<&mut Customer> {
        match &self.session {
            Session::Guest => Err(BankError::NotAuthenticated),
            Session::Authenticated { username } => self.directory.get_mut(username),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::directory::tests::registration;

    fn controller() -> SessionController {
        let mut directory = CustomerDirectory::new();
        directory.register(registration("alice", 10_000)).unwrap();
        directory.register(registration("bob", 0)).unwrap();
        SessionController::new(directory)
    }

    #[test]
    fn starts_as_guest_with_three_options() {
        let controller = controller();
        assert_eq!(controller.mode(), SessionMode::Guest);
        assert_eq!(controller.menu_size(), 3);
        assert!(controller.current_customer().is_none());
    }

    #[test]
    fn login_and_logout_toggle_menu_size() {
        let mut controller = controller();
        controller.login("alice", "Passw0rd!").unwrap();
        assert_eq!(controller.mode(), SessionMode::Authenticated);
        assert_eq!(controller.menu_size(), 6);
        assert_eq!(controller.current_username(), Some("alice"));

        assert_eq!(controller.logout().as_deref(), Some("alice"));
        assert_eq!(controller.menu_size(), 3);
        assert_eq!(controller.logout(), None);
    }

    #[test]
    fn failed_login_stays_guest() {
        let mut controller = controller();
        assert!(matches!(
            controller.login("alice", "nope"),
            Err(BankError::InvalidCredentials)
        ));
        assert!(matches!(
            controller.login("zed", "Passw0rd!"),
            Err(BankError::NotFound(_))
        ));
        assert_eq!(controller.mode(), SessionMode::Guest);
    }

    #[test]
    fn guest_cannot_move_money() {
        let mut controller = controller();
        assert!(matches!(
            controller.deposit(Money::from_cents(100)),
            Err(BankError::NotAuthenticated)
        ));
        assert!(matches!(
            controller.transfer_to("bob", Money::from_cents(100)),
            Err(BankError::NotAuthenticated)
        ));
        assert!(matches!(
            controller.recent_transactions(5),
            Err(BankError::NotAuthenticated)
        ));
    }

    #[test]
    fn operations_apply_to_signed_in_customer() {
        let mut controller = controller();
        controller.login("alice", "Passw0rd!").unwrap();
        controller.deposit(Money::from_cents(5_000)).unwrap();
        controller.withdraw(Money::from_cents(2_000)).unwrap();
        let outgoing = controller
            .transfer_to("bob", Money::from_cents(3_000))
            .unwrap();
        assert_eq!(outgoing.balance_after, Money::from_cents(10_000));

        let recent = controller.recent_transactions(5).unwrap();
        assert_eq!(recent.len(), 4);
        assert_eq!(recent.last(), Some(&outgoing));
        assert_eq!(
            controller
                .directory()
                .get("bob")
                .unwrap()
                .account()
                .balance(),
            Money::from_cents(3_000)
        );
    }
}
