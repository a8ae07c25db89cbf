mod common;

use common::{cents, directory_with, registration, PASSWORD};
use teller_core::{
    core::{BankingService, CustomerDirectory, SessionController, SessionMode},
    domain::TransactionKind,
    errors::BankError,
};

#[test]
fn fresh_usernames_register_and_authenticate() {
    let mut directory = CustomerDirectory::new();
    for name in ["alice", "bob", "carol_99"] {
        let id = directory.register(registration(name, 1_000)).unwrap().account().id;
        let customer = directory.authenticate(name, PASSWORD).unwrap();
        assert_eq!(customer.username(), name);
        assert_eq!(customer.account().id, id);
    }

    let err = directory.register(registration("bob", 0)).unwrap_err();
    assert!(matches!(err, BankError::DuplicateUsername(ref name) if name == "bob"));
    assert_eq!(directory.len(), 3);
}

#[test]
fn deposits_add_exactly_the_amount() {
    let mut directory = directory_with(&[("alice", 0)]);
    let customer = directory.get_mut("alice").unwrap();
    let mut expected = cents(0);
    for amount in [1, 10, 99, 12_345, 1] {
        let before = customer.account().balance();
        let record = BankingService::deposit(customer, cents(amount)).unwrap();
        assert_eq!(record.balance_after, before.checked_add(cents(amount)).unwrap());
        expected = expected.checked_add(cents(amount)).unwrap();
    }
    assert_eq!(customer.account().balance(), expected);
}

#[test]
fn overdrawing_fails_without_side_effects() {
    let mut directory = directory_with(&[("alice", 5_000)]);
    let customer = directory.get_mut("alice").unwrap();
    let history_len = customer.transaction_history().len();
    for amount in [5_001, 10_000, 1_000_000] {
        let err = BankingService::withdraw(customer, cents(amount)).unwrap_err();
        assert!(matches!(err, BankError::InsufficientFunds { .. }));
        assert_eq!(customer.account().balance(), cents(5_000));
    }
    assert_eq!(customer.transaction_history().len(), history_len);
}

#[test]
fn transfers_conserve_money() {
    for amount in [1, 2_500, 9_999, 10_000] {
        let mut directory = directory_with(&[("alice", 10_000), ("bob", 333)]);
        BankingService::transfer(&mut directory, "alice", "bob", cents(amount)).unwrap();
        let alice = directory.get("alice").unwrap().account().balance();
        let bob = directory.get("bob").unwrap().account().balance();
        assert_eq!(alice, cents(10_000 - amount));
        assert_eq!(bob, cents(333 + amount));
        assert_eq!(alice.checked_add(bob).unwrap(), cents(10_333));
    }
}

#[test]
fn self_transfer_always_fails() {
    let mut directory = directory_with(&[("alice", 10_000)]);
    for amount in [0, 1, 10_000, 50_000] {
        let err = BankingService::transfer(&mut directory, "alice", "alice", cents(amount))
            .unwrap_err();
        assert!(matches!(err, BankError::SelfTransfer));
    }
    assert_eq!(directory.get("alice").unwrap().account().balance(), cents(10_000));
}

#[test]
fn alice_and_bob_walkthrough_through_the_session() {
    let mut session = SessionController::new(CustomerDirectory::new());
    session
        .directory_mut()
        .register(registration("alice", 10_000))
        .unwrap();
    session.login("alice", PASSWORD).unwrap();
    assert_eq!(session.mode(), SessionMode::Authenticated);

    assert_eq!(session.deposit(cents(5_000)).unwrap().balance_after, cents(15_000));
    assert!(matches!(
        session.withdraw(cents(20_000)),
        Err(BankError::InsufficientFunds { .. })
    ));
    assert_eq!(
        session.current_customer().unwrap().account().balance(),
        cents(15_000)
    );

    session.directory_mut().register(registration("bob", 0)).unwrap();
    let alice_before = session.directory().get("alice").unwrap().transaction_history().len();
    let bob_before = session.directory().get("bob").unwrap().transaction_history().len();

    let outgoing = session.transfer_to("bob", cents(10_000)).unwrap();
    assert_eq!(outgoing.kind, TransactionKind::TransferOut { to: "bob".into() });

    let alice = session.directory().get("alice").unwrap();
    let bob = session.directory().get("bob").unwrap();
    assert_eq!(alice.account().balance(), cents(5_000));
    assert_eq!(bob.account().balance(), cents(10_000));
    assert_eq!(alice.transaction_history().len(), alice_before + 1);
    assert_eq!(bob.transaction_history().len(), bob_before + 1);
    assert!(bob
        .transaction_history()
        .last()
        .unwrap()
        .describe()
        .contains("from `alice`"));

    assert_eq!(session.logout().as_deref(), Some("alice"));
    assert!(matches!(
        session.deposit(cents(100)),
        Err(BankError::NotAuthenticated)
    ));
}

#[test]
fn recent_transactions_are_the_chronological_tail() {
    let mut directory = directory_with(&[("alice", 100)]);
    let customer = directory.get_mut("alice").unwrap();
    for amount in 1..=7 {
        BankingService::deposit(customer, cents(amount)).unwrap();
    }
    let recent = BankingService::recent_transactions(customer, 5);
    let amounts: Vec<_> = recent.iter().map(|record| record.amount).collect();
    assert_eq!(amounts, (3..=7).map(cents).collect::<Vec<_>>());
}
