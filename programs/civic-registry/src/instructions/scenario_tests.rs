//! End-to-end flow over the domain functions, with accounts held as plain structs.

use anchor_lang::error::Error;
use anchor_lang::prelude::*;

use super::{
    add_authorized_official::authorize,
    complete_service::complete,
    initialize::initialize_registry,
    register_citizen::register,
    request_service::{submit, NewRequest},
    update_budget::set_budget,
};
use crate::{error::RegistryError, state::*};

const DEPLOYED_AT: i64 = 1_700_000_000;

struct Ledger {
    registry: RegistryState,
    admin: Pubkey,
}

fn deploy() -> Ledger {
    let admin = Pubkey::new_unique();
    let mut registry = RegistryState::default();
    initialize_registry(&mut registry, admin);

    Ledger { registry, admin }
}

fn water_leak(requester: Pubkey, requested_at: i64) -> NewRequest {
    NewRequest {
        requester,
        requested_at,
        request_id: derive_request_id(requested_at, &requester),
        service_type: "water".into(),
        description: "leak at 5th ave".into(),
    }
}

#[test]
fn citizen_request_completed_by_admin() {
    let mut ledger = deploy();
    assert_eq!(ledger.registry.budget, 0);
    assert_eq!(ledger.registry.total_citizens, 0);

    let alice = Pubkey::new_unique();
    let mut alice_record = Citizen::default();
    let registered = register(
        &mut ledger.registry,
        &mut RosterEntry::default(),
        &mut alice_record,
        alice,
        "Alice".into(),
        DEPLOYED_AT + 10,
    )
    .unwrap();
    assert_eq!(registered.id, 1);
    assert!(alice_record.registered);

    let now = DEPLOYED_AT + 20;
    let mut request = ServiceRequest::default();
    let mut first_log_entry = RequestLogEntry::default();
    let requested = submit(
        &mut ledger.registry,
        &mut first_log_entry,
        &alice_record,
        &mut request,
        water_leak(alice, now),
        now,
    )
    .unwrap();
    assert!(!request.completed);

    let completed = complete(
        &ledger.registry,
        &Official::default(),
        &mut request,
        ledger.admin,
        requested.request_id,
    )
    .unwrap();
    assert!(request.completed);
    assert_eq!(completed.official, ledger.admin);

    // Identical inputs in the same second land on the same ID and replace the
    // completed record with a fresh open one.
    let mut second_log_entry = RequestLogEntry::default();
    submit(
        &mut ledger.registry,
        &mut second_log_entry,
        &alice_record,
        &mut request,
        water_leak(alice, now),
        now,
    )
    .unwrap();
    assert_eq!(request.id, requested.request_id);
    assert!(!request.completed);
    assert_eq!(first_log_entry.request_id, requested.request_id);
    assert_eq!(second_log_entry.request_id, requested.request_id);
    assert_eq!(second_log_entry.index, 1);
    assert_eq!(ledger.registry.total_requests, 2);
}

#[test]
fn official_granted_by_admin_can_complete() {
    let mut ledger = deploy();
    let bob = Pubkey::new_unique();
    let mut bob_record = Citizen::default();
    register(
        &mut ledger.registry,
        &mut RosterEntry::default(),
        &mut bob_record,
        bob,
        "Bob".into(),
        DEPLOYED_AT,
    )
    .unwrap();

    let inspector = Pubkey::new_unique();
    let mut grant = Official::default();
    let mut request = ServiceRequest::default();
    let requested = submit(
        &mut ledger.registry,
        &mut RequestLogEntry::default(),
        &bob_record,
        &mut request,
        water_leak(bob, DEPLOYED_AT),
        DEPLOYED_AT,
    )
    .unwrap();

    let err = complete(&ledger.registry, &grant, &mut request, inspector, requested.request_id)
        .unwrap_err();
    assert_eq!(err, Error::from(RegistryError::NotAuthorized));

    authorize(&ledger.registry, &mut grant, ledger.admin, inspector, DEPLOYED_AT).unwrap();
    complete(&ledger.registry, &grant, &mut request, inspector, requested.request_id).unwrap();
    assert!(request.completed);
}

#[test]
fn only_admin_manages_officials_and_budget() {
    let mut ledger = deploy();
    let citizen = Pubkey::new_unique();
    let before = ledger.registry.clone();

    let mut grant = Official::default();
    let err = authorize(&ledger.registry, &mut grant, citizen, citizen, DEPLOYED_AT).unwrap_err();
    assert_eq!(err, Error::from(RegistryError::NotAuthorized));

    let err = set_budget(&mut ledger.registry, citizen, 1_000).unwrap_err();
    assert_eq!(err, Error::from(RegistryError::NotAuthorized));

    assert_eq!(grant, Official::default());
    assert_eq!(ledger.registry.budget, before.budget);
    assert_eq!(ledger.registry.admin, before.admin);

    let updated = set_budget(&mut ledger.registry, ledger.admin, 1_000).unwrap();
    assert_eq!(updated, BudgetUpdated { new_budget: 1_000, updated_by: ledger.admin });
}
