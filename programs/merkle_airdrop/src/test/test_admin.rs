use super::*;
use anchor_lang::error::{ComparedValues, Error};
use crate::constants::{LEDGER_LAYOUT_VERSION, MAX_ROLE_MEMBERS, MAX_UPGRADE_AMOUNT};
use crate::instructions::*;
use crate::state::{PauseState, Role};

const ROOT: [u8; 32] = [7u8; 32];
const OTHER_ROOT: [u8; 32] = [9u8; 32];

fn stranger() -> Pubkey {
    account(0x51)
}

#[test]
fn test_initialize_seeds_roles() {
    let ledger = ledger_with_root(ROOT);

    assert_eq!(ledger.layout_version, LEDGER_LAYOUT_VERSION);
    assert_eq!(ledger.token_mint, token_mint());
    assert_eq!(ledger.merkle_root, ROOT);
    assert_eq!(ledger.pause_state, PauseState::Active);
    assert_eq!(ledger.claim_stats(), Default::default());
    for role in Role::ALL {
        assert!(ledger.roles.has_role(role, &admin()), "admin lacks {}", role);
        assert!(!ledger.roles.has_role(role, &stranger()));
    }
}

#[test]
fn test_initialize_rejects_zero_values() {
    let mut ledger = AirdropLedger::default();
    assert_airdrop_error(
        apply_initialize(&mut ledger, 255, token_mint(), Some(admin()), admin(), [0; 32]),
        AirdropError::MerkleRootNotSet,
    );
    assert_airdrop_error(
        apply_initialize(&mut ledger, 255, Pubkey::default(), Some(admin()), admin(), ROOT),
        AirdropError::InvalidTokenAddress,
    );
    assert_eq!(ledger, AirdropLedger::default());
}

#[test]
fn test_initialize_requires_mint_authority() {
    let attacker = stranger();
    let mut ledger = AirdropLedger::default();

    // Someone other than the mint authority cannot take the ledger
    assert_airdrop_error(
        apply_initialize(&mut ledger, 254, token_mint(), Some(admin()), attacker, ROOT),
        AirdropError::MintAuthorityMismatch,
    );
    // A mint without an authority cannot be bound at all
    assert_airdrop_error(
        apply_initialize(&mut ledger, 254, token_mint(), None, attacker, ROOT),
        AirdropError::MintAuthorityMismatch,
    );
    assert_eq!(ledger, AirdropLedger::default());
    for role in Role::ALL {
        assert!(!ledger.roles.has_role(role, &attacker));
    }

    // The mint authority can still create it afterwards
    apply_initialize(&mut ledger, 254, token_mint(), Some(admin()), admin(), ROOT).unwrap();
    assert!(ledger.roles.has_role(Role::Admin, &admin()));
    assert!(!ledger.roles.has_role(Role::Admin, &attacker));
}

/// Values attached to the error returned by `result`
fn compared_values<T: std::fmt::Debug>(result: Result<T>) -> ComparedValues {
    match result {
        Err(Error::AnchorError(error)) => error
            .compared_values
            .expect("error should carry compared values"),
        other => panic!("expected an anchor error, got {:?}", other),
    }
}

#[test]
fn test_unauthorized_error_names_role_and_caller() {
    let mut ledger = ledger_with_root(ROOT);

    match compared_values(apply_set_merkle_root(&mut ledger, &stranger(), OTHER_ROOT)) {
        ComparedValues::Values((role, caller)) => {
            assert_eq!(role, "ADMIN");
            assert_eq!(caller, stranger().to_string());
        }
        other => panic!("unexpected compared values {:?}", other),
    }

    match compared_values(apply_pause(&mut ledger, &stranger())) {
        ComparedValues::Values((role, caller)) => {
            assert_eq!(role, "PAUSER");
            assert_eq!(caller, stranger().to_string());
        }
        other => panic!("unexpected compared values {:?}", other),
    }

    match compared_values(apply_renounce_role(&mut ledger, &stranger(), Role::Admin, &admin())) {
        ComparedValues::Pubkeys((account, caller)) => {
            assert_eq!(account, admin());
            assert_eq!(caller, stranger());
        }
        other => panic!("unexpected compared values {:?}", other),
    }
}

#[test]
fn test_set_merkle_root() {
    let mut ledger = ledger_with_root(ROOT);

    let previous = apply_set_merkle_root(&mut ledger, &admin(), OTHER_ROOT).unwrap();
    assert_eq!(previous, ROOT);
    assert_eq!(ledger.merkle_root, OTHER_ROOT);

    assert_airdrop_error(
        apply_set_merkle_root(&mut ledger, &admin(), [0; 32]),
        AirdropError::MerkleRootNotSet,
    );
    assert_eq!(ledger.merkle_root, OTHER_ROOT);

    assert_airdrop_error(
        apply_set_merkle_root(&mut ledger, &stranger(), ROOT),
        AirdropError::AccessControlUnauthorized,
    );
    assert_eq!(ledger.merkle_root, OTHER_ROOT);
}

#[test]
fn test_set_root_leaves_claim_stats() {
    let mut ledger = ledger_with_root(ROOT);
    ledger.total_claimed = 5000;
    ledger.total_claimers = 4;

    apply_set_merkle_root(&mut ledger, &admin(), OTHER_ROOT).unwrap();
    assert_eq!(ledger.total_claimed, 5000);
    assert_eq!(ledger.total_claimers, 4);
}

#[test]
fn test_pause_transitions() {
    let mut ledger = ledger_with_root(ROOT);

    assert_airdrop_error(apply_unpause(&mut ledger, &admin()), AirdropError::NotPaused);

    apply_pause(&mut ledger, &admin()).unwrap();
    assert!(ledger.is_paused());
    assert_airdrop_error(apply_pause(&mut ledger, &admin()), AirdropError::AlreadyPaused);

    // Admin operations are not gated by the pause
    apply_set_merkle_root(&mut ledger, &admin(), OTHER_ROOT).unwrap();

    apply_unpause(&mut ledger, &admin()).unwrap();
    assert_eq!(ledger.pause_state, PauseState::Active);
}

#[test]
fn test_pause_requires_pauser() {
    let mut ledger = ledger_with_root(ROOT);
    let pauser = account(0x50);

    assert_airdrop_error(
        apply_pause(&mut ledger, &pauser),
        AirdropError::AccessControlUnauthorized,
    );

    apply_grant_role(&mut ledger, &admin(), Role::Pauser, pauser).unwrap();
    apply_pause(&mut ledger, &pauser).unwrap();

    // Admin without PAUSER cannot resume
    apply_renounce_role(&mut ledger, &admin(), Role::Pauser, &admin()).unwrap();
    assert_airdrop_error(
        apply_unpause(&mut ledger, &admin()),
        AirdropError::AccessControlUnauthorized,
    );
    apply_unpause(&mut ledger, &pauser).unwrap();
}

#[test]
fn test_set_upgrade_amount() {
    let mut ledger = ledger_with_root(ROOT);

    let previous = apply_set_upgrade_amount(&mut ledger, &admin(), 500_000_000_000).unwrap();
    assert_eq!(previous, 0);
    assert_eq!(ledger.upgrade_amount, 500_000_000_000);

    apply_set_upgrade_amount(&mut ledger, &admin(), MAX_UPGRADE_AMOUNT).unwrap();
    assert_airdrop_error(
        apply_set_upgrade_amount(&mut ledger, &admin(), MAX_UPGRADE_AMOUNT + 1),
        AirdropError::UpgradeAmountTooHigh,
    );
    assert_airdrop_error(
        apply_set_upgrade_amount(&mut ledger, &stranger(), 1),
        AirdropError::AccessControlUnauthorized,
    );
    assert_eq!(ledger.upgrade_amount, MAX_UPGRADE_AMOUNT);
}

#[test]
fn test_emergency_withdraw_checks() {
    let ledger = ledger_with_root(ROOT);

    check_emergency_withdraw(&ledger, &admin(), 1000, 1000).unwrap();
    assert_airdrop_error(
        check_emergency_withdraw(&ledger, &admin(), 0, 1000),
        AirdropError::InvalidAmount,
    );
    assert_airdrop_error(
        check_emergency_withdraw(&ledger, &admin(), 1001, 1000),
        AirdropError::InsufficientBalance,
    );
    assert_airdrop_error(
        check_emergency_withdraw(&ledger, &stranger(), 1000, 1000),
        AirdropError::AccessControlUnauthorized,
    );

    // Pausers and upgraders cannot sweep tokens
    let mut ledger = ledger;
    let operator = account(0x0F);
    apply_grant_role(&mut ledger, &admin(), Role::Pauser, operator).unwrap();
    apply_grant_role(&mut ledger, &admin(), Role::Upgrader, operator).unwrap();
    assert_airdrop_error(
        check_emergency_withdraw(&ledger, &operator, 1000, 1000),
        AirdropError::AccessControlUnauthorized,
    );
}

#[test]
fn test_grant_and_revoke_role() {
    let mut ledger = ledger_with_root(ROOT);
    let upgrader = account(0x0A);

    assert!(apply_grant_role(&mut ledger, &admin(), Role::Upgrader, upgrader).unwrap());
    assert!(ledger.roles.has_role(Role::Upgrader, &upgrader));
    // Granting twice is a no-op
    assert!(!apply_grant_role(&mut ledger, &admin(), Role::Upgrader, upgrader).unwrap());
    assert_eq!(ledger.roles.members(Role::Upgrader).len(), 2);

    // Non-admins cannot administer roles, even the role they hold
    assert_airdrop_error(
        apply_grant_role(&mut ledger, &upgrader, Role::Upgrader, stranger()),
        AirdropError::AccessControlUnauthorized,
    );
    assert_airdrop_error(
        apply_revoke_role(&mut ledger, &upgrader, Role::Upgrader, &admin()),
        AirdropError::AccessControlUnauthorized,
    );

    assert!(apply_revoke_role(&mut ledger, &admin(), Role::Upgrader, &upgrader).unwrap());
    assert!(!ledger.roles.has_role(Role::Upgrader, &upgrader));
    assert!(!apply_revoke_role(&mut ledger, &admin(), Role::Upgrader, &upgrader).unwrap());
}

#[test]
fn test_new_admin_can_administer() {
    let mut ledger = ledger_with_root(ROOT);
    let successor = account(0x5C);

    apply_grant_role(&mut ledger, &admin(), Role::Admin, successor).unwrap();
    apply_revoke_role(&mut ledger, &successor, Role::Admin, &admin()).unwrap();

    assert!(!ledger.roles.has_role(Role::Admin, &admin()));
    assert_airdrop_error(
        apply_set_merkle_root(&mut ledger, &admin(), OTHER_ROOT),
        AirdropError::AccessControlUnauthorized,
    );
    apply_set_merkle_root(&mut ledger, &successor, OTHER_ROOT).unwrap();
}

#[test]
fn test_renounce_role_only_for_self() {
    let mut ledger = ledger_with_root(ROOT);

    assert_airdrop_error(
        apply_renounce_role(&mut ledger, &stranger(), Role::Admin, &admin()),
        AirdropError::BadRenounceConfirmation,
    );
    assert!(ledger.roles.has_role(Role::Admin, &admin()));

    // Renouncing a role not held succeeds without change
    assert!(!apply_renounce_role(&mut ledger, &stranger(), Role::Admin, &stranger()).unwrap());

    assert!(apply_renounce_role(&mut ledger, &admin(), Role::Upgrader, &admin()).unwrap());
    assert!(!ledger.roles.has_role(Role::Upgrader, &admin()));
    assert!(ledger.roles.has_role(Role::Admin, &admin()));
}

#[test]
fn test_role_capacity() {
    let mut ledger = ledger_with_root(ROOT);

    for seed in 1..MAX_ROLE_MEMBERS as u8 {
        apply_grant_role(&mut ledger, &admin(), Role::Pauser, account(seed)).unwrap();
    }
    assert_eq!(ledger.roles.members(Role::Pauser).len(), MAX_ROLE_MEMBERS);
    assert_airdrop_error(
        apply_grant_role(&mut ledger, &admin(), Role::Pauser, account(0x77)),
        AirdropError::RoleCapacityExceeded,
    );

    // Other roles have their own capacity
    apply_grant_role(&mut ledger, &admin(), Role::Upgrader, account(0x77)).unwrap();
}

#[test]
fn test_upgrade_preserves_state() {
    let mut ledger = ledger_with_root(ROOT);
    apply_set_upgrade_amount(&mut ledger, &admin(), 1_000_000_000_000).unwrap();
    apply_set_merkle_root(&mut ledger, &admin(), OTHER_ROOT).unwrap();
    apply_pause(&mut ledger, &admin()).unwrap();
    ledger.total_claimed = 3000;
    ledger.total_claimers = 2;
    let before = ledger.clone();

    let implementation = account(0x1F);
    apply_upgrade_to(&mut ledger, &admin(), implementation).unwrap();

    assert_eq!(ledger.implementation, implementation);
    let mut expected = before;
    expected.implementation = implementation;
    assert_eq!(ledger, expected);
}

#[test]
fn test_upgrade_requires_upgrader_and_target() {
    let mut ledger = ledger_with_root(ROOT);
    let upgrader = account(0x0A);

    assert_airdrop_error(
        apply_upgrade_to(&mut ledger, &admin(), Pubkey::default()),
        AirdropError::InvalidImplementation,
    );
    assert_airdrop_error(
        apply_upgrade_to(&mut ledger, &upgrader, account(0x1F)),
        AirdropError::AccessControlUnauthorized,
    );

    apply_grant_role(&mut ledger, &admin(), Role::Upgrader, upgrader).unwrap();
    apply_upgrade_to(&mut ledger, &upgrader, account(0x1F)).unwrap();
    assert_eq!(ledger.implementation, account(0x1F));
}

#[test]
fn test_ledger_len_covers_full_registry() {
    let mut ledger = ledger_with_root(ROOT);
    for role in Role::ALL {
        for seed in 1..MAX_ROLE_MEMBERS as u8 {
            ledger.roles.grant(role, account(seed)).unwrap();
        }
    }

    let mut serialized = Vec::new();
    ledger.try_serialize(&mut serialized).unwrap();
    assert_eq!(serialized.len(), AirdropLedger::LEN);
}
