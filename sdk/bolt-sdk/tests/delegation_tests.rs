use bolt_sdk::advanced::delegation::{
    delegate, delegate_component, undelegate, BufferOwner, DelegateAccounts, DelegationAccounts,
    UndelegateAccounts,
};
use bolt_sdk::interface::DelegateArgs;
use bolt_sdk::{BoltConfig, Component, Derivable, Identity};
use solana_sdk::pubkey::Pubkey;

fn test_config() -> BoltConfig {
    BoltConfig::new(Pubkey::new_unique(), Pubkey::new_unique())
}

/// Delegate then undelegate of the same account resolve the same record,
/// metadata and commit accounts.
#[test_log::test]
fn test_round_trip_addresses_are_stable() {
    let config = test_config();
    let owner = Identity::new(Pubkey::new_unique());
    let payer = Pubkey::new_unique();
    let account = Pubkey::new_unique();

    let delegate_ix = delegate(
        &config,
        DelegateAccounts::new(payer, Pubkey::new_unique(), account),
        &owner,
        DelegateArgs::default(),
    )
    .unwrap();
    let undelegate_ix = undelegate(
        &config,
        UndelegateAccounts::new(payer, account, owner.program, payer),
    )
    .unwrap();

    let on_delegate =
        DelegationAccounts::derive(&config, &account, &owner.program, BufferOwner::Program)
            .unwrap();
    let on_undelegate =
        DelegationAccounts::derive(&config, &account, &owner.program, BufferOwner::Unowned)
            .unwrap();

    assert_eq!(on_delegate.delegation_record, on_undelegate.delegation_record);
    assert_eq!(on_delegate.delegation_metadata, on_undelegate.delegation_metadata);
    assert_eq!(on_delegate.commit_state, on_undelegate.commit_state);
    assert_eq!(on_delegate.commit_state_record, on_undelegate.commit_state_record);

    assert_eq!(delegate_ix.accounts[5].pubkey, undelegate_ix.accounts[6].pubkey);
    assert_eq!(delegate_ix.accounts[6].pubkey, undelegate_ix.accounts[7].pubkey);
    assert_eq!(undelegate_ix.accounts[4].pubkey, on_undelegate.commit_state);
    assert_eq!(undelegate_ix.accounts[5].pubkey, on_undelegate.commit_state_record);
}

#[test]
fn test_auxiliary_accounts_use_published_seeds() {
    let config = test_config();
    let account = Pubkey::new_unique();
    let owner = Pubkey::new_unique();
    let aux = DelegationAccounts::derive(&config, &account, &owner, BufferOwner::Program).unwrap();

    let find = |tag: &[u8], program: &Pubkey| {
        Pubkey::find_program_address(&[tag, account.as_ref()], program).0
    };
    assert_eq!(aux.buffer, find(b"buffer", &owner));
    assert_eq!(aux.delegation_record, find(b"delegation", &config.delegation_program));
    assert_eq!(aux.delegation_metadata, find(b"account-seeds", &config.delegation_program));
    assert_eq!(aux.commit_state, find(b"state-diff", &config.delegation_program));
    assert_eq!(
        aux.commit_state_record,
        find(b"commit-state-record", &config.delegation_program)
    );
}

#[test]
fn test_undelegate_overrides_replace_derivation() {
    let config = test_config();
    let buffer = Pubkey::new_unique();
    let record = Pubkey::new_unique();
    let mut accounts = UndelegateAccounts::new(
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
        Pubkey::new_unique(),
    );
    accounts.buffer = Derivable::Override(buffer);
    accounts.delegation_record = Some(record).into();

    let ix = undelegate(&config, accounts).unwrap();
    assert_eq!(ix.accounts[3].pubkey, buffer);
    assert_eq!(ix.accounts[6].pubkey, record);
}

#[test]
fn test_component_delegation_targets_component_program() {
    let config = test_config();
    let component = Component::new(Pubkey::new_unique());
    let entity = Pubkey::new_unique();

    let ixs = delegate_component(
        &config,
        &Pubkey::new_unique(),
        &entity,
        &component,
        Some("pos"),
        DelegateArgs {
            commit_frequency_ms: 500,
            validator: None,
        },
        false,
    )
    .unwrap();

    assert_eq!(ixs.len(), 1);
    assert_eq!(ixs[0].program_id, component.program());
    assert_eq!(
        ixs[0].accounts[2].pubkey,
        component.pda(&entity, Some("pos")).unwrap().address
    );
    assert_eq!(ixs[0].accounts[7].pubkey, config.delegation_program);
}
