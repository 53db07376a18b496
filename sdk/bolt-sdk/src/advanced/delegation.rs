//! Delegation and undelegation of component accounts.
//!
//! Every auxiliary account is derived from the delegated account's address.
//! The only asymmetry between the two directions is the staging buffer: on
//! delegate it is derived under the owner program, on undelegate under the
//! delegation program, which holds it while the account is delegated.

use crate::core::config::BoltConfig;
use crate::error::Result;
use crate::identity::{Component, Identity};
use crate::pda;
use crate::types::Derivable;
use bolt_interface::{DelegateArgs, DelegationInstruction};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::system_program;
use tracing::debug;

/// Program the staging buffer is derived under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferOwner {
    /// The program that owns the account before delegation.
    Program,
    /// The delegation program.
    Unowned,
}

/// Auxiliary accounts of one delegated account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelegationAccounts {
    pub buffer: Pubkey,
    pub delegation_record: Pubkey,
    pub delegation_metadata: Pubkey,
    pub commit_state: Pubkey,
    pub commit_state_record: Pubkey,
}

impl DelegationAccounts {
    pub fn derive(
        config: &BoltConfig,
        account: &Pubkey,
        owner_program: &Pubkey,
        buffer_owner: BufferOwner,
    ) -> Result<Self> {
        let buffer_program = match buffer_owner {
            BufferOwner::Program => owner_program,
            BufferOwner::Unowned => &config.delegation_program,
        };
        Ok(Self {
            buffer: pda::find_buffer_pda(account, buffer_program)?.address,
            delegation_record: pda::find_delegation_record_pda(config, account)?.address,
            delegation_metadata: pda::find_delegation_metadata_pda(config, account)?.address,
            commit_state: pda::find_commit_state_pda(config, account)?.address,
            commit_state_record: pda::find_commit_state_record_pda(config, account)?.address,
        })
    }
}

/// Accounts of a delegate call. Derivable fields are resolved against
/// `account` unless overridden.
#[derive(Debug, Clone)]
pub struct DelegateAccounts {
    pub payer: Pubkey,
    pub entity: Pubkey,
    pub account: Pubkey,
    pub buffer: Derivable<Pubkey>,
    pub delegation_record: Derivable<Pubkey>,
    pub delegation_metadata: Derivable<Pubkey>,
}

impl DelegateAccounts {
    pub fn new(payer: Pubkey, entity: Pubkey, account: Pubkey) -> Self {
        Self {
            payer,
            entity,
            account,
            buffer: Derivable::Default,
            delegation_record: Derivable::Default,
            delegation_metadata: Derivable::Default,
        }
    }

    pub fn with_buffer(mut self, buffer: Pubkey) -> Self {
        self.buffer = Derivable::Override(buffer);
        self
    }

    pub fn with_delegation_record(mut self, record: Pubkey) -> Self {
        self.delegation_record = Derivable::Override(record);
        self
    }

    pub fn with_delegation_metadata(mut self, metadata: Pubkey) -> Self {
        self.delegation_metadata = Derivable::Override(metadata);
        self
    }
}

/// Build the delegate call, sent to the owner program, which hands the
/// account to the delegation program through a CPI.
///
/// The owner's `delegate` discriminator is namespaced by its identity name.
pub fn delegate(
    config: &BoltConfig,
    accounts: DelegateAccounts,
    owner: &Identity,
    args: DelegateArgs,
) -> Result<Instruction> {
    let account = accounts.account;
    let buffer = accounts
        .buffer
        .resolve(|| Ok(pda::find_buffer_pda(&account, &owner.program)?.address))?;
    let delegation_record = accounts
        .delegation_record
        .resolve(|| Ok(pda::find_delegation_record_pda(config, &account)?.address))?;
    let delegation_metadata = accounts
        .delegation_metadata
        .resolve(|| Ok(pda::find_delegation_metadata_pda(config, &account)?.address))?;

    let metas = vec![
        AccountMeta::new(accounts.payer, true),
        AccountMeta::new_readonly(accounts.entity, false),
        AccountMeta::new(account, false),
        AccountMeta::new_readonly(owner.program, false),
        AccountMeta::new(buffer, false),
        AccountMeta::new(delegation_record, false),
        AccountMeta::new(delegation_metadata, false),
        AccountMeta::new_readonly(config.delegation_program, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    debug!(account = %account, owner = %owner.program, "composed delegate");

    Ok(Instruction {
        program_id: owner.program,
        accounts: metas,
        data: args.data(owner.discriminator("delegate"))?,
    })
}

/// Accounts of an undelegate call.
#[derive(Debug, Clone)]
pub struct UndelegateAccounts {
    pub payer: Pubkey,
    pub delegated_account: Pubkey,
    pub owner_program: Pubkey,
    /// Receives the deposits of the closed auxiliary accounts.
    pub reimbursement: Pubkey,
    pub buffer: Derivable<Pubkey>,
    pub commit_state: Derivable<Pubkey>,
    pub commit_state_record: Derivable<Pubkey>,
    pub delegation_record: Derivable<Pubkey>,
    pub delegation_metadata: Derivable<Pubkey>,
}

impl UndelegateAccounts {
    pub fn new(
        payer: Pubkey,
        delegated_account: Pubkey,
        owner_program: Pubkey,
        reimbursement: Pubkey,
    ) -> Self {
        Self {
            payer,
            delegated_account,
            owner_program,
            reimbursement,
            buffer: Derivable::Default,
            commit_state: Derivable::Default,
            commit_state_record: Derivable::Default,
            delegation_record: Derivable::Default,
            delegation_metadata: Derivable::Default,
        }
    }
}

/// Build the undelegate call, sent to the delegation program. On success the
/// account is owned by `owner_program` again.
pub fn undelegate(config: &BoltConfig, accounts: UndelegateAccounts) -> Result<Instruction> {
    let account = accounts.delegated_account;
    let buffer = accounts
        .buffer
        .resolve(|| Ok(pda::find_buffer_pda(&account, &config.delegation_program)?.address))?;
    let commit_state = accounts
        .commit_state
        .resolve(|| Ok(pda::find_commit_state_pda(config, &account)?.address))?;
    let commit_state_record = accounts
        .commit_state_record
        .resolve(|| Ok(pda::find_commit_state_record_pda(config, &account)?.address))?;
    let delegation_record = accounts
        .delegation_record
        .resolve(|| Ok(pda::find_delegation_record_pda(config, &account)?.address))?;
    let delegation_metadata = accounts
        .delegation_metadata
        .resolve(|| Ok(pda::find_delegation_metadata_pda(config, &account)?.address))?;

    let metas = vec![
        AccountMeta::new(accounts.payer, true),
        AccountMeta::new(account, false),
        AccountMeta::new_readonly(accounts.owner_program, false),
        AccountMeta::new(buffer, false),
        AccountMeta::new(commit_state, false),
        AccountMeta::new(commit_state_record, false),
        AccountMeta::new(delegation_record, false),
        AccountMeta::new(delegation_metadata, false),
        AccountMeta::new(accounts.reimbursement, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    debug!(account = %account, owner = %accounts.owner_program, "composed undelegate");

    Ok(Instruction {
        program_id: config.delegation_program,
        accounts: metas,
        data: DelegationInstruction::Undelegate.data(),
    })
}

/// Delegate the data account of `component` on `entity`.
///
/// With `delegate_buffer` a second call follows that delegates the first
/// call's staging buffer. That hop stages through a buffer held by the
/// delegation program, supplied as an override since the default would
/// derive it under the owner program.
pub fn delegate_component(
    config: &BoltConfig,
    payer: &Pubkey,
    entity: &Pubkey,
    component: &Component,
    seed: Option<&str>,
    args: DelegateArgs,
    delegate_buffer: bool,
) -> Result<Vec<Instruction>> {
    let owner = component.identity();
    let account = component.pda(entity, seed)?.address;

    let mut instructions = vec![delegate(
        config,
        DelegateAccounts::new(*payer, *entity, account),
        owner,
        args,
    )?];

    if delegate_buffer {
        let buffer = pda::find_buffer_pda(&account, &owner.program)?.address;
        let staging = pda::find_buffer_pda(&buffer, &config.delegation_program)?.address;
        instructions.push(delegate(
            config,
            DelegateAccounts::new(*payer, *entity, buffer).with_buffer(staging),
            owner,
            args,
        )?);
    }

    Ok(instructions)
}

/// Return the data account of `component` on `entity` to its program.
pub fn undelegate_component(
    config: &BoltConfig,
    payer: &Pubkey,
    entity: &Pubkey,
    component: &Component,
    seed: Option<&str>,
    reimbursement: &Pubkey,
) -> Result<Instruction> {
    let account = component.pda(entity, seed)?.address;
    undelegate(
        config,
        UndelegateAccounts::new(*payer, account, component.program(), *reimbursement),
    )
}
