//! Deterministic address derivation.
//!
//! Every derivation uses the seed order `[namespace tag, ...identifying seeds]`
//! under an owning program. Results are pure functions of their inputs, so any
//! client can locate state without a lookup table.

use crate::core::config::BoltConfig;
use crate::error::{BoltSdkError, Result};
use crate::types::EntityIdentifier;
use bolt_interface::seeds;
use solana_sdk::bpf_loader_upgradeable;
use solana_sdk::pubkey::Pubkey;
use tracing::trace;

/// Host limit on the number of seeds in one derivation.
pub const MAX_SEEDS: usize = 16;

/// Host limit on the length of a single seed.
pub const MAX_SEED_LEN: usize = 32;

/// Namespace tag prefixed to a derivation's seeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NamespaceTag(&'static [u8]);

impl NamespaceTag {
    /// No tag. The derivation uses only its identifying seeds.
    pub const UNTAGGED: Self = Self(b"");
    pub const REGISTRY: Self = Self(seeds::REGISTRY);
    pub const WORLD: Self = Self(seeds::WORLD);
    pub const ENTITY: Self = Self(seeds::ENTITY);
    pub const COMPONENT: Self = Self(seeds::COMPONENT);
    pub const BUFFER: Self = Self(seeds::BUFFER);
    pub const DELEGATION_RECORD: Self = Self(seeds::DELEGATION_RECORD);
    pub const DELEGATION_METADATA: Self = Self(seeds::DELEGATION_METADATA);
    pub const COMMIT_STATE_RECORD: Self = Self(seeds::COMMIT_STATE_RECORD);
    pub const STATE_DIFF: Self = Self(seeds::STATE_DIFF);

    pub fn as_bytes(&self) -> &'static [u8] {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// An address derived from seeds, with the bump that pushed it off the curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DerivedAddress {
    pub address: Pubkey,
    pub bump: u8,
}

impl From<(Pubkey, u8)> for DerivedAddress {
    fn from((address, bump): (Pubkey, u8)) -> Self {
        Self { address, bump }
    }
}

impl From<DerivedAddress> for Pubkey {
    fn from(derived: DerivedAddress) -> Self {
        derived.address
    }
}

/// Derive the address of `seeds` under `owner`, tagged with `tag`.
///
/// An empty tag contributes no seed. Seed limits are checked up front so an
/// oversized seed is reported as an error instead of a host panic.
pub fn derive(tag: NamespaceTag, seeds: &[&[u8]], owner: &Pubkey) -> Result<DerivedAddress> {
    let mut all: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
    if !tag.is_empty() {
        all.push(tag.as_bytes());
    }
    all.extend_from_slice(seeds);

    // The bump occupies one seed slot.
    if all.len() >= MAX_SEEDS {
        return Err(BoltSdkError::TooManySeeds {
            count: all.len(),
            max: MAX_SEEDS - 1,
        });
    }
    if let Some((index, seed)) = all.iter().enumerate().find(|(_, s)| s.len() > MAX_SEED_LEN) {
        return Err(BoltSdkError::SeedTooLong {
            index,
            len: seed.len(),
            max: MAX_SEED_LEN,
        });
    }

    let derived: DerivedAddress = Pubkey::try_find_program_address(&all, owner)
        .ok_or(BoltSdkError::NoViableBump(*owner))?
        .into();
    trace!(
        tag = %String::from_utf8_lossy(tag.as_bytes()),
        owner = %owner,
        address = %derived.address,
        bump = derived.bump,
        "derived address"
    );
    Ok(derived)
}

/// Registry singleton. PDA: ["registry"]
pub fn find_registry_pda(config: &BoltConfig) -> Result<DerivedAddress> {
    derive(NamespaceTag::REGISTRY, &[], &config.world_program)
}

/// PDA: ["world", world_id_be]
pub fn find_world_pda(config: &BoltConfig, world_id: u64) -> Result<DerivedAddress> {
    derive(
        NamespaceTag::WORLD,
        &[&world_id.to_be_bytes()],
        &config.world_program,
    )
}

/// Entity address inside a World.
///
/// Ordinal branch: ["entity", world_id_be, ordinal_be].
/// Seed branch: ["entity", world_id_be, [0u8; 8], seed].
///
/// The filler keeps the seed branch's preimage strictly longer than the ordinal
/// branch's, which is what keeps the two address spaces apart. An empty seed
/// would concatenate to exactly the preimage of ordinal 0 and is rejected.
pub fn find_entity_pda(
    config: &BoltConfig,
    world_id: u64,
    entity: &EntityIdentifier,
) -> Result<DerivedAddress> {
    let world_id = world_id.to_be_bytes();
    match entity {
        EntityIdentifier::Ordinal(ordinal) => derive(
            NamespaceTag::ENTITY,
            &[&world_id, &ordinal.to_be_bytes()],
            &config.world_program,
        ),
        EntityIdentifier::Seed(seed) => {
            if seed.is_empty() {
                return Err(BoltSdkError::EmptyEntitySeed);
            }
            derive(
                NamespaceTag::ENTITY,
                &[&world_id, &seeds::ENTITY_SEED_FILLER, seed],
                &config.world_program,
            )
        },
    }
}

/// Component data of `entity`, owned by the component program itself.
///
/// PDA: [seed, entity] under `component_program`. Keying by the component
/// program rather than a shared program is what lets every component program
/// be addressed without a registry.
pub fn find_component_pda(
    component_program: &Pubkey,
    entity: &Pubkey,
    seed: &[u8],
) -> Result<DerivedAddress> {
    derive(
        NamespaceTag::COMPONENT,
        &[seed, entity.as_ref()],
        component_program,
    )
}

/// Staging buffer of `account`. PDA: ["buffer", account] under `owner`.
pub fn find_buffer_pda(account: &Pubkey, owner: &Pubkey) -> Result<DerivedAddress> {
    derive(NamespaceTag::BUFFER, &[account.as_ref()], owner)
}

/// PDA: ["delegation", account] under the delegation program.
pub fn find_delegation_record_pda(config: &BoltConfig, account: &Pubkey) -> Result<DerivedAddress> {
    derive(
        NamespaceTag::DELEGATION_RECORD,
        &[account.as_ref()],
        &config.delegation_program,
    )
}

/// PDA: ["account-seeds", account] under the delegation program.
pub fn find_delegation_metadata_pda(
    config: &BoltConfig,
    account: &Pubkey,
) -> Result<DerivedAddress> {
    derive(
        NamespaceTag::DELEGATION_METADATA,
        &[account.as_ref()],
        &config.delegation_program,
    )
}

/// PDA: ["state-diff", account] under the delegation program.
pub fn find_commit_state_pda(config: &BoltConfig, account: &Pubkey) -> Result<DerivedAddress> {
    derive(
        NamespaceTag::STATE_DIFF,
        &[account.as_ref()],
        &config.delegation_program,
    )
}

/// PDA: ["commit-state-record", account] under the delegation program.
pub fn find_commit_state_record_pda(
    config: &BoltConfig,
    account: &Pubkey,
) -> Result<DerivedAddress> {
    derive(
        NamespaceTag::COMMIT_STATE_RECORD,
        &[account.as_ref()],
        &config.delegation_program,
    )
}

/// Program-data account of an upgradeable program.
pub fn find_program_data_pda(program: &Pubkey) -> Result<DerivedAddress> {
    derive(
        NamespaceTag::UNTAGGED,
        &[program.as_ref()],
        &bpf_loader_upgradeable::id(),
    )
}
