//! Bolt Instruction Definitions
//!
//! Payload layout is `[8-byte discriminator][borsh arguments]`. Account order
//! is positional and documented per variant.

use crate::discriminator::{self, DISCRIMINATOR_LEN};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use std::io;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorldInstruction {
    /// Create the Registry singleton
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Registry (PDA: ["registry"])
    /// 2. `[]` System program
    InitializeRegistry,

    /// Create a World with the next Registry id
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` World (PDA: ["world", registry.world_count])
    /// 2. `[writable]` Registry
    /// 3. `[]` System program
    InitializeNewWorld,

    /// Accounts:
    /// 0. `[writable, signer]` Authority
    /// 1. `[]` New authority
    /// 2. `[writable]` World
    /// 3. `[]` System program
    AddAuthority { world_id: u64 },

    /// Accounts:
    /// 0. `[writable, signer]` Authority
    /// 1. `[]` Authority to remove
    /// 2. `[writable]` World
    /// 3. `[]` System program
    RemoveAuthority { world_id: u64 },

    /// Accounts:
    /// 0. `[writable, signer]` Authority
    /// 1. `[writable]` World
    /// 2. `[]` System to approve
    /// 3. `[]` System program
    ApproveSystem,

    /// Accounts: same as `ApproveSystem`
    RemoveSystem,

    /// Create an entity, by ordinal when `extra_seed` is `None`
    ///
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Entity
    /// 2. `[writable]` World
    /// 3. `[]` System program
    AddEntity { extra_seed: Option<Vec<u8>> },

    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Component data (PDA: [seed, entity] under component program)
    /// 2. `[]` Entity
    /// 3. `[]` Component program
    /// 4. `[]` Authority
    /// 5. `[]` Instructions sysvar
    /// 6. `[]` System program
    InitializeComponent,

    /// Accounts:
    /// 0. `[signer]` Authority
    /// 1. `[writable]` Receiver of the reclaimed deposit
    /// 2. `[]` Component program
    /// 3. `[]` Component program data
    /// 4. `[]` Entity
    /// 5. `[writable]` Component data
    /// 6. `[]` Instructions sysvar
    /// 7. `[]` System program
    DestroyComponent,

    /// Apply a system to `arity` components
    ///
    /// Accounts:
    /// 0. `[signer]` Authority
    /// 1. `[]` System program being applied
    /// 2.. `[]` Component program, `[writable]` component data (one pair per component)
    /// n. `[]` World program (delimiter)
    /// n+1.. extra accounts forwarded to the system
    Apply { arity: u8, args: Vec<u8> },
}

impl WorldInstruction {
    /// Discriminator of this operation, `None` for an apply arity without a
    /// deployed layout.
    pub fn discriminator(&self) -> Option<[u8; DISCRIMINATOR_LEN]> {
        let disc = match self {
            Self::InitializeRegistry => discriminator::INITIALIZE_REGISTRY,
            Self::InitializeNewWorld => discriminator::INITIALIZE_NEW_WORLD,
            Self::AddAuthority { .. } => discriminator::ADD_AUTHORITY,
            Self::RemoveAuthority { .. } => discriminator::REMOVE_AUTHORITY,
            Self::ApproveSystem => discriminator::APPROVE_SYSTEM,
            Self::RemoveSystem => discriminator::REMOVE_SYSTEM,
            Self::AddEntity { .. } => discriminator::ADD_ENTITY,
            Self::InitializeComponent => discriminator::INITIALIZE_COMPONENT,
            Self::DestroyComponent => discriminator::DESTROY_COMPONENT,
            Self::Apply { arity, .. } => return discriminator::apply_discriminator(*arity as usize),
        };
        Some(disc)
    }

    /// Serialize to instruction data.
    pub fn data(&self) -> io::Result<Vec<u8>> {
        let disc = self.discriminator().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "no apply layout for this arity")
        })?;
        let mut data = disc.to_vec();
        match self {
            Self::AddAuthority { world_id } | Self::RemoveAuthority { world_id } => {
                world_id.serialize(&mut data)?
            },
            Self::AddEntity { extra_seed } => extra_seed.serialize(&mut data)?,
            Self::Apply { args, .. } => args.serialize(&mut data)?,
            _ => {},
        }
        Ok(data)
    }
}

/// Arguments of a component program's `delegate` instruction.
///
/// Accounts:
/// 0. `[writable, signer]` Payer
/// 1. `[]` Entity
/// 2. `[writable]` Delegated account
/// 3. `[]` Owner program
/// 4. `[writable]` Buffer
/// 5. `[writable]` Delegation record
/// 6. `[writable]` Delegation metadata
/// 7. `[]` Delegation program
/// 8. `[]` System program
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelegateArgs {
    /// How often the accelerator commits state back, in milliseconds. 0 keeps
    /// the validator default.
    pub commit_frequency_ms: u32,
    /// Pin the delegation to one validator.
    pub validator: Option<Pubkey>,
}

impl DelegateArgs {
    pub fn data(&self, discriminator: [u8; DISCRIMINATOR_LEN]) -> io::Result<Vec<u8>> {
        let mut data = discriminator.to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }
}

/// Instructions served by the delegation program itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegationInstruction {
    /// Accounts:
    /// 0. `[writable, signer]` Payer
    /// 1. `[writable]` Delegated account
    /// 2. `[]` Owner program
    /// 3. `[writable]` Buffer (unowned)
    /// 4. `[writable]` Commit state
    /// 5. `[writable]` Commit state record
    /// 6. `[writable]` Delegation record
    /// 7. `[writable]` Delegation metadata
    /// 8. `[writable]` Reimbursement
    /// 9. `[]` System program
    Undelegate,
}

impl DelegationInstruction {
    pub fn data(&self) -> Vec<u8> {
        match self {
            Self::Undelegate => discriminator::UNDELEGATE.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_payload_is_length_prefixed() {
        let ix = WorldInstruction::Apply {
            arity: 2,
            args: b"{}".to_vec(),
        };
        let data = ix.data().unwrap();
        assert_eq!(&data[..8], &discriminator::APPLY[1]);
        assert_eq!(&data[8..12], &2u32.to_le_bytes());
        assert_eq!(&data[12..], b"{}");
    }

    #[test]
    fn apply_without_layout_fails() {
        let ix = WorldInstruction::Apply {
            arity: 6,
            args: vec![],
        };
        assert!(ix.discriminator().is_none());
        assert!(ix.data().is_err());
    }

    #[test]
    fn add_entity_encodes_optional_seed() {
        let plain = WorldInstruction::AddEntity { extra_seed: None }.data().unwrap();
        assert_eq!(plain, [&discriminator::ADD_ENTITY[..], &[0]].concat());

        let seeded = WorldInstruction::AddEntity {
            extra_seed: Some(b"hero".to_vec()),
        }
        .data()
        .unwrap();
        assert_eq!(&seeded[8..10], &[1, 4]);
        assert_eq!(&seeded[13..], b"hero");
    }

    #[test]
    fn authority_ops_carry_world_id() {
        let data = WorldInstruction::AddAuthority { world_id: 9 }.data().unwrap();
        assert_eq!(&data[8..], &9u64.to_le_bytes());
    }

    #[test]
    fn delegate_args_layout() {
        let validator = Pubkey::new_unique();
        let args = DelegateArgs {
            commit_frequency_ms: 30_000,
            validator: Some(validator),
        };
        let data = args.data(discriminator::DELEGATE).unwrap();
        assert_eq!(&data[..8], &discriminator::DELEGATE);
        assert_eq!(&data[8..12], &30_000u32.to_le_bytes());
        assert_eq!(data[12], 1);
        assert_eq!(&data[13..], validator.as_ref());
    }
}
