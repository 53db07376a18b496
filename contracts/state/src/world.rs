use crate::account::DiscriminatedAccount;
use crate::error::StateError;
use borsh::{BorshDeserialize, BorshSerialize};
use solana_program::pubkey::Pubkey;
use std::collections::BTreeSet;

/// A World groups entities and gates which systems may mutate them.
///
/// PDA Seeds: ["world", id_be]
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct World {
    /// Assigned once from `Registry::world_count`.
    pub id: u64,

    /// Number of ordinal-addressed entities created so far. Only increases.
    pub entity_count: u64,

    /// Keys allowed to administer the World.
    pub authorities: Vec<Pubkey>,

    /// When true any system may be applied.
    pub permissionless: bool,

    /// Borsh-encoded [`WorldSystems`]; empty until the first approval.
    pub approved_systems: Vec<u8>,
}

impl DiscriminatedAccount for World {
    const DISCRIMINATOR: [u8; 8] = [145, 45, 170, 174, 122, 32, 155, 124];
}

/// Set of system programs approved for a permissioned World.
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct WorldSystems {
    pub approved_systems: BTreeSet<Pubkey>,
}

impl World {
    /// Ordinal the next `add_entity` without an extra seed will assign.
    pub fn next_entity_id(&self) -> u64 {
        self.entity_count
    }

    /// Decode the approved-system set.
    pub fn systems(&self) -> Result<WorldSystems, StateError> {
        if self.approved_systems.is_empty() {
            return Ok(WorldSystems::default());
        }
        Ok(WorldSystems::deserialize(&mut self.approved_systems.as_slice())?)
    }

    /// Whether `system` may currently be applied in this World.
    ///
    /// Informational only: the World program performs the authoritative check.
    pub fn is_system_approved(&self, system: &Pubkey) -> Result<bool, StateError> {
        if self.permissionless {
            return Ok(true);
        }
        Ok(self.systems()?.approved_systems.contains(system))
    }

    pub fn is_authority(&self, key: &Pubkey) -> bool {
        self.authorities.contains(key)
    }
}
