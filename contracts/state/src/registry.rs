use crate::account::DiscriminatedAccount;
use borsh::{BorshDeserialize, BorshSerialize};

/// Deployment-wide singleton that hands out World ids.
///
/// PDA Seeds: ["registry"]
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Registry {
    /// Number of Worlds created so far; the next World receives this id.
    pub world_count: u64,
}

impl DiscriminatedAccount for Registry {
    const DISCRIMINATOR: [u8; 8] = [47, 174, 110, 246, 184, 182, 252, 218];
}

impl Registry {
    /// Id that the next `initialize_new_world` will assign.
    pub fn next_world_id(&self) -> u64 {
        self.world_count
    }
}
