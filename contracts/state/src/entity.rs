use crate::account::DiscriminatedAccount;
use borsh::{BorshDeserialize, BorshSerialize};

/// An entity created by a World. Immutable once created.
///
/// PDA Seeds: ["entity", world_id_be] ++ ([entity_id_be] | [[0u8; 8], seed])
#[derive(BorshSerialize, BorshDeserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Entity {
    pub id: u64,
}

impl DiscriminatedAccount for Entity {
    const DISCRIMINATOR: [u8; 8] = [46, 157, 161, 161, 254, 46, 79, 24];
}
