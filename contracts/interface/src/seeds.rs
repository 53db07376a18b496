//! Namespace tags prefixed to every derived address.
//!
//! These are part of the published address scheme; changing any byte moves
//! every account derived with it.

/// Registry singleton. PDA: ["registry"] under the World program.
pub const REGISTRY: &[u8] = b"registry";

/// PDA: ["world", world_id_be] under the World program.
pub const WORLD: &[u8] = b"world";

/// PDA: ["entity", world_id_be, ...] under the World program.
pub const ENTITY: &[u8] = b"entity";

/// Component accounts carry no tag: [seed, entity] under the component program.
pub const COMPONENT: &[u8] = b"";

/// Staging buffer used while ownership moves to the delegation program.
pub const BUFFER: &[u8] = b"buffer";

/// Delegation record. PDA: ["delegation", account] under the delegation program.
pub const DELEGATION_RECORD: &[u8] = b"delegation";

/// Seeds of the delegated account, kept for undelegation.
pub const DELEGATION_METADATA: &[u8] = b"account-seeds";

/// Record of the last committed state.
pub const COMMIT_STATE_RECORD: &[u8] = b"commit-state-record";

/// Committed state awaiting finalization.
pub const STATE_DIFF: &[u8] = b"state-diff";

/// Occupies the ordinal slot of a free-form entity seed.
pub const ENTITY_SEED_FILLER: [u8; 8] = [0u8; 8];
