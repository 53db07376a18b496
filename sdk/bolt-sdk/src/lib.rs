//! Bolt SDK
//!
//! Client library for the Bolt entity-component-system: address derivation,
//! instruction composition for the World and delegation programs, and typed
//! reads of World state.

pub mod advanced;
pub mod basic;
pub mod codec;
pub mod core;
pub mod error;
pub mod identity;
pub mod pda;
pub mod types;
pub mod utils;

pub use crate::basic::retry::{add_entity_with_retry, create_world_with_retry, RetryConfig};
pub use crate::basic::world::BoltWorld;
pub use crate::codec::{ArgsCodec, BorshCodec, JsonCodec};
pub use crate::core::config::BoltConfig;
pub use crate::core::connection::BoltConnection;
pub use crate::error::{BoltSdkError, BoxError, Result};
pub use crate::identity::{Component, Identity, System};
pub use crate::pda::{DerivedAddress, NamespaceTag};
pub use crate::types::{Derivable, EntityComponents, EntityIdentifier, WorldInfo};
pub use crate::utils::{
    fetch_entity, fetch_registry, fetch_world, fetch_world_info, next_entity_pda, next_world_pda,
};

pub mod state {
    pub use bolt_state::{DiscriminatedAccount, Entity, Registry, World, WorldSystems};
}

pub use bolt_interface as interface;
