//! Bolt World State
//!
//! Account layouts owned by the World program. Every account is prefixed by
//! an 8-byte discriminator followed by a borsh body.

pub mod account;
pub mod entity;
pub mod error;
pub mod registry;
pub mod world;

pub use account::{DiscriminatedAccount, DISCRIMINATOR_LEN};
pub use entity::Entity;
pub use error::StateError;
pub use registry::Registry;
pub use world::{World, WorldSystems};
