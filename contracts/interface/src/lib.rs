//! Bolt Interface
//!
//! Namespace tags, discriminators and instruction payloads shared by every
//! client of the World and delegation programs.

pub mod discriminator;
pub mod instruction;
pub mod seeds;

pub use discriminator::{apply_discriminator, method_discriminator, sighash, MAX_APPLY_ARITY};
pub use instruction::{DelegateArgs, DelegationInstruction, WorldInstruction};
