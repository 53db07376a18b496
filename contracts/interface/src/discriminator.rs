//! Instruction discriminators.
//!
//! Deployed programs match on these bytes; the table must not change.

use sha2::{Digest, Sha256};

pub const DISCRIMINATOR_LEN: usize = 8;

/// First 8 bytes of `sha256("<namespace>:<name>")`.
pub fn sighash(namespace: &str, name: &str) -> [u8; DISCRIMINATOR_LEN] {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(b":");
    hasher.update(name.as_bytes());
    let hash = hasher.finalize();
    let mut out = [0u8; DISCRIMINATOR_LEN];
    out.copy_from_slice(&hash[..DISCRIMINATOR_LEN]);
    out
}

/// Instruction discriminator of `method` on a program, optionally namespaced by
/// a component or system name (`global:<name>_<method>`).
pub fn method_discriminator(name: Option<&str>, method: &str) -> [u8; DISCRIMINATOR_LEN] {
    match name {
        Some(name) => sighash("global", &format!("{name}_{method}")),
        None => sighash("global", method),
    }
}

pub const INITIALIZE_REGISTRY: [u8; 8] = [189, 181, 20, 17, 174, 57, 249, 59];
pub const INITIALIZE_NEW_WORLD: [u8; 8] = [23, 96, 88, 194, 200, 203, 200, 98];
pub const ADD_AUTHORITY: [u8; 8] = [229, 9, 106, 73, 91, 213, 109, 183];
pub const REMOVE_AUTHORITY: [u8; 8] = [242, 104, 208, 132, 190, 250, 74, 216];
pub const APPROVE_SYSTEM: [u8; 8] = [114, 165, 105, 68, 52, 67, 207, 121];
pub const REMOVE_SYSTEM: [u8; 8] = [218, 80, 71, 80, 161, 130, 149, 120];
pub const ADD_ENTITY: [u8; 8] = [163, 241, 57, 35, 244, 244, 48, 57];
pub const INITIALIZE_COMPONENT: [u8; 8] = [36, 143, 233, 113, 12, 234, 61, 30];
pub const DESTROY_COMPONENT: [u8; 8] = [40, 197, 69, 196, 67, 95, 219, 73];

/// `delegate` on an unnamed component program.
pub const DELEGATE: [u8; 8] = [90, 147, 75, 178, 85, 88, 4, 137];

/// `undelegate` on the delegation program (little-endian instruction index 3).
pub const UNDELEGATE: [u8; 8] = [3, 0, 0, 0, 0, 0, 0, 0];

/// Apply variants indexed by `arity - 1`: apply, apply2, apply3, apply4, apply5.
pub const APPLY: [[u8; 8]; 5] = [
    [248, 243, 145, 24, 105, 50, 162, 225],
    [120, 32, 116, 154, 158, 159, 208, 73],
    [254, 146, 49, 7, 236, 131, 105, 221],
    [223, 104, 24, 79, 252, 196, 14, 109],
    [70, 164, 214, 28, 136, 116, 84, 153],
];

/// Highest number of components one `apply` can touch.
///
/// This is the number of fixed account layouts the World program exposes and
/// is bounded by the host's per-transaction account limit. Raising it requires
/// a matching program deployment.
pub const MAX_APPLY_ARITY: usize = APPLY.len();

/// Discriminator of the apply variant whose layout holds `arity` components.
pub fn apply_discriminator(arity: usize) -> Option<[u8; 8]> {
    arity.checked_sub(1).and_then(|i| APPLY.get(i)).copied()
}
