use crate::core::constants::{DELEGATION_PROGRAM_ID, WORLD_PROGRAM_ID};
use crate::error::{BoltSdkError, Result};
use bolt_interface::MAX_APPLY_ARITY;
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

pub const ENV_WORLD_PROGRAM_ID: &str = "BOLT_WORLD_PROGRAM_ID";
pub const ENV_DELEGATION_PROGRAM_ID: &str = "BOLT_DELEGATION_PROGRAM_ID";
pub const ENV_MAX_COMPONENTS: &str = "BOLT_MAX_COMPONENTS";

/// Deployment identities and limits used by every derivation and builder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoltConfig {
    /// Program that owns Registry, World and Entity accounts.
    #[serde(with = "pubkey_string")]
    pub world_program: Pubkey,

    /// Program that takes ownership of delegated accounts.
    #[serde(with = "pubkey_string")]
    pub delegation_program: Pubkey,

    /// Upper bound on components per apply. Capped at [`MAX_APPLY_ARITY`].
    pub max_components: usize,
}

impl Default for BoltConfig {
    fn default() -> Self {
        Self {
            world_program: WORLD_PROGRAM_ID,
            delegation_program: DELEGATION_PROGRAM_ID,
            max_components: MAX_APPLY_ARITY,
        }
    }
}

impl BoltConfig {
    pub fn new(world_program: Pubkey, delegation_program: Pubkey) -> Self {
        Self {
            world_program,
            delegation_program,
            ..Self::default()
        }
    }

    pub fn with_max_components(mut self, max_components: usize) -> Self {
        self.max_components = max_components;
        self
    }

    /// Components one apply may touch. Configuration can lower the host
    /// ceiling but not raise it.
    pub fn max_arity(&self) -> usize {
        self.max_components.min(MAX_APPLY_ARITY)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| BoltSdkError::InvalidConfig(e.to_string()))
    }

    /// Defaults overridden by `BOLT_*` environment variables.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(value) = lookup(ENV_WORLD_PROGRAM_ID) {
            config.world_program = parse_pubkey(ENV_WORLD_PROGRAM_ID, &value)?;
        }
        if let Some(value) = lookup(ENV_DELEGATION_PROGRAM_ID) {
            config.delegation_program = parse_pubkey(ENV_DELEGATION_PROGRAM_ID, &value)?;
        }
        if let Some(value) = lookup(ENV_MAX_COMPONENTS) {
            config.max_components = value.trim().parse().map_err(|_| {
                BoltSdkError::InvalidConfig(format!("{ENV_MAX_COMPONENTS}: not a number: {value}"))
            })?;
        }
        Ok(config)
    }
}

fn parse_pubkey(key: &str, value: &str) -> Result<Pubkey> {
    Pubkey::from_str(value.trim())
        .map_err(|e| BoltSdkError::InvalidConfig(format!("{key}: {e}")))
}

mod pubkey_string {
    use serde::{de, Deserialize, Deserializer, Serializer};
    use solana_sdk::pubkey::Pubkey;
    use std::str::FromStr;

    pub fn serialize<S: Serializer>(key: &Pubkey, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(key)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Pubkey, D::Error> {
        let s = String::deserialize(deserializer)?;
        Pubkey::from_str(&s).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn default_pins_public_deployment() {
        let config = BoltConfig::default();
        assert_eq!(config.world_program, WORLD_PROGRAM_ID);
        assert_eq!(config.delegation_program, DELEGATION_PROGRAM_ID);
        assert_eq!(config.max_arity(), MAX_APPLY_ARITY);
    }

    #[test]
    fn max_arity_never_exceeds_host_ceiling() {
        assert_eq!(BoltConfig::default().with_max_components(64).max_arity(), MAX_APPLY_ARITY);
        assert_eq!(BoltConfig::default().with_max_components(2).max_arity(), 2);
    }

    #[test]
    fn json_round_trip_uses_base58() {
        let world = Pubkey::new_unique();
        let config = BoltConfig::new(world, DELEGATION_PROGRAM_ID);
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains(&world.to_string()));
        assert_eq!(BoltConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn json_fills_missing_fields_with_defaults() {
        let config = BoltConfig::from_json(r#"{"maxComponents": 3}"#).unwrap();
        assert_eq!(config.world_program, WORLD_PROGRAM_ID);
        assert_eq!(config.max_components, 3);
    }

    #[test]
    fn env_overrides() {
        let world = Pubkey::new_unique();
        let vars: HashMap<&str, String> = [
            (ENV_WORLD_PROGRAM_ID, world.to_string()),
            (ENV_MAX_COMPONENTS, "4".to_string()),
        ]
        .into_iter()
        .collect();
        let config = BoltConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.world_program, world);
        assert_eq!(config.delegation_program, DELEGATION_PROGRAM_ID);
        assert_eq!(config.max_components, 4);
    }

    #[test]
    fn env_rejects_garbage() {
        let err = BoltConfig::from_lookup(|k| {
            (k == ENV_DELEGATION_PROGRAM_ID).then(|| "not-a-key".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, BoltSdkError::InvalidConfig(_)));
    }
}
