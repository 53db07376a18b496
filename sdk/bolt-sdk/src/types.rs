use crate::error::{BoltSdkError, Result};
use crate::identity::Component;
use solana_sdk::pubkey::Pubkey;

/// How an entity is located inside its World.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityIdentifier {
    /// Position in the World's entity counter.
    Ordinal(u64),
    /// Caller-chosen seed. Safe under concurrent creation.
    Seed(Vec<u8>),
}

impl EntityIdentifier {
    /// Resolve the optional pair callers usually carry. A seed takes precedence
    /// over an ordinal.
    pub fn from_parts(ordinal: Option<u64>, seed: Option<&[u8]>) -> Result<Self> {
        match (seed, ordinal) {
            (Some(seed), _) => Ok(Self::Seed(seed.to_vec())),
            (None, Some(ordinal)) => Ok(Self::Ordinal(ordinal)),
            (None, None) => Err(BoltSdkError::MissingIdentifier),
        }
    }

    pub fn seed(seed: impl AsRef<[u8]>) -> Self {
        Self::Seed(seed.as_ref().to_vec())
    }

    /// Extra seed passed to `add_entity`.
    pub fn extra_seed(&self) -> Option<Vec<u8>> {
        match self {
            Self::Ordinal(_) => None,
            Self::Seed(seed) => Some(seed.clone()),
        }
    }
}

impl From<u64> for EntityIdentifier {
    fn from(ordinal: u64) -> Self {
        Self::Ordinal(ordinal)
    }
}

/// An account that is derived by default but can be supplied explicitly.
///
/// Overrides let advanced callers compose flows the default derivation does
/// not cover, such as delegating a staging buffer itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Derivable<T> {
    Default,
    Override(T),
}

impl<T> Default for Derivable<T> {
    fn default() -> Self {
        Derivable::Default
    }
}

impl<T> Derivable<T> {
    /// The override, or the result of `derive` when none was supplied.
    pub fn resolve(self, derive: impl FnOnce() -> Result<T>) -> Result<T> {
        match self {
            Derivable::Default => derive(),
            Derivable::Override(value) => Ok(value),
        }
    }

    pub fn is_override(&self) -> bool {
        matches!(self, Derivable::Override(_))
    }
}

impl<T> From<Option<T>> for Derivable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Derivable::Default, Derivable::Override)
    }
}

/// Decoded state of a World.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorldInfo {
    pub id: u64,
    pub address: Pubkey,

    /// Ordinal the next unseeded entity receives.
    pub entity_count: u64,

    pub authorities: Vec<Pubkey>,

    /// When true any system may be applied.
    pub permissionless: bool,

    /// Systems approved while the World is permissioned.
    pub approved_systems: Vec<Pubkey>,
}

/// The components of one entity a system touches.
#[derive(Debug, Clone)]
pub struct EntityComponents {
    pub entity: Pubkey,
    pub components: Vec<Component>,
    /// One seed per component, in component order. `None` means every
    /// component uses the empty seed.
    pub seeds: Option<Vec<String>>,
}

impl EntityComponents {
    pub fn new(entity: Pubkey, components: Vec<Component>) -> Self {
        Self {
            entity,
            components,
            seeds: None,
        }
    }

    pub fn with_seeds(mut self, seeds: Vec<String>) -> Self {
        self.seeds = Some(seeds);
        self
    }

    /// Pair every component with its seed, checking the lists line up.
    pub fn seeded_components(&self) -> Result<Vec<(&Component, &str)>> {
        match &self.seeds {
            None => Ok(self.components.iter().map(|c| (c, "")).collect()),
            Some(seeds) if seeds.len() != self.components.len() => {
                Err(BoltSdkError::SeedLengthMismatch {
                    expected: self.components.len(),
                    actual: seeds.len(),
                })
            },
            Some(seeds) => Ok(self
                .components
                .iter()
                .zip(seeds.iter().map(String::as_str))
                .collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn identifier_requires_ordinal_or_seed() {
        assert_matches!(
            EntityIdentifier::from_parts(None, None),
            Err(BoltSdkError::MissingIdentifier)
        );
        assert_eq!(
            EntityIdentifier::from_parts(Some(4), None).unwrap(),
            EntityIdentifier::Ordinal(4)
        );
        assert_eq!(
            EntityIdentifier::from_parts(Some(4), Some(b"hero")).unwrap(),
            EntityIdentifier::seed("hero")
        );
    }

    #[test]
    fn derivable_prefers_override() {
        let key = Pubkey::new_unique();
        let resolved = Derivable::Override(key)
            .resolve(|| panic!("must not derive"))
            .unwrap();
        assert_eq!(resolved, key);

        let other = Pubkey::new_unique();
        let derived = Derivable::<Pubkey>::Default.resolve(|| Ok(other)).unwrap();
        assert_eq!(derived, other);
        assert_eq!(Derivable::from(Some(key)), Derivable::Override(key));
    }

    #[test]
    fn seeds_must_match_components() {
        let entity = Pubkey::new_unique();
        let group = EntityComponents::new(
            entity,
            vec![
                Component::new(Pubkey::new_unique()),
                Component::new(Pubkey::new_unique()),
            ],
        )
        .with_seeds(vec!["pos".to_string()]);
        assert_matches!(
            group.seeded_components(),
            Err(BoltSdkError::SeedLengthMismatch {
                expected: 2,
                actual: 1
            })
        );
    }
}
