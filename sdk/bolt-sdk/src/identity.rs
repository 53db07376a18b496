//! Component and System identities.
//!
//! One deployed program can serve several roles. An optional name namespaces
//! its method discriminators and its component addresses.

use crate::error::Result;
use crate::pda::{self, DerivedAddress};
use bolt_interface::method_discriminator;
use solana_sdk::pubkey::Pubkey;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identity {
    pub program: Pubkey,
    pub name: Option<String>,
}

impl Identity {
    pub fn new(program: Pubkey) -> Self {
        Self {
            program,
            name: None,
        }
    }

    pub fn named(program: Pubkey, name: impl Into<String>) -> Self {
        Self {
            program,
            name: Some(name.into()),
        }
    }

    /// Discriminator of `method` on this program: first 8 bytes of
    /// `sha256("global:" + [name + "_"] + method)`.
    pub fn discriminator(&self, method: &str) -> [u8; 8] {
        method_discriminator(self.name.as_deref(), method)
    }

    /// Seed that addresses this identity's instance on an entity: the caller's
    /// seed followed by the name, so named instances never share an account.
    pub fn seeds(&self, seed: &str) -> String {
        match &self.name {
            Some(name) => format!("{seed}{name}"),
            None => seed.to_string(),
        }
    }
}

impl From<Pubkey> for Identity {
    fn from(program: Pubkey) -> Self {
        Self::new(program)
    }
}

/// A program holding per-entity state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Component(pub Identity);

impl Component {
    pub fn new(program: Pubkey) -> Self {
        Self(Identity::new(program))
    }

    pub fn named(program: Pubkey, name: impl Into<String>) -> Self {
        Self(Identity::named(program, name))
    }

    pub fn program(&self) -> Pubkey {
        self.0.program
    }

    pub fn identity(&self) -> &Identity {
        &self.0
    }

    /// Address of this component's data on `entity`.
    pub fn pda(&self, entity: &Pubkey, seed: Option<&str>) -> Result<DerivedAddress> {
        let seed = self.0.seeds(seed.unwrap_or_default());
        pda::find_component_pda(&self.0.program, entity, seed.as_bytes())
    }
}

impl From<Pubkey> for Component {
    fn from(program: Pubkey) -> Self {
        Self::new(program)
    }
}

/// A stateless program applied to components.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct System(pub Identity);

impl System {
    pub fn new(program: Pubkey) -> Self {
        Self(Identity::new(program))
    }

    pub fn named(program: Pubkey, name: impl Into<String>) -> Self {
        Self(Identity::named(program, name))
    }

    pub fn program(&self) -> Pubkey {
        self.0.program
    }

    pub fn identity(&self) -> &Identity {
        &self.0
    }
}

impl From<Pubkey> for System {
    fn from(program: Pubkey) -> Self {
        Self::new(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unnamed_discriminator_is_global() {
        let id = Identity::new(Pubkey::new_unique());
        assert_eq!(id.discriminator("delegate"), [90, 147, 75, 178, 85, 88, 4, 137]);
    }

    #[test]
    fn name_namespaces_discriminator() {
        let program = Pubkey::new_unique();
        let velocity = Identity::named(program, "velocity");
        assert_eq!(
            velocity.discriminator("initialize"),
            [142, 44, 104, 159, 232, 173, 101, 141]
        );
        assert_ne!(
            velocity.discriminator("initialize"),
            Identity::new(program).discriminator("initialize")
        );
    }

    #[test]
    fn discriminator_is_stable() {
        let id = Identity::named(Pubkey::new_unique(), "position");
        assert_eq!(id.discriminator("update"), id.discriminator("update"));
    }

    #[test]
    fn named_instances_have_distinct_addresses() {
        let program = Pubkey::new_unique();
        let entity = Pubkey::new_unique();
        let a = Component::named(program, "a").pda(&entity, None).unwrap();
        let b = Component::named(program, "b").pda(&entity, None).unwrap();
        let plain = Component::new(program).pda(&entity, None).unwrap();
        assert_ne!(a.address, b.address);
        assert_ne!(a.address, plain.address);
    }
}
