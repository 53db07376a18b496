use crate::basic::actions::{
    AddEntityBuilder, ApplySystemBuilder, AuthorityBuilder, CreateWorldBuilder,
    DelegateComponentBuilder, DestroyComponentBuilder, InitializeComponentBuilder,
    SystemApprovalBuilder, UndelegateComponentBuilder,
};
use crate::core::config::BoltConfig;
use crate::core::connection::BoltConnection;
use crate::error::{BoltSdkError, Result};
use crate::identity::{Component, System};
use crate::pda::{self, DerivedAddress};
use crate::types::WorldInfo;
use crate::utils;
use solana_sdk::pubkey::Pubkey;

/// Represents a Bolt World on-chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoltWorld {
    /// World id, assigned from the Registry counter
    pub id: u64,

    /// World PDA
    pub address: Pubkey,

    /// Deployment the World lives in
    pub config: BoltConfig,
}

impl BoltWorld {
    /// Handle for World `id` without touching the ledger.
    pub fn new(config: BoltConfig, id: u64) -> Result<Self> {
        let address = pda::find_world_pda(&config, id)?.address;
        Ok(Self::from_parts(config, id, address))
    }

    pub(crate) fn from_parts(config: BoltConfig, id: u64, address: Pubkey) -> Self {
        Self {
            id,
            address,
            config,
        }
    }

    /// Fetch an existing World, checking the stored id matches its address.
    pub async fn fetch(
        connection: &impl BoltConnection,
        config: BoltConfig,
        id: u64,
    ) -> Result<Self> {
        let world = Self::new(config, id)?;
        let state = utils::fetch_world(connection, &world.config, &world.address).await?;
        if state.id != id {
            return Err(BoltSdkError::InvalidAccountData(format!(
                "World at {} stores id {}, expected {id}",
                world.address, state.id
            )));
        }
        Ok(world)
    }

    /// Fetch the World's counters, authorities and approved systems
    pub async fn fetch_info(&self, connection: &impl BoltConnection) -> Result<WorldInfo> {
        utils::fetch_world_info(connection, &self.config, &self.address).await
    }

    /// Whether `system` may currently be applied in this World. The World
    /// program makes the authoritative check when the apply lands.
    pub async fn is_system_approved(
        &self,
        connection: &impl BoltConnection,
        system: &Pubkey,
    ) -> Result<bool> {
        let state = utils::fetch_world(connection, &self.config, &self.address).await?;
        Ok(state.is_system_approved(system)?)
    }

    /// Ordinal and address the next unseeded entity receives. Racy, see
    /// [`utils::next_entity_pda`].
    pub async fn next_entity_pda(
        &self,
        connection: &impl BoltConnection,
    ) -> Result<(u64, DerivedAddress)> {
        utils::next_entity_pda(connection, &self.config, self.id).await
    }

    /// Create the next World in the Registry
    pub fn create(config: BoltConfig) -> CreateWorldBuilder {
        CreateWorldBuilder::new(config)
    }

    pub fn add_entity(&self) -> AddEntityBuilder<'_> {
        AddEntityBuilder::new(self)
    }

    pub fn initialize_component(
        &self,
        entity: Pubkey,
        component: impl Into<Component>,
    ) -> InitializeComponentBuilder<'_> {
        InitializeComponentBuilder::new(self, entity, component.into())
    }

    pub fn destroy_component(
        &self,
        entity: Pubkey,
        component: impl Into<Component>,
    ) -> DestroyComponentBuilder<'_> {
        DestroyComponentBuilder::new(self, entity, component.into())
    }

    pub fn apply_system(&self, system: impl Into<System>) -> ApplySystemBuilder<'_> {
        ApplySystemBuilder::new(self, system.into())
    }

    pub fn delegate_component(
        &self,
        entity: Pubkey,
        component: impl Into<Component>,
    ) -> DelegateComponentBuilder<'_> {
        DelegateComponentBuilder::new(self, entity, component.into())
    }

    pub fn undelegate_component(
        &self,
        entity: Pubkey,
        component: impl Into<Component>,
    ) -> UndelegateComponentBuilder<'_> {
        UndelegateComponentBuilder::new(self, entity, component.into())
    }

    pub fn approve_system(&self, system: impl Into<System>) -> SystemApprovalBuilder<'_> {
        SystemApprovalBuilder::approve(self, system.into())
    }

    pub fn remove_system(&self, system: impl Into<System>) -> SystemApprovalBuilder<'_> {
        SystemApprovalBuilder::remove(self, system.into())
    }

    pub fn add_authority(&self, new_authority: Pubkey) -> AuthorityBuilder<'_> {
        AuthorityBuilder::add(self, new_authority)
    }

    pub fn remove_authority(&self, authority: Pubkey) -> AuthorityBuilder<'_> {
        AuthorityBuilder::remove(self, authority)
    }
}
