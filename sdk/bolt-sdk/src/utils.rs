//! Typed reads of World program accounts.
//!
//! `next_world_pda` and `next_entity_pda` read a shared counter and derive
//! from it. Nothing holds the counter between the read and the submission, so
//! two callers reading the same value derive the same address and only one
//! creation succeeds; the other fails on the ledger with an "already in use"
//! error. Use a seeded entity when creations may run concurrently, or the
//! retry helpers in [`crate::basic::retry`].

use crate::core::config::BoltConfig;
use crate::core::connection::BoltConnection;
use crate::error::{BoltSdkError, Result};
use crate::pda::{self, DerivedAddress};
use crate::types::{EntityIdentifier, WorldInfo};
use bolt_state::{DiscriminatedAccount, Entity, Registry, World};
use solana_sdk::pubkey::Pubkey;
use tracing::trace;

/// Fetch raw account data owned by the World program.
pub async fn fetch_account_data(
    connection: &impl BoltConnection,
    config: &BoltConfig,
    address: &Pubkey,
) -> Result<Vec<u8>> {
    let account = connection
        .get_account(address)
        .await
        .map_err(BoltSdkError::Ledger)?
        .ok_or(BoltSdkError::AccountNotFound(*address))?;

    if account.owner != config.world_program {
        return Err(BoltSdkError::WrongOwner {
            address: *address,
            owner: account.owner,
            expected: config.world_program,
        });
    }
    Ok(account.data)
}

async fn fetch_decoded<T: DiscriminatedAccount>(
    connection: &impl BoltConnection,
    config: &BoltConfig,
    address: &Pubkey,
) -> Result<T> {
    let data = fetch_account_data(connection, config, address).await?;
    Ok(T::try_from_account_data(&data)?)
}

pub async fn fetch_registry(
    connection: &impl BoltConnection,
    config: &BoltConfig,
) -> Result<Registry> {
    let registry = pda::find_registry_pda(config)?;
    fetch_decoded(connection, config, &registry.address).await
}

pub async fn fetch_world(
    connection: &impl BoltConnection,
    config: &BoltConfig,
    world: &Pubkey,
) -> Result<World> {
    fetch_decoded(connection, config, world).await
}

pub async fn fetch_entity(
    connection: &impl BoltConnection,
    config: &BoltConfig,
    entity: &Pubkey,
) -> Result<Entity> {
    fetch_decoded(connection, config, entity).await
}

/// Address the next `initialize_new_world` will create, with its id.
///
/// Racy against concurrent world creation; see the module docs.
pub async fn next_world_pda(
    connection: &impl BoltConnection,
    config: &BoltConfig,
) -> Result<(u64, DerivedAddress)> {
    let registry = fetch_registry(connection, config).await?;
    let world_id = registry.next_world_id();
    let world = pda::find_world_pda(config, world_id)?;
    trace!(world_id, address = %world.address, "next world");
    Ok((world_id, world))
}

/// Address the next ordinal `add_entity` will create in World `world_id`,
/// with its ordinal.
///
/// Racy against concurrent entity creation; see the module docs.
pub async fn next_entity_pda(
    connection: &impl BoltConnection,
    config: &BoltConfig,
    world_id: u64,
) -> Result<(u64, DerivedAddress)> {
    let world_pda = pda::find_world_pda(config, world_id)?;
    let world = fetch_world(connection, config, &world_pda.address).await?;
    let ordinal = world.next_entity_id();
    let entity = pda::find_entity_pda(config, world_id, &EntityIdentifier::Ordinal(ordinal))?;
    trace!(world_id, ordinal, address = %entity.address, "next entity");
    Ok((ordinal, entity))
}

/// Fetch a World and decode its approved systems.
pub async fn fetch_world_info(
    connection: &impl BoltConnection,
    config: &BoltConfig,
    world: &Pubkey,
) -> Result<WorldInfo> {
    let state = fetch_world(connection, config, world).await?;
    let approved_systems = state.systems()?.approved_systems.into_iter().collect();

    Ok(WorldInfo {
        id: state.id,
        address: *world,
        entity_count: state.entity_count,
        authorities: state.authorities,
        permissionless: state.permissionless,
        approved_systems,
    })
}
