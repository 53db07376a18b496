// Example: Locating World state without a lookup table
//
// This example demonstrates how to:
// 1. Load the deployment identities from the environment
// 2. Derive the Registry, a World and its entities
// 3. Derive a component's data account on an entity

use bolt_sdk::pda::{find_entity_pda, find_registry_pda, find_world_pda};
use bolt_sdk::{BoltConfig, Component, EntityIdentifier};
use solana_sdk::pubkey::Pubkey;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. BOLT_WORLD_PROGRAM_ID etc. override the mainnet defaults
    let config = BoltConfig::from_env()?;

    // 2. Registry, World 7 and two entities of it
    let registry = find_registry_pda(&config)?;
    let world = find_world_pda(&config, 7)?;
    let by_ordinal = find_entity_pda(&config, 7, &EntityIdentifier::Ordinal(3))?;
    let by_seed = find_entity_pda(&config, 7, &EntityIdentifier::seed("player-one"))?;

    println!("Deployment:");
    println!("  World program: {}", config.world_program);
    println!("  Registry: {} (bump {})", registry.address, registry.bump);
    println!("  World 7: {}", world.address);
    println!("  Entity #3: {}", by_ordinal.address);
    println!("  Entity \"player-one\": {}", by_seed.address);

    // 3. Position component data on entity #3
    let position = Component::new(Pubkey::new_unique()); // Replace with the deployed component
    let data = position.pda(&by_ordinal.address, None)?;
    println!("  Position data: {}", data.address);

    Ok(())
}
