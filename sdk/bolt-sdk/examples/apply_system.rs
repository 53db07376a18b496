// Example: Applying a system to two components
//
// This example demonstrates how to:
// 1. Describe the components a system touches
// 2. Encode the system arguments as JSON
// 3. Compose the apply instruction

use bolt_sdk::{BoltConfig, BoltWorld, Component, EntityComponents, System};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Keypair;
use solana_sdk::signer::Signer;

#[derive(Serialize, Deserialize)]
struct Movement {
    direction: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let world = BoltWorld::new(BoltConfig::default(), 0)?;
    let authority = Keypair::new();

    // 1. Position and velocity of one entity; position uses a seed
    let entity = Pubkey::new_unique(); // Replace with an entity from add_entity
    let position = Component::new(Pubkey::new_unique());
    let velocity = Component::new(Pubkey::new_unique());
    let components = EntityComponents::new(entity, vec![position, velocity])
        .with_seeds(vec!["pos".to_string(), String::new()]);

    // 2 & 3. Validated locally, nothing is sent
    let builder = world
        .apply_system(System::new(Pubkey::new_unique()))
        .with_entity(components)
        .with_json_args(&Movement {
            direction: "Up".to_string(),
        })?;
    let ix = builder.instruction(&authority.pubkey())?;

    println!("Apply instruction:");
    println!("  Program: {}", ix.program_id);
    for (i, meta) in ix.accounts.iter().enumerate() {
        println!(
            "  #{i} {} writable={} signer={}",
            meta.pubkey, meta.is_writable, meta.is_signer
        );
    }

    // In a real application, you would:
    // let connection = ...;  // Your BoltConnection
    // let mut tx = builder.build_transaction(&connection, authority.pubkey()).await?;
    // tx.sign(&[&authority], tx.message.recent_blockhash);
    // connection.send_transaction(&tx).await?;

    Ok(())
}
