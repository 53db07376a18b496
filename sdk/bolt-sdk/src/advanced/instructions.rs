use crate::core::config::BoltConfig;
use crate::error::Result;
use crate::identity::{Component, System};
use crate::pda;
use crate::types::EntityIdentifier;
use bolt_interface::WorldInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::{system_program, sysvar};

pub fn initialize_registry(config: &BoltConfig, payer: &Pubkey) -> Result<Instruction> {
    let registry = pda::find_registry_pda(config)?;

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(registry.address, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: config.world_program,
        accounts,
        data: WorldInstruction::InitializeRegistry.data()?,
    })
}

/// Create World `world_id`, which must equal the Registry's current count.
pub fn initialize_new_world(
    config: &BoltConfig,
    payer: &Pubkey,
    world_id: u64,
) -> Result<Instruction> {
    let registry = pda::find_registry_pda(config)?;
    let world = pda::find_world_pda(config, world_id)?;

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(world.address, false),
        AccountMeta::new(registry.address, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: config.world_program,
        accounts,
        data: WorldInstruction::InitializeNewWorld.data()?,
    })
}

pub fn add_authority(
    config: &BoltConfig,
    authority: &Pubkey,
    new_authority: &Pubkey,
    world_id: u64,
) -> Result<Instruction> {
    let world = pda::find_world_pda(config, world_id)?;

    let accounts = vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new_readonly(*new_authority, false),
        AccountMeta::new(world.address, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: config.world_program,
        accounts,
        data: WorldInstruction::AddAuthority { world_id }.data()?,
    })
}

pub fn remove_authority(
    config: &BoltConfig,
    authority: &Pubkey,
    authority_to_remove: &Pubkey,
    world_id: u64,
) -> Result<Instruction> {
    let world = pda::find_world_pda(config, world_id)?;

    let accounts = vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new_readonly(*authority_to_remove, false),
        AccountMeta::new(world.address, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: config.world_program,
        accounts,
        data: WorldInstruction::RemoveAuthority { world_id }.data()?,
    })
}

pub fn approve_system(
    config: &BoltConfig,
    authority: &Pubkey,
    world_id: u64,
    system: &System,
) -> Result<Instruction> {
    system_approval(config, authority, world_id, system, WorldInstruction::ApproveSystem)
}

pub fn remove_system(
    config: &BoltConfig,
    authority: &Pubkey,
    world_id: u64,
    system: &System,
) -> Result<Instruction> {
    system_approval(config, authority, world_id, system, WorldInstruction::RemoveSystem)
}

fn system_approval(
    config: &BoltConfig,
    authority: &Pubkey,
    world_id: u64,
    system: &System,
    instruction: WorldInstruction,
) -> Result<Instruction> {
    let world = pda::find_world_pda(config, world_id)?;

    let accounts = vec![
        AccountMeta::new(*authority, true),
        AccountMeta::new(world.address, false),
        AccountMeta::new_readonly(system.program(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: config.world_program,
        accounts,
        data: instruction.data()?,
    })
}

/// Create an entity in World `world_id`.
///
/// For [`EntityIdentifier::Ordinal`] the ordinal must be the World's current
/// `entity_count`; the program increments it atomically with creation.
/// Returns the instruction and the entity address.
pub fn add_entity(
    config: &BoltConfig,
    payer: &Pubkey,
    world_id: u64,
    entity: &EntityIdentifier,
) -> Result<(Instruction, Pubkey)> {
    let world = pda::find_world_pda(config, world_id)?;
    let entity_pda = pda::find_entity_pda(config, world_id, entity)?;

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(entity_pda.address, false),
        AccountMeta::new(world.address, false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    let ix = Instruction {
        program_id: config.world_program,
        accounts,
        data: WorldInstruction::AddEntity {
            extra_seed: entity.extra_seed(),
        }
        .data()?,
    };
    Ok((ix, entity_pda.address))
}

/// Attach `component` to `entity`. Returns the instruction and the component
/// data address.
pub fn initialize_component(
    config: &BoltConfig,
    payer: &Pubkey,
    entity: &Pubkey,
    component: &Component,
    seed: Option<&str>,
    authority: Option<Pubkey>,
) -> Result<(Instruction, Pubkey)> {
    let component_pda = component.pda(entity, seed)?;

    let accounts = vec![
        AccountMeta::new(*payer, true),
        AccountMeta::new(component_pda.address, false),
        AccountMeta::new_readonly(*entity, false),
        AccountMeta::new_readonly(component.program(), false),
        AccountMeta::new_readonly(authority.unwrap_or(config.world_program), false),
        AccountMeta::new_readonly(sysvar::instructions::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    let ix = Instruction {
        program_id: config.world_program,
        accounts,
        data: WorldInstruction::InitializeComponent.data()?,
    };
    Ok((ix, component_pda.address))
}

/// Close `component` on `entity`, crediting its deposit to `receiver`.
pub fn destroy_component(
    config: &BoltConfig,
    authority: &Pubkey,
    receiver: &Pubkey,
    entity: &Pubkey,
    component: &Component,
    seed: Option<&str>,
) -> Result<Instruction> {
    let component_pda = component.pda(entity, seed)?;
    let program_data = pda::find_program_data_pda(&component.program())?;

    let accounts = vec![
        AccountMeta::new_readonly(*authority, true),
        AccountMeta::new(*receiver, false),
        AccountMeta::new_readonly(component.program(), false),
        AccountMeta::new_readonly(program_data.address, false),
        AccountMeta::new_readonly(*entity, false),
        AccountMeta::new(component_pda.address, false),
        AccountMeta::new_readonly(sysvar::instructions::id(), false),
        AccountMeta::new_readonly(system_program::id(), false),
    ];

    Ok(Instruction {
        program_id: config.world_program,
        accounts,
        data: WorldInstruction::DestroyComponent.data()?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use bolt_interface::discriminator;

    #[test]
    fn add_entity_by_ordinal() {
        let config = BoltConfig::default();
        let payer = Pubkey::new_unique();
        let (ix, entity) =
            add_entity(&config, &payer, 7, &EntityIdentifier::Ordinal(3)).unwrap();

        let expected = Pubkey::find_program_address(
            &[b"entity", &7u64.to_be_bytes(), &3u64.to_be_bytes()],
            &config.world_program,
        )
        .0;
        assert_eq!(entity, expected);
        assert_eq!(ix.accounts[0], AccountMeta::new(payer, true));
        assert_eq!(ix.accounts[1].pubkey, entity);
        assert_eq!(
            ix.accounts[2].pubkey,
            pda::find_world_pda(&config, 7).unwrap().address
        );
        assert_eq!(ix.data, [&discriminator::ADD_ENTITY[..], &[0]].concat());
    }

    #[test]
    fn add_entity_by_seed_forwards_seed() {
        let config = BoltConfig::default();
        let (ix, entity) = add_entity(
            &config,
            &Pubkey::new_unique(),
            7,
            &EntityIdentifier::seed("hero"),
        )
        .unwrap();

        let expected = Pubkey::find_program_address(
            &[b"entity", &7u64.to_be_bytes(), &[0u8; 8], b"hero"],
            &config.world_program,
        )
        .0;
        assert_eq!(entity, expected);
        assert_eq!(&ix.data[8..], &[1, 4, 0, 0, 0, b'h', b'e', b'r', b'o']);
    }

    #[test]
    fn initialize_component_layout() {
        let config = BoltConfig::default();
        let payer = Pubkey::new_unique();
        let entity = Pubkey::new_unique();
        let component = Component::new(Pubkey::new_unique());

        let (ix, data) =
            initialize_component(&config, &payer, &entity, &component, Some("pos"), None).unwrap();
        assert_eq!(data, component.pda(&entity, Some("pos")).unwrap().address);
        let keys: Vec<Pubkey> = ix.accounts.iter().map(|m| m.pubkey).collect();
        assert_eq!(
            keys,
            vec![
                payer,
                data,
                entity,
                component.program(),
                config.world_program,
                sysvar::instructions::id(),
                system_program::id(),
            ]
        );
        assert_eq!(ix.data, discriminator::INITIALIZE_COMPONENT);
    }

    #[test]
    fn destroy_component_credits_receiver() {
        let config = BoltConfig::default();
        let authority = Pubkey::new_unique();
        let receiver = Pubkey::new_unique();
        let entity = Pubkey::new_unique();
        let component = Component::new(Pubkey::new_unique());

        let ix =
            destroy_component(&config, &authority, &receiver, &entity, &component, None).unwrap();
        assert_eq!(ix.accounts[0], AccountMeta::new_readonly(authority, true));
        assert_eq!(ix.accounts[1], AccountMeta::new(receiver, false));
        assert_eq!(
            ix.accounts[3].pubkey,
            pda::find_program_data_pda(&component.program()).unwrap().address
        );
        assert_eq!(
            ix.accounts[5],
            AccountMeta::new(component.pda(&entity, None).unwrap().address, false)
        );
        assert_eq!(ix.data, discriminator::DESTROY_COMPONENT);
    }

    #[test]
    fn new_world_touches_registry() {
        let config = BoltConfig::default();
        let ix = initialize_new_world(&config, &Pubkey::new_unique(), 2).unwrap();
        assert_eq!(
            ix.accounts[1].pubkey,
            pda::find_world_pda(&config, 2).unwrap().address
        );
        assert_eq!(
            ix.accounts[2].pubkey,
            pda::find_registry_pda(&config).unwrap().address
        );
    }

    #[test]
    fn system_approval_targets_world() {
        let config = BoltConfig::default();
        let system = System::new(Pubkey::new_unique());
        let approve = approve_system(&config, &Pubkey::new_unique(), 4, &system).unwrap();
        let remove = remove_system(&config, &Pubkey::new_unique(), 4, &system).unwrap();
        assert_eq!(approve.accounts[2].pubkey, system.program());
        assert_eq!(approve.data, discriminator::APPROVE_SYSTEM);
        assert_eq!(remove.data, discriminator::REMOVE_SYSTEM);
    }
}
