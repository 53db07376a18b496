//! Composition of the variable-arity `apply` instruction.
//!
//! The World program exposes one fixed account layout per arity (apply,
//! apply2, ... apply5). A single routine covers them all: it flattens the
//! entity/component pairs, checks the count against the host ceiling, and
//! picks the discriminator from the arity table.

use crate::core::config::BoltConfig;
use crate::error::{BoltSdkError, Result};
use crate::identity::{Component, System};
use crate::types::EntityComponents;
use bolt_interface::WorldInstruction;
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use tracing::debug;

/// A component account resolved for an apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedComponent {
    pub program: Pubkey,
    pub address: Pubkey,
}

/// Flatten `entities` into (program, address) pairs in caller order.
///
/// Fails before deriving anything when a seed list is misaligned, the set is
/// empty, or it exceeds the configured arity.
pub fn resolve_components(
    config: &BoltConfig,
    entities: &[EntityComponents],
) -> Result<Vec<ResolvedComponent>> {
    let mut pairs: Vec<(&Pubkey, &Component, &str)> = Vec::new();
    for group in entities {
        for (component, seed) in group.seeded_components()? {
            pairs.push((&group.entity, component, seed));
        }
    }

    if pairs.is_empty() {
        return Err(BoltSdkError::EmptyComponentSet);
    }
    let max = config.max_arity();
    if pairs.len() > max {
        return Err(BoltSdkError::UnsupportedArity {
            count: pairs.len(),
            max,
        });
    }

    pairs
        .into_iter()
        .map(|(entity, component, seed)| {
            let derived = component.pda(entity, Some(seed))?;
            Ok(ResolvedComponent {
                program: component.program(),
                address: derived.address,
            })
        })
        .collect()
}

/// Build the `apply` instruction for `system` over `entities`.
///
/// Accounts, in the order the World program reads them positionally:
/// authority, system, one (component program, component data) pair per
/// component, the World program as delimiter, then `extra_accounts` verbatim.
///
/// `args` are the already-encoded system arguments; they are sent as a
/// length-prefixed byte vector.
pub fn apply_system(
    config: &BoltConfig,
    authority: &Pubkey,
    system: &System,
    entities: &[EntityComponents],
    args: Vec<u8>,
    extra_accounts: Vec<AccountMeta>,
) -> Result<Instruction> {
    let components = resolve_components(config, entities)?;
    let arity = components.len();

    let instruction = WorldInstruction::Apply {
        arity: arity as u8,
        args,
    };
    let data = instruction.data()?;

    let mut accounts = Vec::with_capacity(3 + arity * 2 + extra_accounts.len());
    accounts.push(AccountMeta::new_readonly(*authority, true));
    accounts.push(AccountMeta::new_readonly(system.program(), false));
    for component in &components {
        accounts.push(AccountMeta::new_readonly(component.program, false));
        accounts.push(AccountMeta::new(component.address, false));
    }
    // Marks where the fixed layout ends and forwarded accounts begin.
    accounts.push(AccountMeta::new_readonly(config.world_program, false));
    accounts.extend(extra_accounts);

    debug!(
        system = %system.program(),
        arity,
        accounts = accounts.len(),
        "composed apply"
    );

    Ok(Instruction {
        program_id: config.world_program,
        accounts,
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn single(entity: Pubkey, n: usize) -> Vec<EntityComponents> {
        let components = (0..n).map(|_| Component::new(Pubkey::new_unique())).collect();
        vec![EntityComponents::new(entity, components)]
    }

    #[test]
    fn layout_for_every_supported_arity() {
        let config = BoltConfig::default();
        let authority = Pubkey::new_unique();
        let system = System::new(Pubkey::new_unique());
        let entity = Pubkey::new_unique();

        for arity in 1..=config.max_arity() {
            let entities = single(entity, arity);
            let ix =
                apply_system(&config, &authority, &system, &entities, vec![], vec![]).unwrap();

            assert_eq!(ix.program_id, config.world_program);
            assert_eq!(ix.accounts.len(), 2 + arity * 2 + 1);
            assert_eq!(&ix.data[..8], &bolt_interface::discriminator::APPLY[arity - 1]);
            for (i, component) in entities[0].components.iter().enumerate() {
                let program = &ix.accounts[2 + i * 2];
                let data = &ix.accounts[3 + i * 2];
                assert_eq!(program.pubkey, component.program());
                assert!(!program.is_writable);
                assert_eq!(data.pubkey, component.pda(&entity, None).unwrap().address);
                assert!(data.is_writable);
            }
            assert_eq!(ix.accounts.last().unwrap().pubkey, config.world_program);
        }
    }

    #[test]
    fn rejects_empty_and_oversized_sets() {
        let config = BoltConfig::default();
        let entity = Pubkey::new_unique();
        assert_matches!(
            resolve_components(&config, &[]),
            Err(BoltSdkError::EmptyComponentSet)
        );
        assert_matches!(
            resolve_components(&config, &single(entity, 0)),
            Err(BoltSdkError::EmptyComponentSet)
        );
        assert_matches!(
            resolve_components(&config, &single(entity, config.max_arity() + 1)),
            Err(BoltSdkError::UnsupportedArity { count: 6, max: 5 })
        );
    }

    #[test]
    fn configured_ceiling_applies() {
        let config = BoltConfig::default().with_max_components(2);
        assert_matches!(
            resolve_components(&config, &single(Pubkey::new_unique(), 3)),
            Err(BoltSdkError::UnsupportedArity { count: 3, max: 2 })
        );
    }
}
