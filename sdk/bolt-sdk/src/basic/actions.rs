use crate::advanced::{apply, delegation, instructions};
use crate::basic::world::BoltWorld;
use crate::codec::{ArgsCodec, JsonCodec};
use crate::core::config::BoltConfig;
use crate::core::connection::BoltConnection;
use crate::error::{BoltSdkError, Result};
use crate::identity::{Component, System};
use crate::types::{EntityComponents, EntityIdentifier};
use crate::utils;
use bolt_interface::DelegateArgs;
use serde::{de::DeserializeOwned, Serialize};
use solana_sdk::instruction::{AccountMeta, Instruction};
use solana_sdk::message::Message;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::transaction::Transaction;

/// Wrap `instructions` in an unsigned transaction paid by `payer`, stamped
/// with the latest blockhash. Callers sign before sending.
pub async fn unsigned_transaction(
    connection: &impl BoltConnection,
    instructions: &[Instruction],
    payer: &Pubkey,
) -> Result<Transaction> {
    let blockhash = connection
        .get_latest_blockhash()
        .await
        .map_err(BoltSdkError::Ledger)?;
    Ok(Transaction::new_unsigned(Message::new_with_blockhash(
        instructions,
        Some(payer),
        &blockhash,
    )))
}

pub struct CreateWorldBuilder {
    config: BoltConfig,
}

impl CreateWorldBuilder {
    pub fn new(config: BoltConfig) -> Self {
        Self { config }
    }

    /// Reads the Registry counter, so the returned World id is only a
    /// prediction until the transaction lands.
    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        payer: Pubkey,
    ) -> Result<(Transaction, BoltWorld)> {
        let (world_id, world) = utils::next_world_pda(connection, &self.config).await?;
        let ix = instructions::initialize_new_world(&self.config, &payer, world_id)?;
        let tx = unsigned_transaction(connection, &[ix], &payer).await?;
        Ok((
            tx,
            BoltWorld::from_parts(self.config.clone(), world_id, world.address),
        ))
    }
}

pub struct AddEntityBuilder<'a> {
    world: &'a BoltWorld,
    seed: Option<Vec<u8>>,
    ordinal: Option<u64>,
}

impl<'a> AddEntityBuilder<'a> {
    pub fn new(world: &'a BoltWorld) -> Self {
        Self {
            world,
            seed: None,
            ordinal: None,
        }
    }

    /// Address the entity by a caller-chosen seed. Takes precedence over an
    /// ordinal.
    pub fn with_seed(mut self, seed: impl AsRef<[u8]>) -> Self {
        self.seed = Some(seed.as_ref().to_vec());
        self
    }

    /// Address the entity by an explicit ordinal instead of the World's
    /// current counter.
    pub fn with_ordinal(mut self, ordinal: u64) -> Self {
        self.ordinal = Some(ordinal);
        self
    }

    /// Returns the transaction and the address of the entity it creates.
    ///
    /// Without a seed or ordinal the World's counter is read first; that read
    /// races other creators.
    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        payer: Pubkey,
    ) -> Result<(Transaction, Pubkey)> {
        let entity = match EntityIdentifier::from_parts(self.ordinal, self.seed.as_deref()) {
            Ok(entity) => entity,
            Err(BoltSdkError::MissingIdentifier) => {
                let (ordinal, _) =
                    utils::next_entity_pda(connection, &self.world.config, self.world.id).await?;
                EntityIdentifier::Ordinal(ordinal)
            },
            Err(e) => return Err(e),
        };

        let (ix, address) =
            instructions::add_entity(&self.world.config, &payer, self.world.id, &entity)?;
        let tx = unsigned_transaction(connection, &[ix], &payer).await?;
        Ok((tx, address))
    }
}

pub struct InitializeComponentBuilder<'a> {
    world: &'a BoltWorld,
    entity: Pubkey,
    component: Component,
    seed: Option<String>,
    authority: Option<Pubkey>,
}

impl<'a> InitializeComponentBuilder<'a> {
    pub fn new(world: &'a BoltWorld, entity: Pubkey, component: Component) -> Self {
        Self {
            world,
            entity,
            component,
            seed: None,
            authority: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Restrict which key may later mutate the component.
    pub fn with_authority(mut self, authority: Pubkey) -> Self {
        self.authority = Some(authority);
        self
    }

    /// Returns the transaction and the component data address.
    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        payer: Pubkey,
    ) -> Result<(Transaction, Pubkey)> {
        let (ix, address) = instructions::initialize_component(
            &self.world.config,
            &payer,
            &self.entity,
            &self.component,
            self.seed.as_deref(),
            self.authority,
        )?;
        let tx = unsigned_transaction(connection, &[ix], &payer).await?;
        Ok((tx, address))
    }
}

pub struct DestroyComponentBuilder<'a> {
    world: &'a BoltWorld,
    entity: Pubkey,
    component: Component,
    seed: Option<String>,
    receiver: Option<Pubkey>,
}

impl<'a> DestroyComponentBuilder<'a> {
    pub fn new(world: &'a BoltWorld, entity: Pubkey, component: Component) -> Self {
        Self {
            world,
            entity,
            component,
            seed: None,
            receiver: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Account credited with the reclaimed deposit. Defaults to the authority.
    pub fn with_receiver(mut self, receiver: Pubkey) -> Self {
        self.receiver = Some(receiver);
        self
    }

    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        authority: Pubkey,
    ) -> Result<Transaction> {
        let ix = instructions::destroy_component(
            &self.world.config,
            &authority,
            &self.receiver.unwrap_or(authority),
            &self.entity,
            &self.component,
            self.seed.as_deref(),
        )?;
        unsigned_transaction(connection, &[ix], &authority).await
    }
}

pub struct ApplySystemBuilder<'a> {
    world: &'a BoltWorld,
    system: System,
    entities: Vec<EntityComponents>,
    args: Vec<u8>,
    extra_accounts: Vec<AccountMeta>,
}

impl<'a> ApplySystemBuilder<'a> {
    pub fn new(world: &'a BoltWorld, system: System) -> Self {
        Self {
            world,
            system,
            entities: Vec::new(),
            args: Vec::new(),
            extra_accounts: Vec::new(),
        }
    }

    pub fn with_entity(mut self, entity: EntityComponents) -> Self {
        self.entities.push(entity);
        self
    }

    /// Encode `args` with `codec`. Without arguments the system receives an
    /// empty payload.
    pub fn with_args<T>(mut self, codec: &impl ArgsCodec<T>, args: &T) -> Result<Self> {
        self.args = codec.encode(args)?;
        Ok(self)
    }

    /// Encode `args` as JSON, the encoding deployed systems parse by default.
    pub fn with_json_args<T: Serialize + DeserializeOwned>(self, args: &T) -> Result<Self> {
        self.with_args(&JsonCodec, args)
    }

    /// Forwarded to the system after the fixed account list.
    pub fn with_extra_account(mut self, account: AccountMeta) -> Self {
        self.extra_accounts.push(account);
        self
    }

    pub fn instruction(&self, authority: &Pubkey) -> Result<Instruction> {
        apply::apply_system(
            &self.world.config,
            authority,
            &self.system,
            &self.entities,
            self.args.clone(),
            self.extra_accounts.clone(),
        )
    }

    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        authority: Pubkey,
    ) -> Result<Transaction> {
        let ix = self.instruction(&authority)?;
        unsigned_transaction(connection, &[ix], &authority).await
    }
}

pub struct DelegateComponentBuilder<'a> {
    world: &'a BoltWorld,
    entity: Pubkey,
    component: Component,
    seed: Option<String>,
    args: DelegateArgs,
    delegate_buffer: bool,
}

impl<'a> DelegateComponentBuilder<'a> {
    pub fn new(world: &'a BoltWorld, entity: Pubkey, component: Component) -> Self {
        Self {
            world,
            entity,
            component,
            seed: None,
            args: DelegateArgs::default(),
            delegate_buffer: false,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    pub fn with_commit_frequency_ms(mut self, commit_frequency_ms: u32) -> Self {
        self.args.commit_frequency_ms = commit_frequency_ms;
        self
    }

    pub fn with_validator(mut self, validator: Pubkey) -> Self {
        self.args.validator = Some(validator);
        self
    }

    /// Also delegate the staging buffer in the same transaction.
    pub fn with_buffer_delegation(mut self) -> Self {
        self.delegate_buffer = true;
        self
    }

    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        payer: Pubkey,
    ) -> Result<Transaction> {
        let ixs = delegation::delegate_component(
            &self.world.config,
            &payer,
            &self.entity,
            &self.component,
            self.seed.as_deref(),
            self.args,
            self.delegate_buffer,
        )?;
        unsigned_transaction(connection, &ixs, &payer).await
    }
}

pub struct UndelegateComponentBuilder<'a> {
    world: &'a BoltWorld,
    entity: Pubkey,
    component: Component,
    seed: Option<String>,
    reimbursement: Option<Pubkey>,
}

impl<'a> UndelegateComponentBuilder<'a> {
    pub fn new(world: &'a BoltWorld, entity: Pubkey, component: Component) -> Self {
        Self {
            world,
            entity,
            component,
            seed: None,
            reimbursement: None,
        }
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = Some(seed.into());
        self
    }

    /// Defaults to the payer.
    pub fn with_reimbursement(mut self, reimbursement: Pubkey) -> Self {
        self.reimbursement = Some(reimbursement);
        self
    }

    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        payer: Pubkey,
    ) -> Result<Transaction> {
        let ix = delegation::undelegate_component(
            &self.world.config,
            &payer,
            &self.entity,
            &self.component,
            self.seed.as_deref(),
            &self.reimbursement.unwrap_or(payer),
        )?;
        unsigned_transaction(connection, &[ix], &payer).await
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    Add,
    Remove,
}

/// Approve or revoke a system in a permissioned World.
pub struct SystemApprovalBuilder<'a> {
    world: &'a BoltWorld,
    system: System,
    change: Change,
}

impl<'a> SystemApprovalBuilder<'a> {
    pub fn approve(world: &'a BoltWorld, system: System) -> Self {
        Self {
            world,
            system,
            change: Change::Add,
        }
    }

    pub fn remove(world: &'a BoltWorld, system: System) -> Self {
        Self {
            world,
            system,
            change: Change::Remove,
        }
    }

    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        authority: Pubkey,
    ) -> Result<Transaction> {
        let config = &self.world.config;
        let ix = match self.change {
            Change::Add => {
                instructions::approve_system(config, &authority, self.world.id, &self.system)?
            },
            Change::Remove => {
                instructions::remove_system(config, &authority, self.world.id, &self.system)?
            },
        };
        unsigned_transaction(connection, &[ix], &authority).await
    }
}

/// Add or remove a World authority.
pub struct AuthorityBuilder<'a> {
    world: &'a BoltWorld,
    target: Pubkey,
    change: Change,
}

impl<'a> AuthorityBuilder<'a> {
    pub fn add(world: &'a BoltWorld, new_authority: Pubkey) -> Self {
        Self {
            world,
            target: new_authority,
            change: Change::Add,
        }
    }

    pub fn remove(world: &'a BoltWorld, authority: Pubkey) -> Self {
        Self {
            world,
            target: authority,
            change: Change::Remove,
        }
    }

    pub async fn build_transaction(
        &self,
        connection: &impl BoltConnection,
        authority: Pubkey,
    ) -> Result<Transaction> {
        let config = &self.world.config;
        let ix = match self.change {
            Change::Add => {
                instructions::add_authority(config, &authority, &self.target, self.world.id)?
            },
            Change::Remove => {
                instructions::remove_authority(config, &authority, &self.target, self.world.id)?
            },
        };
        unsigned_transaction(connection, &[ix], &authority).await
    }
}
