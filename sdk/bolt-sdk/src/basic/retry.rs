//! Optimistic creation of counter-addressed accounts.
//!
//! Worlds and unseeded entities are addressed by a shared counter that is
//! read before the transaction is built. When another creator lands first
//! the ledger rejects ours because the derived account already exists. These
//! helpers re-read the counter, re-derive and resubmit. Any other error is
//! returned as the ledger reported it.

use crate::basic::world::BoltWorld;
use crate::core::config::BoltConfig;
use crate::core::connection::BoltConnection;
use crate::error::{BoltSdkError, Result};
use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{error, trace, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RetryConfig {
    /// Total submissions, including the first.
    pub max_attempts: u32,
    pub delay_ms: u64,
    pub max_delay_ms: u64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 5,
            delay_ms: 400,
            max_delay_ms: 8000,
        }
    }
}

impl RetryConfig {
    /// Backoff following a wait of `delay_ms`, capped at `max_delay_ms`.
    pub fn next_delay_ms(&self, delay_ms: u64) -> u64 {
        delay_ms.saturating_mul(2).min(self.max_delay_ms)
    }
}

/// Whether `err` is the ledger rejecting a create because the derived
/// account is taken.
pub fn is_creation_conflict(err: &BoltSdkError) -> bool {
    err.ledger_message().is_some_and(|message| {
        message.contains("already in use") || message.contains("already exists")
    })
}

/// Create the next ordinal entity of `world`, retrying on counter races.
///
/// `submit` signs and sends the transaction; it is called once per attempt
/// and must surface ledger failures as [`BoltSdkError::Ledger`].
pub async fn add_entity_with_retry<C, F, Fut>(
    world: &BoltWorld,
    connection: &C,
    payer: Pubkey,
    config: &RetryConfig,
    submit: F,
) -> Result<(Signature, Pubkey)>
where
    C: BoltConnection,
    F: FnMut(Transaction) -> Fut,
    Fut: Future<Output = Result<Signature>>,
{
    retry_creation(
        config,
        move || async move {
            world
                .add_entity()
                .build_transaction(connection, payer)
                .await
        },
        submit,
    )
    .await
}

/// Create the next World in the Registry, retrying on counter races.
pub async fn create_world_with_retry<C, F, Fut>(
    bolt_config: &BoltConfig,
    connection: &C,
    payer: Pubkey,
    config: &RetryConfig,
    submit: F,
) -> Result<(Signature, BoltWorld)>
where
    C: BoltConnection,
    F: FnMut(Transaction) -> Fut,
    Fut: Future<Output = Result<Signature>>,
{
    retry_creation(
        config,
        move || async move {
            BoltWorld::create(bolt_config.clone())
                .build_transaction(connection, payer)
                .await
        },
        submit,
    )
    .await
}

async fn retry_creation<T, B, BFut, F, Fut>(
    config: &RetryConfig,
    mut build: B,
    mut submit: F,
) -> Result<(Signature, T)>
where
    T: std::fmt::Debug,
    B: FnMut() -> BFut,
    BFut: Future<Output = Result<(Transaction, T)>>,
    F: FnMut(Transaction) -> Fut,
    Fut: Future<Output = Result<Signature>>,
{
    let max_attempts = config.max_attempts.max(1);
    let mut attempts = 0;
    let mut delay_ms = config.delay_ms;

    loop {
        attempts += 1;
        let (tx, created) = build().await?;
        trace!("Attempt {}/{}: submitting {:?}", attempts, max_attempts, created);

        match submit(tx).await {
            Ok(signature) => return Ok((signature, created)),
            Err(e) if is_creation_conflict(&e) => {
                if attempts >= max_attempts {
                    error!(
                        "Creation still conflicting after {} attempts: {}",
                        attempts, e
                    );
                    return Err(e);
                }
                warn!(
                    "Attempt {}/{}: {:?} already taken, retrying in {}ms",
                    attempts, max_attempts, created, delay_ms
                );
                sleep(Duration::from_millis(delay_ms)).await;
                delay_ms = config.next_delay_ms(delay_ms);
            },
            Err(e) => return Err(e),
        }
    }
}
