#![allow(dead_code)]

use async_trait::async_trait;
use bolt_sdk::state::{DiscriminatedAccount, Registry, World};
use bolt_sdk::{pda, BoltConfig, BoltConnection, BoxError};
use solana_sdk::{
    account::Account,
    hash::Hash,
    pubkey::Pubkey,
    rent::Rent,
    signature::Signature,
    transaction::Transaction,
};
use std::collections::{HashMap, VecDeque};
use tokio::sync::Mutex;

/// In-memory ledger. Accounts are seeded by the test; sent transactions are
/// recorded rather than executed.
pub struct MockConnection {
    pub config: BoltConfig,
    pub blockhash: Hash,
    accounts: Mutex<HashMap<Pubkey, Account>>,
    sent: Mutex<Vec<Transaction>>,
    send_errors: Mutex<VecDeque<String>>,
}

impl MockConnection {
    pub fn new(config: BoltConfig) -> Self {
        Self {
            config,
            blockhash: Hash::new_unique(),
            accounts: Mutex::new(HashMap::new()),
            sent: Mutex::new(Vec::new()),
            send_errors: Mutex::new(VecDeque::new()),
        }
    }

    pub async fn set_account(&self, address: Pubkey, owner: Pubkey, data: Vec<u8>) {
        let account = Account {
            lamports: Rent::default().minimum_balance(data.len()),
            data,
            owner,
            executable: false,
            rent_epoch: 0,
        };
        self.accounts.lock().await.insert(address, account);
    }

    pub async fn set_registry(&self, world_count: u64) {
        let address = pda::find_registry_pda(&self.config).unwrap().address;
        let data = Registry { world_count }.to_account_data().unwrap();
        self.set_account(address, self.config.world_program, data)
            .await;
    }

    /// Store `world` at the address its id derives to.
    pub async fn set_world(&self, world: World) {
        let address = pda::find_world_pda(&self.config, world.id).unwrap().address;
        let data = world.to_account_data().unwrap();
        self.set_account(address, self.config.world_program, data)
            .await;
    }

    /// Make the next `send_transaction` fail with `message`.
    pub async fn fail_next_send(&self, message: impl Into<String>) {
        self.send_errors.lock().await.push_back(message.into());
    }

    pub async fn sent(&self) -> Vec<Transaction> {
        self.sent.lock().await.clone()
    }
}

#[async_trait]
impl BoltConnection for MockConnection {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, BoxError> {
        if let Some(message) = self.send_errors.lock().await.pop_front() {
            return Err(message.into());
        }
        self.sent.lock().await.push(tx.clone());
        Ok(tx.signatures.first().copied().unwrap_or_default())
    }

    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, BoxError> {
        Ok(self.accounts.lock().await.get(pubkey).cloned())
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError> {
        Ok(self.blockhash)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, BoxError> {
        Ok(Rent::default().minimum_balance(data_len))
    }
}

pub fn world(id: u64, entity_count: u64) -> World {
    World {
        id,
        entity_count,
        authorities: vec![],
        permissionless: true,
        approved_systems: vec![],
    }
}
