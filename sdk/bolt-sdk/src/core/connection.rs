use crate::error::BoxError;
use async_trait::async_trait;
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

/// Ledger client the SDK reads state through.
///
/// Implementations surface host errors untouched; the SDK wraps them in
/// [`crate::BoltSdkError::Ledger`] without interpreting them.
#[async_trait]
pub trait BoltConnection: Send + Sync {
    /// Submit a signed transaction and wait for confirmation.
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, BoxError>;
    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, BoxError>;
    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError>;
    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, BoxError>;
}
