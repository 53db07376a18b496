use crate::core::connection::BoltConnection;
use crate::error::BoxError;
use async_trait::async_trait;
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::account::Account;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;

/// Ledger access over JSON-RPC at the client's configured commitment.
#[async_trait]
impl BoltConnection for RpcClient {
    async fn send_transaction(&self, tx: &Transaction) -> Result<Signature, BoxError> {
        self.send_and_confirm_transaction(tx)
            .await
            .map_err(|e| Box::new(e) as BoxError)
    }

    async fn get_account(&self, pubkey: &Pubkey) -> Result<Option<Account>, BoxError> {
        let response = self
            .get_account_with_commitment(pubkey, self.commitment())
            .await
            .map_err(|e| Box::new(e) as BoxError)?;
        Ok(response.value)
    }

    async fn get_latest_blockhash(&self) -> Result<Hash, BoxError> {
        RpcClient::get_latest_blockhash(self)
            .await
            .map_err(|e| Box::new(e) as BoxError)
    }

    async fn get_minimum_balance_for_rent_exemption(
        &self,
        data_len: usize,
    ) -> Result<u64, BoxError> {
        RpcClient::get_minimum_balance_for_rent_exemption(self, data_len)
            .await
            .map_err(|e| Box::new(e) as BoxError)
    }
}
