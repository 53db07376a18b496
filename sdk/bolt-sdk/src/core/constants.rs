use solana_sdk::pubkey;
use solana_sdk::pubkey::Pubkey;

/// World program of the public deployment.
pub const WORLD_PROGRAM_ID: Pubkey = pubkey!("WorLD15A7CrDwLcLy4fRqtaTb9fbd8o8iqiEMUDse2n");

/// Delegation program that takes ownership of delegated accounts.
pub const DELEGATION_PROGRAM_ID: Pubkey = pubkey!("DELeGGvXpWV2fqJUhqcF5ZSYMS4JTLjteaAMARRSaeSh");
