use solana_sdk::pubkey::Pubkey;
use thiserror::Error;

/// Error object returned by a ledger connection, kept as the host produced it.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// SDK-specific error types for Bolt operations
#[derive(Debug, Error)]
pub enum BoltSdkError {
    /// An apply was requested without any component
    #[error("No components supplied to the system")]
    EmptyComponentSet,

    /// More components than the World program has account layouts for
    #[error("Unsupported arity: {count} components, at most {max} per apply")]
    UnsupportedArity { count: usize, max: usize },

    /// Per-component seed list does not line up with the component list
    #[error("Seed length mismatch: {expected} components but {actual} seeds")]
    SeedLengthMismatch { expected: usize, actual: usize },

    /// Entity requested with neither ordinal nor seed
    #[error("Entity requires an ordinal or a seed")]
    MissingIdentifier,

    /// Free-form entity seed is empty and would alias ordinal 0
    #[error("Entity seed must not be empty")]
    EmptyEntitySeed,

    /// A seed exceeds the host's per-seed limit
    #[error("Seed {index} is {len} bytes, limit is {max}")]
    SeedTooLong { index: usize, len: usize, max: usize },

    /// More seeds than the host accepts
    #[error("{count} seeds supplied, limit is {max}")]
    TooManySeeds { count: usize, max: usize },

    /// No bump in [0, 255) yields an off-curve address
    #[error("No viable bump seed for derivation under {0}")]
    NoViableBump(Pubkey),

    /// Caller arguments could not be encoded or decoded
    #[error("Argument encoding error: {0}")]
    ArgsEncoding(String),

    /// Configuration could not be loaded
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Account not found on-chain
    #[error("Account not found: {0}")]
    AccountNotFound(Pubkey),

    /// Fetched account is not owned by the expected program
    #[error("Account {address} is owned by {owner}, expected {expected}")]
    WrongOwner {
        address: Pubkey,
        owner: Pubkey,
        expected: Pubkey,
    },

    /// Fetched account data failed to decode or does not match its address
    #[error("Invalid account data: {0}")]
    InvalidAccountData(String),

    /// Borsh serialization/deserialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] std::io::Error),

    /// Error reported by the ledger, message untouched
    #[error("{0}")]
    Ledger(#[source] BoxError),
}

impl BoltSdkError {
    /// Whether the error was raised before anything reached the ledger.
    ///
    /// Local errors are fixed by correcting inputs; retrying identical inputs
    /// cannot succeed. Failures found in fetched accounts are not local.
    pub fn is_local(&self) -> bool {
        !matches!(
            self,
            BoltSdkError::Ledger(_)
                | BoltSdkError::AccountNotFound(_)
                | BoltSdkError::WrongOwner { .. }
                | BoltSdkError::InvalidAccountData(_)
        )
    }

    /// Host message for ledger errors, for matching on host error text.
    pub fn ledger_message(&self) -> Option<String> {
        match self {
            BoltSdkError::Ledger(e) => Some(e.to_string()),
            _ => None,
        }
    }
}

/// State errors only arise from decoding fetched account data.
impl From<bolt_state::StateError> for BoltSdkError {
    fn from(err: bolt_state::StateError) -> Self {
        BoltSdkError::InvalidAccountData(err.to_string())
    }
}

impl From<serde_json::Error> for BoltSdkError {
    fn from(err: serde_json::Error) -> Self {
        BoltSdkError::ArgsEncoding(err.to_string())
    }
}

/// Result type alias for SDK operations
pub type Result<T> = std::result::Result<T, BoltSdkError>;
