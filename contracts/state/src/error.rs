use thiserror::Error;

/// Errors raised while decoding World program account data.
#[derive(Error, Debug)]
pub enum StateError {
    #[error("Account data too small: expected at least {expected} bytes, got {actual}")]
    AccountDataTooSmall { expected: usize, actual: usize },

    #[error("Account discriminator mismatch: expected {expected:?}, got {actual:?}")]
    DiscriminatorMismatch { expected: [u8; 8], actual: [u8; 8] },

    #[error("Failed to decode account body: {0}")]
    Decode(#[from] std::io::Error),
}
