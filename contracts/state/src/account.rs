use crate::error::StateError;
use borsh::{BorshDeserialize, BorshSerialize};

/// Length of the type tag that prefixes every World program account.
pub const DISCRIMINATOR_LEN: usize = 8;

/// An account whose bytes are `[8-byte discriminator][borsh body]`.
///
/// Bodies are decoded with `deserialize` rather than `try_from_slice` because
/// accounts are frequently allocated larger than their current contents
/// (a World grows as authorities are added), leaving zeroed tail bytes.
pub trait DiscriminatedAccount: BorshSerialize + BorshDeserialize + Sized {
    /// First 8 bytes of `sha256("account:<TypeName>")`.
    const DISCRIMINATOR: [u8; 8];

    /// Decode an account from its raw on-ledger bytes.
    fn try_from_account_data(data: &[u8]) -> Result<Self, StateError> {
        if data.len() < DISCRIMINATOR_LEN {
            return Err(StateError::AccountDataTooSmall {
                expected: DISCRIMINATOR_LEN,
                actual: data.len(),
            });
        }
        let (tag, mut body) = data.split_at(DISCRIMINATOR_LEN);
        let mut actual = [0u8; DISCRIMINATOR_LEN];
        actual.copy_from_slice(tag);
        if actual != Self::DISCRIMINATOR {
            return Err(StateError::DiscriminatorMismatch {
                expected: Self::DISCRIMINATOR,
                actual,
            });
        }
        Ok(Self::deserialize(&mut body)?)
    }

    /// Encode the account exactly as the World program lays it out.
    fn to_account_data(&self) -> Result<Vec<u8>, StateError> {
        let mut data = Self::DISCRIMINATOR.to_vec();
        self.serialize(&mut data)?;
        Ok(data)
    }
}
