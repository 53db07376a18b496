//! Encoding of system arguments.
//!
//! The World program forwards argument bytes to the system untouched, so the
//! codec only has to agree with the system being applied.

use crate::error::{BoltSdkError, Result};
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{de::DeserializeOwned, Serialize};

pub trait ArgsCodec<T> {
    fn encode(&self, args: &T) -> Result<Vec<u8>>;
    fn decode(&self, bytes: &[u8]) -> Result<T>;
}

/// UTF-8 JSON, the encoding deployed systems parse by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

impl<T: Serialize + DeserializeOwned> ArgsCodec<T> for JsonCodec {
    fn encode(&self, args: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(args)?)
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        Ok(serde_json::from_slice(bytes)?)
    }
}

/// Borsh, for systems that declare a typed argument struct.
#[derive(Debug, Clone, Copy, Default)]
pub struct BorshCodec;

impl<T: BorshSerialize + BorshDeserialize> ArgsCodec<T> for BorshCodec {
    fn encode(&self, args: &T) -> Result<Vec<u8>> {
        borsh::to_vec(args).map_err(|e| BoltSdkError::ArgsEncoding(e.to_string()))
    }

    fn decode(&self, bytes: &[u8]) -> Result<T> {
        T::try_from_slice(bytes).map_err(|e| BoltSdkError::ArgsEncoding(e.to_string()))
    }
}
