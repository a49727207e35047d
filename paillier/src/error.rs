//! Cryptosystem error types

use thiserror::Error;

use crate::KeyId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    #[error("Invalid key size: {bits} bits (need an even size >= {min})")]
    InvalidKeySize { bits: u32, min: u32 },

    #[error("Key mismatch: expected key {expected}, got {got}")]
    KeyMismatch { expected: KeyId, got: KeyId },

    #[error("Invalid ciphertext: value outside of Z_(n^2)^*")]
    InvalidCiphertext,
}

pub type Result<T> = std::result::Result<T, CryptoError>;
