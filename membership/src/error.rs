//! Protocol error types

use paillier::CryptoError;
use thiserror::Error;

use crate::Stage;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MembershipError {
    #[error("Degree mismatch: expected {expected} encrypted powers, got {got}")]
    DegreeMismatch { expected: usize, got: usize },

    #[error("Element too large: {bits} bits, max {max_bits}")]
    ElementTooLarge { bits: u32, max_bits: u32 },

    #[error("Plaintext modulus too small: {modulus_bits}-bit modulus cannot hold {element_bits}-bit elements")]
    ModulusTooSmall { modulus_bits: u32, element_bits: u32 },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Blinding factor is not invertible modulo the plaintext modulus")]
    DegenerateBlindingFactor,

    #[error("Cryptographic error: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Out of order: expected state {expected}, found {found}")]
    OutOfOrder { expected: Stage, found: Stage },
}

/// Coarse classification of [`MembershipError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input shapes, detected before any cryptographic operation.
    Input,
    /// Magnitudes that do not fit the plaintext space.
    Range,
    /// Key mismatches and invalid ciphertexts.
    CryptoState,
    /// Session transitions called out of order.
    Protocol,
}

impl MembershipError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MembershipError::DegreeMismatch { .. } => ErrorKind::Input,
            MembershipError::ElementTooLarge { .. }
            | MembershipError::ModulusTooSmall { .. }
            | MembershipError::InvalidParams(_)
            | MembershipError::DegenerateBlindingFactor => ErrorKind::Range,
            MembershipError::Crypto(_) => ErrorKind::CryptoState,
            MembershipError::OutOfOrder { .. } => ErrorKind::Protocol,
        }
    }
}

pub type Result<T> = std::result::Result<T, MembershipError>;
