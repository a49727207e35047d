//! Additively homomorphic encryption for the membership protocol.
//!
//! [`AdditiveHomomorphic`] is the seam the protocol core is written against.
//! [`Paillier`] implements it over `rug::Integer`.

pub mod ciphertext;
pub mod error;
pub mod keys;
pub mod scheme;
#[cfg(test)]
mod tests;

pub use ciphertext::*;
pub use error::{CryptoError, Result};
pub use keys::*;
pub use scheme::*;
