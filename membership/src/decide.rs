use paillier::AdditiveHomomorphic;
use rug::Integer;

use crate::Result;

/// Outcome of a session on the client side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub is_member: bool,
    /// Decrypted blinded value `r * PS(c) mod N`.
    pub value: Integer,
}

/// Decrypts the blinded result: the query is a member iff it decrypts to zero.
pub fn decide<S: AdditiveHomomorphic>(scheme: &S, sk: &S::SecretKey, blinded: &S::Ciphertext) -> Result<Decision> {
    let value: Integer = scheme.decrypt(sk, blinded)?;
    let is_member: bool = value == 0;
    tracing::debug!("decided membership");
    Ok(Decision { is_member, value })
}
