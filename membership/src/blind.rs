use paillier::AdditiveHomomorphic;
use rug::Integer;
use sampling::Source;

use crate::{MembershipError, Result};

/// Multiplicative mask r, an element of `Z_N^*`.
///
/// Not `Clone`: [`blind`] takes the factor by value, so one factor masks one
/// result.
#[derive(PartialEq, Eq)]
pub struct BlindingFactor {
    r: Integer,
}

impl BlindingFactor {
    /// Samples r uniformly in `Z_N^*`.
    pub fn sample(modulus: &Integer, source: &mut Source) -> Self {
        Self {
            r: paillier::sample_unit(modulus, source),
        }
    }

    /// Wraps a chosen factor, reduced modulo N. Fails if `r mod N` is zero
    /// or shares a factor with N.
    pub fn new(r: Integer, modulus: &Integer) -> Result<Self> {
        let r: Integer = r.rem_euc(modulus);
        if !paillier::is_unit(&r, modulus) {
            return Err(MembershipError::DegenerateBlindingFactor);
        }
        Ok(Self { r })
    }

    pub(crate) fn value(&self) -> &Integer {
        &self.r
    }
}

impl std::fmt::Debug for BlindingFactor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("BlindingFactor(..)")
    }
}

/// Returns `Enc(r * v)` from `Enc(v)`, consuming the factor.
pub fn blind<S: AdditiveHomomorphic>(
    scheme: &S,
    pk: &S::PublicKey,
    evaluation: &S::Ciphertext,
    factor: BlindingFactor,
) -> Result<S::Ciphertext> {
    let blinded: S::Ciphertext = scheme.scalar_mul(pk, evaluation, factor.value())?;
    tracing::debug!("blinded evaluation");
    Ok(blinded)
}

/// Samples a fresh factor for `pk` and blinds `evaluation` with it.
pub fn blind_fresh<S: AdditiveHomomorphic>(
    scheme: &S,
    pk: &S::PublicKey,
    evaluation: &S::Ciphertext,
    source: &mut Source,
) -> Result<S::Ciphertext> {
    let factor: BlindingFactor = BlindingFactor::sample(scheme.plaintext_modulus(pk), source);
    blind(scheme, pk, evaluation, factor)
}
