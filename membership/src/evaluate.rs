use itertools::izip;
use paillier::AdditiveHomomorphic;
use rug::Integer;
use sampling::Source;

use crate::{MembershipError, Polynomial, Result};

/// Homomorphically evaluates `poly` at the encrypted point, returning
/// `Enc(a0 + a1*c + ... + an*c^n)`.
///
/// `powers[k-1]` must encrypt `c^k`. The result starts from a fresh encryption
/// of `a0`, which also re-randomizes the output. Every term is folded in,
/// including zero coefficients, so the operation sequence depends on the
/// degree only.
pub fn evaluate<S: AdditiveHomomorphic>(
    scheme: &S,
    pk: &S::PublicKey,
    poly: &Polynomial,
    powers: &[S::Ciphertext],
    source: &mut Source,
) -> Result<S::Ciphertext> {
    if powers.len() != poly.degree() {
        return Err(MembershipError::DegreeMismatch {
            expected: poly.degree(),
            got: powers.len(),
        });
    }

    let modulus: &Integer = scheme.plaintext_modulus(pk);
    let coefficients: &[Integer] = poly.coefficients();

    let a0: Integer = coefficients[0].clone().rem_euc(modulus);
    let mut acc: S::Ciphertext = scheme.encrypt(pk, &a0, source);

    for (ak, ct_pow) in izip!(coefficients[1..].iter(), powers.iter()) {
        let ak: Integer = ak.clone().rem_euc(modulus);
        let term: S::Ciphertext = scheme.scalar_mul(pk, ct_pow, &ak)?;
        acc = scheme.add(pk, &acc, &term)?;
    }

    tracing::debug!(degree = poly.degree(), "evaluated root polynomial");

    Ok(acc)
}
