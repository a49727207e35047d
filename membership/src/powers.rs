use paillier::AdditiveHomomorphic;
use rug::Integer;
use sampling::Source;

/// Encrypts `[c, c^2, ..., c^degree]` under `pk`.
///
/// Each power is reduced modulo the plaintext modulus before encryption and
/// gets fresh encryption randomness. A zero degree returns an empty vector.
pub fn encrypt_powers<S: AdditiveHomomorphic>(
    scheme: &S,
    pk: &S::PublicKey,
    c: &Integer,
    degree: usize,
    source: &mut Source,
) -> Vec<S::Ciphertext> {
    reduced_powers(c, degree, scheme.plaintext_modulus(pk))
        .iter()
        .map(|power| scheme.encrypt(pk, power, source))
        .collect()
}

/// Returns `[c mod N, c^2 mod N, ..., c^degree mod N]`.
///
/// The running power is reduced at every step, so it never grows past N.
pub fn reduced_powers(c: &Integer, degree: usize, modulus: &Integer) -> Vec<Integer> {
    let base: Integer = c.clone().rem_euc(modulus);
    let mut power: Integer = Integer::from(1);
    (0..degree)
        .map(|_| {
            power = Integer::from(&power * &base).rem_euc(modulus);
            power.clone()
        })
        .collect()
}
