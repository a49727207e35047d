use std::fmt;

use rug::Integer;
use sampling::Source;

use crate::{Ciphertext, CryptoError, KeyId, PublicKey, Result, SecretKey};

/// Public-key encryption with homomorphic addition and plaintext scaling over
/// the plaintext group `Z_N`.
///
/// Implementations must satisfy, for every key pair and plaintexts `a`, `b`, `k`:
///
/// * `decrypt(encrypt(a)) = a mod N`
/// * `decrypt(add(encrypt(a), encrypt(b))) = (a + b) mod N`
/// * `decrypt(scalar_mul(encrypt(a), k)) = (k * a) mod N`
pub trait AdditiveHomomorphic {
    type PublicKey: Clone + fmt::Debug + Send + Sync;
    type SecretKey: fmt::Debug + Send + Sync;
    type Ciphertext: Clone + fmt::Debug + Send + Sync;

    fn keygen(&self, source: &mut Source) -> (Self::PublicKey, Self::SecretKey);

    /// Returns the plaintext modulus `N` of the key.
    fn plaintext_modulus<'a>(&self, pk: &'a Self::PublicKey) -> &'a Integer;

    /// Encrypts `m mod N` with fresh randomness drawn from `source`.
    fn encrypt(&self, pk: &Self::PublicKey, m: &Integer, source: &mut Source) -> Self::Ciphertext;

    fn decrypt(&self, sk: &Self::SecretKey, ct: &Self::Ciphertext) -> Result<Integer>;

    fn add(&self, pk: &Self::PublicKey, a: &Self::Ciphertext, b: &Self::Ciphertext) -> Result<Self::Ciphertext>;

    /// Returns an encryption of `k * a mod N`. `k` may be negative or exceed `N`.
    fn scalar_mul(&self, pk: &Self::PublicKey, a: &Self::Ciphertext, k: &Integer) -> Result<Self::Ciphertext>;
}

pub const MIN_KEY_BITS: u32 = 128;

/// Paillier cryptosystem with `key_bits`-bit moduli built from two primes of
/// `key_bits / 2` bits each.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Paillier {
    key_bits: u32,
}

impl Paillier {
    pub fn new(key_bits: u32) -> Result<Self> {
        if key_bits < MIN_KEY_BITS || key_bits % 2 != 0 {
            return Err(CryptoError::InvalidKeySize {
                bits: key_bits,
                min: MIN_KEY_BITS,
            });
        }
        Ok(Self { key_bits })
    }

    pub fn key_bits(&self) -> u32 {
        self.key_bits
    }

    /// Bit length of each of the two prime factors of the modulus.
    pub fn prime_bits(&self) -> u32 {
        self.key_bits / 2
    }

    fn check_key(&self, expected: KeyId, got: KeyId) -> Result<()> {
        if expected != got {
            return Err(CryptoError::KeyMismatch { expected, got });
        }
        Ok(())
    }

    fn check_ciphertext(&self, pk: &PublicKey, ct: &Ciphertext) -> Result<()> {
        self.check_key(pk.id, ct.key)?;
        check_unit(&ct.value, &pk.n, &pk.n_squared)
    }
}

impl AdditiveHomomorphic for Paillier {
    type PublicKey = PublicKey;
    type SecretKey = SecretKey;
    type Ciphertext = Ciphertext;

    fn keygen(&self, source: &mut Source) -> (PublicKey, SecretKey) {
        let prime_bits: u32 = self.prime_bits();
        loop {
            let p: Integer = sample_prime(prime_bits, source);
            let q: Integer = sample_prime(prime_bits, source);
            if p == q {
                continue;
            }

            // Both primes have their top two bits set, so n has exactly key_bits bits.
            let n: Integer = Integer::from(&p * &q);
            let lambda: Integer = (p - 1u32).lcm(&(q - 1u32));

            // With g = n + 1, L(g^lambda mod n^2) = lambda mod n.
            let mu: Integer = match lambda.clone().invert(&n) {
                Ok(mu) => mu,
                Err(_) => continue,
            };

            let n_squared: Integer = Integer::from(n.square_ref());
            let id: KeyId = KeyId::sample(source);

            tracing::debug!(key = %id, bits = n.significant_bits(), "generated paillier key pair");

            let pk: PublicKey = PublicKey {
                id,
                n: n.clone(),
                n_squared: n_squared.clone(),
            };
            let sk: SecretKey = SecretKey {
                id,
                n,
                n_squared,
                lambda,
                mu,
            };
            return (pk, sk);
        }
    }

    fn plaintext_modulus<'a>(&self, pk: &'a PublicKey) -> &'a Integer {
        &pk.n
    }

    fn encrypt(&self, pk: &PublicKey, m: &Integer, source: &mut Source) -> Ciphertext {
        let m: Integer = m.clone().rem_euc(&pk.n);
        let r: Integer = sample_unit(&pk.n, source);

        // (1 + m*n) * r^n mod n^2
        let gm: Integer = m * &pk.n + 1u32;
        let rn: Integer = r.secure_pow_mod(&pk.n, &pk.n_squared);
        Ciphertext {
            key: pk.id,
            value: (gm * rn).rem_euc(&pk.n_squared),
        }
    }

    fn decrypt(&self, sk: &SecretKey, ct: &Ciphertext) -> Result<Integer> {
        self.check_key(sk.id, ct.key)?;
        check_unit(&ct.value, &sk.n, &sk.n_squared)?;

        let u: Integer = ct.value.clone().secure_pow_mod(&sk.lambda, &sk.n_squared);
        let l: Integer = (u - 1u32).div_exact(&sk.n);
        Ok((l * &sk.mu).rem_euc(&sk.n))
    }

    fn add(&self, pk: &PublicKey, a: &Ciphertext, b: &Ciphertext) -> Result<Ciphertext> {
        self.check_ciphertext(pk, a)?;
        self.check_ciphertext(pk, b)?;
        Ok(Ciphertext {
            key: pk.id,
            value: Integer::from(&a.value * &b.value).rem_euc(&pk.n_squared),
        })
    }

    fn scalar_mul(&self, pk: &PublicKey, a: &Ciphertext, k: &Integer) -> Result<Ciphertext> {
        self.check_ciphertext(pk, a)?;
        let k: Integer = k.clone().rem_euc(&pk.n);
        let value: Integer = if k == 0 {
            // Trivial encryption of zero.
            Integer::from(1)
        } else {
            a.value.clone().secure_pow_mod(&k, &pk.n_squared)
        };
        Ok(Ciphertext { key: pk.id, value })
    }
}

/// Samples a prime of exactly `bits` bits with its two most significant bits set.
fn sample_prime(bits: u32, source: &mut Source) -> Integer {
    loop {
        let mut candidate: Integer = source.next_integer_bits(bits);
        candidate.set_bit(bits - 1, true).set_bit(bits - 2, true);
        let p: Integer = candidate.next_prime();
        if p.significant_bits() == bits {
            return p;
        }
    }
}

/// Returns true if `r` is a non-zero residue coprime to `n`.
pub fn is_unit(r: &Integer, n: &Integer) -> bool {
    *r != 0 && Integer::from(r.gcd_ref(n)) == 1
}

/// Samples r uniformly in `Z_n^*` by rejection.
///
/// # Panics
///
/// Panics if `n` is not positive.
pub fn sample_unit(n: &Integer, source: &mut Source) -> Integer {
    loop {
        let r: Integer = source.next_integer_below(n);
        if is_unit(&r, n) {
            return r;
        }
    }
}

fn check_unit(value: &Integer, n: &Integer, n_squared: &Integer) -> Result<()> {
    if *value <= 0 || value >= n_squared || !is_unit(value, n) {
        return Err(CryptoError::InvalidCiphertext);
    }
    Ok(())
}
