use std::fmt;

use rug::Integer;
use sampling::Source;

/// Random tag binding ciphertexts to the key pair they were produced under.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyId(pub [u8; 16]);

impl KeyId {
    pub(crate) fn sample(source: &mut Source) -> Self {
        let seed: [u8; 32] = source.new_seed();
        let mut id: [u8; 16] = [0u8; 16];
        id.copy_from_slice(&seed[..16]);
        KeyId(id)
    }
}

impl fmt::Display for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{:02x}", b))
    }
}

impl fmt::Debug for KeyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyId({})", self)
    }
}

/// Paillier public key. The generator is fixed to `g = n + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublicKey {
    pub(crate) id: KeyId,
    pub(crate) n: Integer,
    pub(crate) n_squared: Integer,
}

impl PublicKey {
    pub fn id(&self) -> KeyId {
        self.id
    }

    /// Plaintext modulus.
    pub fn n(&self) -> &Integer {
        &self.n
    }

    /// Ciphertext modulus.
    pub fn n_squared(&self) -> &Integer {
        &self.n_squared
    }

    pub fn modulus_bits(&self) -> u32 {
        self.n.significant_bits()
    }

    /// Maps a plaintext in \[0, n) to its centered representative in (-n/2, n/2\].
    pub fn centered(&self, m: &Integer) -> Integer {
        let m: Integer = m.clone().rem_euc(&self.n);
        let half: Integer = self.n.clone() >> 1u32;
        if m > half { m - &self.n } else { m }
    }
}

/// Paillier secret key: `lambda = lcm(p-1, q-1)` and `mu = lambda^-1 mod n`.
pub struct SecretKey {
    pub(crate) id: KeyId,
    pub(crate) n: Integer,
    pub(crate) n_squared: Integer,
    pub(crate) lambda: Integer,
    pub(crate) mu: Integer,
}

impl SecretKey {
    pub fn id(&self) -> KeyId {
        self.id
    }

    pub fn n(&self) -> &Integer {
        &self.n
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretKey")
            .field("id", &self.id)
            .field("modulus_bits", &self.n.significant_bits())
            .finish_non_exhaustive()
    }
}
