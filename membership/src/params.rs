use paillier::Paillier;
use rug::Integer;

use crate::{MembershipError, Result};

/// Protocol parameters shared by both parties.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MembershipParams {
    /// Bit length of the Paillier modulus N.
    pub key_bits: u32,
    /// Every dataset element and query must satisfy |x| < 2^element_bits.
    pub element_bits: u32,
}

impl Default for MembershipParams {
    fn default() -> Self {
        Self {
            key_bits: 1024,
            element_bits: 64,
        }
    }
}

impl MembershipParams {
    pub fn new(key_bits: u32, element_bits: u32) -> Result<Self> {
        let params: Self = Self {
            key_bits,
            element_bits,
        };
        params.validate()?;
        Ok(params)
    }

    /// Reads `PSM_KEY_BITS` and `PSM_ELEMENT_BITS`, keeping defaults for
    /// unset or unparsable variables.
    pub fn from_env() -> Self {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Same as [`MembershipParams::from_env`] with variables resolved by `lookup`.
    pub fn from_vars<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut params: Self = Self::default();

        if let Some(b) = lookup("PSM_KEY_BITS").and_then(|bits| bits.trim().parse().ok()) {
            params.key_bits = b;
        }

        if let Some(b) = lookup("PSM_ELEMENT_BITS").and_then(|bits| bits.trim().parse().ok()) {
            params.element_bits = b;
        }

        params
    }

    pub fn validate(&self) -> Result<()> {
        if self.key_bits < paillier::MIN_KEY_BITS || self.key_bits % 2 != 0 {
            return Err(MembershipError::InvalidParams(format!(
                "key_bits={} must be even and >= {}",
                self.key_bits,
                paillier::MIN_KEY_BITS
            )));
        }
        if self.element_bits == 0 {
            return Err(MembershipError::InvalidParams("element_bits must be positive".into()));
        }
        check_modulus_bits(self.key_bits, self.element_bits)
    }

    /// Builds the cryptosystem for these parameters.
    pub fn scheme(&self) -> Result<Paillier> {
        self.validate()?;
        Ok(Paillier::new(self.key_bits)?)
    }

    /// Checks |x| < 2^element_bits.
    pub fn check_element(&self, x: &Integer) -> Result<()> {
        let bits: u32 = x.significant_bits();
        if bits > self.element_bits {
            return Err(MembershipError::ElementTooLarge {
                bits,
                max_bits: self.element_bits,
            });
        }
        Ok(())
    }

    /// Checks that a plaintext modulus received from a peer is wide enough
    /// for elements of `element_bits` bits.
    pub fn check_modulus(&self, modulus: &Integer) -> Result<()> {
        check_modulus_bits(modulus.significant_bits(), self.element_bits)
    }
}

// N = p*q with p, q >= 2^(modulus_bits/2 - 1). Distinct elements differ by less
// than 2^(element_bits + 1), so neither prime divides a non-zero factor (c - s)
// of the root polynomial as long as element_bits + 2 <= modulus_bits / 2.
fn check_modulus_bits(modulus_bits: u32, element_bits: u32) -> Result<()> {
    if element_bits + 2 > modulus_bits / 2 {
        return Err(MembershipError::ModulusTooSmall {
            modulus_bits,
            element_bits,
        });
    }
    Ok(())
}
