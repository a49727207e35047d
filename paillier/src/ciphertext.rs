use rug::Integer;

use crate::KeyId;

/// Element of `Z_(n^2)^*` tagged with the key it was encrypted under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ciphertext {
    pub(crate) key: KeyId,
    pub(crate) value: Integer,
}

impl Ciphertext {
    pub fn key(&self) -> KeyId {
        self.key
    }

    pub fn value(&self) -> &Integer {
        &self.value
    }

    /// Rebuilds a ciphertext received from a peer. Validity is checked by the
    /// operations that consume it.
    pub fn from_parts(key: KeyId, value: Integer) -> Self {
        Self { key, value }
    }
}
