use paillier::AdditiveHomomorphic;
use rug::Integer;
use sampling::Source;

use crate::{Decision, MembershipParams, QueryMessage, ResponseMessage, Result, decide, encrypt_powers};

/// Querying party. Owns one key pair for the lifetime of one session.
pub struct Client<S: AdditiveHomomorphic> {
    scheme: S,
    params: MembershipParams,
    pk: S::PublicKey,
    sk: S::SecretKey,
    source: Source,
}

impl<S: AdditiveHomomorphic> Client<S> {
    /// Generates a fresh key pair from `source`.
    pub fn new(scheme: S, params: MembershipParams, mut source: Source) -> Self {
        let (pk, sk) = scheme.keygen(&mut source);
        Self {
            scheme,
            params,
            pk,
            sk,
            source,
        }
    }

    pub fn public_key(&self) -> &S::PublicKey {
        &self.pk
    }

    /// Builds the query message for a server whose polynomial has the given degree.
    pub fn encrypt_query(&mut self, query: &Integer, degree: usize) -> Result<QueryMessage<S>> {
        self.params.check_element(query)?;
        self.params
            .check_modulus(self.scheme.plaintext_modulus(&self.pk))?;

        let powers: Vec<S::Ciphertext> = encrypt_powers(&self.scheme, &self.pk, query, degree, &mut self.source);
        tracing::debug!(degree, "encrypted query powers");

        Ok(QueryMessage {
            public_key: self.pk.clone(),
            powers,
        })
    }

    /// Decrypts the server response. Consumes the client: the key pair is
    /// dropped once a decision is made.
    pub fn decide(self, response: &ResponseMessage<S>) -> Result<Decision> {
        decide(&self.scheme, &self.sk, &response.result)
    }
}
