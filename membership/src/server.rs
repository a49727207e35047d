use paillier::AdditiveHomomorphic;
use sampling::Source;

use crate::{Dataset, MembershipParams, Polynomial, QueryMessage, ResponseMessage, Result, blind_fresh, evaluate};

/// Answering party. The root polynomial is computed once at construction and
/// shared read-only by every session.
#[derive(Clone, Debug)]
pub struct Server {
    dataset: Dataset,
    polynomial: Polynomial,
    params: MembershipParams,
}

impl Server {
    pub fn new(dataset: Dataset, params: &MembershipParams) -> Result<Self> {
        params.validate()?;
        dataset
            .elements()
            .iter()
            .try_for_each(|s| params.check_element(s))?;

        let polynomial: Polynomial = Polynomial::from_roots(dataset.elements());
        tracing::debug!(degree = polynomial.degree(), "built root polynomial");

        Ok(Self {
            dataset,
            polynomial,
            params: *params,
        })
    }

    /// Degree n of the root polynomial, revealed to clients.
    pub fn degree(&self) -> usize {
        self.polynomial.degree()
    }

    pub fn polynomial(&self) -> &Polynomial {
        &self.polynomial
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Returns `Enc(PS(c))` for the encrypted powers in `query`.
    pub fn evaluate<S: AdditiveHomomorphic>(
        &self,
        scheme: &S,
        query: &QueryMessage<S>,
        source: &mut Source,
    ) -> Result<S::Ciphertext> {
        self.params
            .check_modulus(scheme.plaintext_modulus(&query.public_key))?;
        evaluate(scheme, &query.public_key, &self.polynomial, &query.powers, source)
    }

    /// Masks an evaluation with a freshly sampled blinding factor.
    pub fn blind<S: AdditiveHomomorphic>(
        &self,
        scheme: &S,
        pk: &S::PublicKey,
        evaluation: &S::Ciphertext,
        source: &mut Source,
    ) -> Result<ResponseMessage<S>> {
        let result: S::Ciphertext = blind_fresh(scheme, pk, evaluation, source)?;
        Ok(ResponseMessage { result })
    }

    /// Evaluates then blinds.
    pub fn respond<S: AdditiveHomomorphic>(
        &self,
        scheme: &S,
        query: &QueryMessage<S>,
        source: &mut Source,
    ) -> Result<ResponseMessage<S>> {
        let evaluation: S::Ciphertext = self.evaluate(scheme, query, source)?;
        self.blind(scheme, &query.public_key, &evaluation, source)
    }
}
