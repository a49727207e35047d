use paillier::AdditiveHomomorphic;

/// Client to server: the public key and `[Enc(c), ..., Enc(c^n)]`.
#[derive(Clone, Debug)]
pub struct QueryMessage<S: AdditiveHomomorphic> {
    pub public_key: S::PublicKey,
    pub powers: Vec<S::Ciphertext>,
}

/// Server to client: `Enc(r * PS(c))`.
#[derive(Clone, Debug)]
pub struct ResponseMessage<S: AdditiveHomomorphic> {
    pub result: S::Ciphertext,
}
