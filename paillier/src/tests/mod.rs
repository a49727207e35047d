mod homomorphic;

use sampling::Source;

use crate::{AdditiveHomomorphic, Paillier, PublicKey, SecretKey};

pub(crate) const TEST_KEY_BITS: u32 = 256;

pub(crate) fn test_keys(seed: u8) -> (Paillier, PublicKey, SecretKey, Source) {
    let scheme: Paillier = Paillier::new(TEST_KEY_BITS).unwrap();
    let mut source: Source = Source::new([seed; 32]);
    let (pk, sk) = scheme.keygen(&mut source);
    (scheme, pk, sk, source)
}
