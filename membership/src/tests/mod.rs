mod protocol;

use paillier::{AdditiveHomomorphic, Paillier, PublicKey, SecretKey};
use rug::Integer;
use sampling::Source;

use crate::MembershipParams;

pub(crate) const TEST_KEY_BITS: u32 = 256;

pub(crate) fn test_params() -> MembershipParams {
    MembershipParams::new(TEST_KEY_BITS, 64).unwrap()
}

pub(crate) fn test_keys(seed: u8) -> (Paillier, PublicKey, SecretKey, Source) {
    let scheme: Paillier = test_params().scheme().unwrap();
    let mut source: Source = Source::new([seed; 32]);
    let (pk, sk) = scheme.keygen(&mut source);
    (scheme, pk, sk, source)
}

pub(crate) fn ints(values: &[i64]) -> Vec<Integer> {
    values.iter().map(|&x| Integer::from(x)).collect()
}

/// (c - s1) * ... * (c - sn)
pub(crate) fn root_product(c: &Integer, roots: &[Integer]) -> Integer {
    roots
        .iter()
        .fold(Integer::from(1), |acc, s| acc * Integer::from(c - s))
}
