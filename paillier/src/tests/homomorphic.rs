use rug::Integer;

use crate::{AdditiveHomomorphic, Ciphertext, CryptoError, tests::test_keys};

#[test]
fn add() {
    let (scheme, pk, sk, mut source) = test_keys(0);
    let n: Integer = pk.n().clone();

    [(3, 4), (-10, 4), (0, 0), (123456, -123456)]
        .iter()
        .for_each(|&(a, b)| {
            let ct_a: Ciphertext = scheme.encrypt(&pk, &Integer::from(a), &mut source);
            let ct_b: Ciphertext = scheme.encrypt(&pk, &Integer::from(b), &mut source);
            let sum: Ciphertext = scheme.add(&pk, &ct_a, &ct_b).unwrap();
            let want: Integer = Integer::from(a + b).rem_euc(&n);
            assert_eq!(scheme.decrypt(&sk, &sum).unwrap(), want, "a={} b={}", a, b);
        });
}

#[test]
fn add_wraps_modulus() {
    let (scheme, pk, sk, mut source) = test_keys(1);
    let n: Integer = pk.n().clone();
    let ct_a: Ciphertext = scheme.encrypt(&pk, &(n.clone() - 1u32), &mut source);
    let ct_b: Ciphertext = scheme.encrypt(&pk, &Integer::from(2), &mut source);
    let sum: Ciphertext = scheme.add(&pk, &ct_a, &ct_b).unwrap();
    assert_eq!(scheme.decrypt(&sk, &sum).unwrap(), 1);
}

#[test]
fn scalar_mul() {
    let (scheme, pk, sk, mut source) = test_keys(2);
    let n: Integer = pk.n().clone();

    [(5, 7), (5, -7), (-5, -7), (9, 0), (0, 31), (1, 1)]
        .iter()
        .for_each(|&(a, k)| {
            let ct: Ciphertext = scheme.encrypt(&pk, &Integer::from(a), &mut source);
            let prod: Ciphertext = scheme.scalar_mul(&pk, &ct, &Integer::from(k)).unwrap();
            let want: Integer = Integer::from(a * k).rem_euc(&n);
            assert_eq!(scheme.decrypt(&sk, &prod).unwrap(), want, "a={} k={}", a, k);
        });
}

#[test]
fn scalar_mul_large_scalar_reduced() {
    let (scheme, pk, sk, mut source) = test_keys(3);
    let n: Integer = pk.n().clone();
    let ct: Ciphertext = scheme.encrypt(&pk, &Integer::from(3), &mut source);

    // k = 5n + 2 acts as 2.
    let k: Integer = n.clone() * 5u32 + 2u32;
    let prod: Ciphertext = scheme.scalar_mul(&pk, &ct, &k).unwrap();
    assert_eq!(scheme.decrypt(&sk, &prod).unwrap(), 6);

    // k = n - 1 acts as -1.
    let k: Integer = n.clone() - 1u32;
    let prod: Ciphertext = scheme.scalar_mul(&pk, &ct, &k).unwrap();
    assert_eq!(scheme.decrypt(&sk, &prod).unwrap(), n - 3u32);
}

#[test]
fn operations_reject_foreign_ciphertexts() {
    let (scheme, pk_a, _, mut source_a) = test_keys(4);
    let (_, pk_b, _, mut source_b) = test_keys(5);

    let ct_a: Ciphertext = scheme.encrypt(&pk_a, &Integer::from(1), &mut source_a);
    let ct_b: Ciphertext = scheme.encrypt(&pk_b, &Integer::from(1), &mut source_b);

    assert!(matches!(
        scheme.add(&pk_a, &ct_a, &ct_b),
        Err(CryptoError::KeyMismatch { .. })
    ));
    assert!(matches!(
        scheme.scalar_mul(&pk_a, &ct_b, &Integer::from(2)),
        Err(CryptoError::KeyMismatch { .. })
    ));
    assert!(matches!(
        scheme.scalar_mul(&pk_b, &ct_a, &Integer::from(2)),
        Err(CryptoError::KeyMismatch { .. })
    ));
}
