use rug::Integer;
use sampling::Source;

use crate::{
    MembershipParams, ProtocolInfo, run_protocol, run_protocol_with_source,
    tests::{ints, test_params},
};

fn run(query: i64, dataset: &[i64], seed: u8) -> (bool, ProtocolInfo) {
    let mut source: Source = Source::new([seed; 32]);
    run_protocol_with_source(query, dataset.iter().copied(), &test_params(), &mut source).unwrap()
}

#[test]
fn scenario_member_of_five() {
    let (is_member, info) = run(15, &[5, 10, 15, 20, 25], 0);
    assert!(is_member);
    assert_eq!(
        info.coefficients,
        ints(&[-375000, 171250, -28125, 2125, -75, 1])
    );
    assert_eq!(info.degree, 5);
    assert_eq!(info.decrypted_result, 0);
    assert!(info.actual_membership);
}

#[test]
fn scenario_non_member_of_five() {
    let (is_member, info) = run(7, &[5, 10, 15, 20, 25], 1);
    assert!(!is_member);
    assert!(!info.actual_membership);
    assert_ne!(info.decrypted_result, 0);
}

#[test]
fn scenario_single_element() {
    let (is_member, info) = run(3, &[3], 2);
    assert!(is_member);
    assert_eq!(info.coefficients, ints(&[-3, 1]));

    let (is_member, info) = run(4, &[3], 3);
    assert!(!is_member);
    assert_ne!(info.decrypted_result, 0);
}

#[test]
fn demo_cases() {
    let small: Vec<i64> = vec![1, 3, 5, 7, 9];
    let medium: Vec<i64> = (10..=20).collect();
    let large: Vec<i64> = (1..=100).collect();

    let single: [i64; 1] = [42];

    let cases: Vec<(i64, &[i64], bool)> = vec![
        (5, small.as_slice(), true),
        (4, small.as_slice(), false),
        (15, medium.as_slice(), true),
        (50, large.as_slice(), true),
        (150, large.as_slice(), false),
        (42, single.as_slice(), true),
        (43, single.as_slice(), false),
    ];

    cases.iter().enumerate().for_each(|(i, &(query, dataset, want))| {
        let (is_member, info) = run(query, dataset, i as u8);
        assert_eq!(is_member, want, "query={} dataset_size={}", query, dataset.len());
        assert_eq!(is_member, info.actual_membership);
        assert_eq!(info.degree, dataset.len());
        assert_eq!(info.coefficients.len(), dataset.len() + 1);
    });
}

#[test]
fn negative_and_wide_elements() {
    let dataset: Vec<i64> = vec![-(1 << 62), -7, 0, 1 << 40, i64::MAX];
    dataset.iter().for_each(|&c| {
        assert!(run(c, &dataset, 9).0, "c={}", c);
    });
    [-(1 << 62) + 1, -8, 1, (1 << 40) - 1, i64::MIN].iter().for_each(|&c| {
        assert!(!run(c, &dataset, 10).0, "c={}", c);
    });
}

#[test]
fn info_counts_supplied_elements() {
    let (is_member, info) = run(2, &[2, 2, 3], 11);
    assert!(is_member);
    assert_eq!(info.dataset_size, 3);
    assert_eq!(info.degree, 2);
    assert_eq!(info.query, 2);
}

#[test]
fn empty_dataset_never_member() {
    [0i64, 1, -1].iter().for_each(|&c| {
        let (is_member, info) = run(c, &[], 12);
        assert!(!is_member);
        assert_eq!(info.coefficients, vec![Integer::from(1)]);
    });
}

#[test]
fn os_randomness() {
    let params: MembershipParams = test_params();
    let (is_member, _) = run_protocol(9, [1, 3, 5, 7, 9], &params).unwrap();
    assert!(is_member);
    let (is_member, _) = run_protocol(8, [1, 3, 5, 7, 9], &params).unwrap();
    assert!(!is_member);
}

#[test]
fn invalid_params_fail_before_running() {
    let params: MembershipParams = MembershipParams {
        key_bits: 100,
        element_bits: 8,
    };
    assert!(run_protocol(1, [1], &params).is_err());
}
