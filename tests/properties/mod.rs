//! # Properties
//!
//! Ordering laws of the comparison, checked on generated and on exhaustively enumerated operands.
use std::cmp::Ordering;

use itertools::{iproduct, Itertools};
use num::BigUint;
use proptest::prelude::*;

use bignum_cmp::{compare, Bignum, ComparisonResult, CAPACITY, Limb};

/// Limbs that are often equal between operands, so that long common prefixes occur.
fn limb() -> impl Strategy<Value = Limb> {
    prop_oneof![
        0..3_u64,
        Just(u64::MAX),
        any::<u64>(),
    ]
}

fn limbs() -> impl Strategy<Value = Vec<Limb>> {
    prop::collection::vec(limb(), 0..=CAPACITY)
}

/// Limbs without leading zero limbs.
fn normalized_limbs() -> impl Strategy<Value = Vec<Limb>> {
    limbs().prop_map(|mut limbs| {
        while limbs.last() == Some(&0) {
            limbs.pop();
        }
        limbs
    })
}

fn bignum(limbs: &[Limb]) -> Bignum {
    Bignum::from_limbs(limbs).unwrap()
}

/// The value as an arbitrary precision integer.
fn oracle(value: &Bignum) -> BigUint {
    let bytes = value.limbs().iter()
        .flat_map(|limb| limb.to_le_bytes())
        .collect::<Vec<_>>();
    BigUint::from_bytes_le(&bytes)
}

proptest! {
    #[test]
    fn test_agrees_with_oracle(a in normalized_limbs(), b in normalized_limbs()) {
        let (a, b) = (bignum(&a), bignum(&b));
        let expected = ComparisonResult::from(oracle(&a).cmp(&oracle(&b)));
        prop_assert_eq!(compare(Some(&a), Some(&b)), expected);
    }

    #[test]
    fn test_antisymmetric_and_deterministic(a in limbs(), b in limbs()) {
        let (a, b) = (bignum(&a), bignum(&b));
        let forward = compare(Some(&a), Some(&b));
        prop_assert!(!forward.is_error());
        prop_assert_eq!(compare(Some(&b), Some(&a)), forward.reverse());
        prop_assert_eq!(compare(Some(&a), Some(&b)), forward);
    }

    #[test]
    fn test_length_takes_precedence(a in limbs(), b in limbs()) {
        prop_assume!(a.len() != b.len());
        let expected = ComparisonResult::from(a.len().cmp(&b.len()));
        prop_assert_eq!(compare(Some(&bignum(&a)), Some(&bignum(&b))), expected);
    }

    #[test]
    fn test_zero_ignores_storage(
        a in prop::array::uniform32(any::<u64>()),
        b in prop::array::uniform32(any::<u64>())
    ) {
        let a = Bignum::from_raw_parts(a, 0).unwrap();
        let b = Bignum::from_raw_parts(b, 0).unwrap();
        prop_assert_eq!(compare(Some(&a), Some(&b)), ComparisonResult::Equal);
    }

    #[test]
    fn test_operands_unchanged(
        a in prop::array::uniform32(limb()),
        b in prop::array::uniform32(limb()),
        a_len in 0..=CAPACITY as u32,
        b_len in 0..=CAPACITY as u32
    ) {
        let a = Bignum::from_raw_parts(a, a_len).unwrap();
        let b = Bignum::from_raw_parts(b, b_len).unwrap();
        let (a_before, b_before) = (a.into_raw_parts(), b.into_raw_parts());

        compare(Some(&a), Some(&b));
        compare(Some(&a), None);
        compare(None, Some(&b));

        prop_assert_eq!(a.into_raw_parts(), a_before);
        prop_assert_eq!(b.into_raw_parts(), b_before);
    }

    #[test]
    fn test_absent_operand(a in limbs()) {
        let a = bignum(&a);
        prop_assert_eq!(compare(Some(&a), None), ComparisonResult::NullInputError);
        prop_assert_eq!(compare(None, Some(&a)), ComparisonResult::NullInputError);
    }
}

/// Zero and all values of one to three limbs drawn from a few interesting limb values.
fn small_values() -> Vec<Bignum> {
    let digits = [0, 1, u64::MAX];
    let nonempty = (1..=3)
        .flat_map(|length| {
            (0..length)
                .map(|_| digits.iter().copied())
                .multi_cartesian_product()
        })
        .map(|limbs| bignum(&limbs));

    std::iter::once(Bignum::zero()).chain(nonempty).collect()
}

#[test]
fn test_exhaustive_total_order() {
    let values = small_values();
    assert_eq!(values.len(), 1 + 3 + 9 + 27);

    for (a, b) in iproduct!(&values, &values) {
        let result = compare(Some(a), Some(b));
        assert_eq!(compare(Some(b), Some(a)), result.reverse());
        assert_eq!(result == ComparisonResult::Equal, a.limbs() == b.limbs());
    }

    let sorted = values.iter().sorted_by(|a, b| {
        compare(Some(*a), Some(*b)).ordering().unwrap()
    }).collect::<Vec<_>>();
    for (a, b) in sorted.into_iter().tuple_windows() {
        assert_eq!(compare(Some(a), Some(b)), ComparisonResult::Less);
    }
}

#[test]
fn test_exhaustive_transitive() {
    let values = small_values();

    for (a, b, c) in iproduct!(&values, &values, &values) {
        let ab = compare(Some(a), Some(b)).ordering().unwrap();
        let bc = compare(Some(b), Some(c)).ordering().unwrap();
        if ab == bc || bc == Ordering::Equal {
            assert_eq!(compare(Some(a), Some(c)).ordering(), Some(ab));
        }
    }
}
