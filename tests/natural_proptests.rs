//! Equivalence tests between `natural_root::Natural` and `num_bigint::BigUint`.

mod common;

use common::{to_biguint, to_natural};
use natural_root::{Natural, Word, floor_root};
use num_bigint::BigUint;
use num_integer::Roots;
use num_traits::CheckedSub;
use proptest::prelude::*;
use std::num::NonZero;

prop_compose! {
    fn natural()(bytes in proptest::collection::vec(any::<u8>(), 0..48)) -> Natural {
        Natural::from_le_slice(&bytes)
    }
}
prop_compose! {
    fn small_natural()(bytes in proptest::collection::vec(any::<u8>(), 0..12)) -> Natural {
        Natural::from_le_slice(&bytes)
    }
}
prop_compose! {
    fn nonzero_word()(x in any::<Word>()) -> NonZero<Word> {
        NonZero::new(x).unwrap_or(NonZero::<Word>::MIN)
    }
}

proptest! {
    #[test]
    fn roundtrip(a in natural()) {
        prop_assert_eq!(&a, &to_natural(&to_biguint(&a)));
    }

    #[test]
    fn add(a in natural(), b in natural()) {
        let expected = to_biguint(&a) + to_biguint(&b);
        prop_assert_eq!(to_biguint(&(a + b)), expected);
    }

    #[test]
    fn checked_sub(a in natural(), b in natural()) {
        let expected = to_biguint(&a).checked_sub(&to_biguint(&b));
        prop_assert_eq!(a.checked_sub(&b).map(|n| to_biguint(&n)), expected);
    }

    #[test]
    fn mul(a in natural(), b in natural()) {
        let expected = to_biguint(&a) * to_biguint(&b);
        prop_assert_eq!(to_biguint(&(a * b)), expected);
    }

    #[test]
    fn div_rem_limb(a in natural(), b in nonzero_word()) {
        let a_bi = to_biguint(&a);
        let b_bi = BigUint::from(b.get());
        let (q, r) = a.div_rem_limb(b);
        prop_assert_eq!(to_biguint(&q), &a_bi / &b_bi);
        prop_assert_eq!(BigUint::from(r.0), &a_bi % &b_bi);
    }

    #[test]
    fn shr(a in natural(), shift in 0u32..500) {
        let expected = to_biguint(&a) >> shift;
        prop_assert_eq!(to_biguint(&(a >> shift)), expected);
    }

    #[test]
    fn pow(a in small_natural(), exp in 0u32..12) {
        let expected = to_biguint(&a).pow(exp);
        prop_assert_eq!(to_biguint(&a.pow(exp)), expected);
    }

    #[test]
    fn decimal(a in natural()) {
        let dec = a.to_string();
        prop_assert_eq!(&dec, &to_biguint(&a).to_string());
        prop_assert_eq!(dec.parse::<Natural>().unwrap(), a);
    }

    #[test]
    fn cmp(a in natural(), b in natural()) {
        prop_assert_eq!(a.cmp(&b), to_biguint(&a).cmp(&to_biguint(&b)));
    }

    #[test]
    fn floor_root_matches_nth_root(n in natural(), exp in 2u32..8) {
        let expected = to_biguint(&n).nth_root(exp);
        prop_assert_eq!(to_biguint(&floor_root(&n, exp)), expected);
    }

    #[test]
    fn floor_root_brackets_input(n in natural(), exp in 2u32..8) {
        let root = n.floor_root(exp);
        prop_assert!(root.pow(exp) <= n);
        prop_assert!((&root + &Natural::one()).pow(exp) > n);
    }

    #[test]
    fn floor_root_monotonic(a in natural(), b in natural(), exp in 2u32..8) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(lo.floor_root(exp) <= hi.floor_root(exp));
    }

    #[test]
    fn floor_root_of_exact_power(k in small_natural(), exp in 2u32..8) {
        let n = k.pow(exp);
        prop_assert_eq!(n.floor_root(exp), k.clone());
        prop_assert_eq!(n.checked_root(exp), Some(k));
    }
}
