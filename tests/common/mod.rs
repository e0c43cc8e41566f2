//! Common functionality shared between tests.

// Different tests may use only a subset of the available functionality
#![allow(dead_code)]

use natural_root::Natural;
use num_bigint::BigUint;

/// `Natural` to `num_bigint::BigUint`
pub fn to_biguint(n: &Natural) -> BigUint {
    BigUint::from_bytes_le(&n.to_le_bytes())
}

/// `num_bigint::BigUint` to `Natural`
pub fn to_natural(big_uint: &BigUint) -> Natural {
    Natural::from_le_slice(&big_uint.to_bytes_le())
}
