//! Integer `exp`-th roots by bisection.
//!
//! The search keeps a bracket `[floor, ceiling)` with `floor^exp <= n < ceiling^exp` and
//! halves it until the two ends are adjacent, at which point `floor` is the root. It starts
//! from `[0, n + 1)`, which brackets every root including `n` itself (`n = 0` and `n = 1`).
//!
//! When `exp` is at least the bit length of `n`, `n < 2^exp` and the root is `min(n, 1)`.
//! That case returns directly, so no guess is ever raised to a degree beyond the bit length
//! of `n`.

use crate::{Natural, NaturalNumber};
use core::num::NonZeroU32;

const TWO: NonZeroU32 = NonZeroU32::new(2).expect("2 is non-zero");

/// Computes `floor(n^(1/exp))`: the unique `x` with `x^exp <= n < (x + 1)^exp`.
///
/// This function is variable time in `n` and in the exponent.
///
/// # Panics
/// - if `exp < 2`
#[must_use]
pub fn floor_root<N: NaturalNumber>(n: &N, exp: u32) -> N {
    assert!(exp >= 2, "root degree must be at least 2");

    if u64::from(exp) >= n.bits() {
        return n.clone().min(N::from(1));
    }

    let mut ceiling = n.clone();
    ceiling.increment();
    bisect(n, exp, N::from(0), ceiling)
}

/// Replaces `n` with `floor(n^(1/exp))`.
///
/// # Panics
/// - if `exp < 2`
pub fn root_assign<N: NaturalNumber>(n: &mut N, exp: u32) {
    *n = floor_root(n, exp);
}

/// Compute the root `n^(1/exp)` returning an [`Option`] which `is_some`
/// only if the root is exact.
///
/// # Panics
/// - if `exp < 2`
#[must_use]
pub fn checked_root<N: NaturalNumber>(n: &N, exp: u32) -> Option<N> {
    let root = floor_root(n, exp);
    (root.power(exp) == *n).then_some(root)
}

/// Bisect the bracket `[floor, ceiling)` down to the floor root of `n`.
///
/// Requires `floor^exp <= n < ceiling^exp`; any bracket satisfying this yields the same root.
pub(crate) fn bisect<N: NaturalNumber>(n: &N, exp: u32, mut floor: N, mut ceiling: N) -> N {
    let one = N::from(1);

    while ceiling
        .checked_minus(&floor)
        .expect("bisection bracket inverted")
        > one
    {
        let guess = floor.plus(&ceiling).div_small(TWO);
        let guess_pow = guess.power(exp);

        if guess_pow <= *n {
            floor = guess;
        } else {
            ceiling = guess;
        }
    }

    floor
}

impl Natural {
    /// Computes `floor(self^(1/exp))`.
    ///
    /// Callers can check if `self` is an exact power of `exp` by exponentiating the result,
    /// or use [`Natural::checked_root`].
    ///
    /// # Panics
    /// - if `exp < 2`
    #[must_use]
    pub fn floor_root(&self, exp: u32) -> Self {
        floor_root(self, exp)
    }

    /// Compute the root `self^(1/exp)` returning an [`Option`] which `is_some`
    /// only if the root is exact.
    ///
    /// # Panics
    /// - if `exp < 2`
    #[must_use]
    pub fn checked_root(&self, exp: u32) -> Option<Self> {
        checked_root(self, exp)
    }

    /// Computes `floor(√self)`.
    #[must_use]
    pub fn floor_sqrt(&self) -> Self {
        floor_root(self, 2)
    }
}
