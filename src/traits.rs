//! Traits provided by this crate

use crate::{Natural, Word};
use core::fmt::{Debug, Display};
use core::num::{NonZero, NonZeroU32};

/// Arbitrary-precision natural number: the arithmetic the root search is built on.
///
/// Implementations must be unbounded. In particular [`NaturalNumber::plus`],
/// [`NaturalNumber::increment`], and [`NaturalNumber::power`] never wrap or saturate, since
/// the search relies on `n + 1` and `guess^exp` being exact.
pub trait NaturalNumber: Clone + Debug + Display + Ord + From<u32> {
    /// Computes `self + 1` in place.
    fn increment(&mut self);

    /// Computes `self + rhs`.
    fn plus(&self, rhs: &Self) -> Self;

    /// Computes `self - rhs`, returning [`None`] if `rhs` is greater than `self`.
    fn checked_minus(&self, rhs: &Self) -> Option<Self>;

    /// Computes `self / divisor`, truncating.
    fn div_small(&self, divisor: NonZeroU32) -> Self;

    /// Computes `self^exp`, with `x^0 == 1` for every `x`.
    fn power(&self, exp: u32) -> Self;

    /// Number of bits needed to represent `self`; `0` for zero.
    fn bits(&self) -> u64;
}

impl NaturalNumber for Natural {
    fn increment(&mut self) {
        self.inc();
    }

    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn checked_minus(&self, rhs: &Self) -> Option<Self> {
        self.checked_sub(rhs)
    }

    fn div_small(&self, divisor: NonZeroU32) -> Self {
        self.div_rem_limb(NonZero::<Word>::from(divisor)).0
    }

    fn power(&self, exp: u32) -> Self {
        self.pow(exp)
    }

    fn bits(&self) -> u64 {
        u64::from(Natural::bits(self))
    }
}

#[cfg(feature = "num-bigint")]
impl NaturalNumber for num_bigint::BigUint {
    fn increment(&mut self) {
        *self += 1u32;
    }

    fn plus(&self, rhs: &Self) -> Self {
        self + rhs
    }

    fn checked_minus(&self, rhs: &Self) -> Option<Self> {
        num_traits::CheckedSub::checked_sub(self, rhs)
    }

    fn div_small(&self, divisor: NonZeroU32) -> Self {
        self / divisor.get()
    }

    fn power(&self, exp: u32) -> Self {
        num_bigint::BigUint::pow(self, exp)
    }

    fn bits(&self) -> u64 {
        num_bigint::BigUint::bits(self)
    }
}

#[cfg(test)]
mod tests {
    use super::NaturalNumber;
    use crate::Natural;
    use core::num::NonZeroU32;

    fn exercise<N: NaturalNumber>() {
        let mut n = N::from(41);
        n.increment();
        assert_eq!(n, N::from(42));
        assert_eq!(n.plus(&N::from(8)), N::from(50));
        assert_eq!(n.checked_minus(&N::from(40)), Some(N::from(2)));
        assert_eq!(n.checked_minus(&N::from(43)), None);
        assert_eq!(n.div_small(NonZeroU32::new(5).unwrap()), N::from(8));
        assert_eq!(N::from(3).power(5), N::from(243));
        assert_eq!(N::from(0).power(0), N::from(1));
        assert_eq!(N::from(0).bits(), 0);
        assert_eq!(N::from(1).bits(), 1);
        assert_eq!(N::from(255).bits(), 8);
        assert_eq!(N::from(256).bits(), 9);
    }

    #[test]
    fn natural() {
        exercise::<Natural>();
    }

    #[cfg(feature = "num-bigint")]
    #[test]
    fn biguint() {
        exercise::<num_bigint::BigUint>();
    }
}
