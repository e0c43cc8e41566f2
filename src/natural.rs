//! Heap-allocated arbitrary-precision natural numbers.

mod add;
mod bits;
mod cmp;
mod div;
pub(crate) mod encoding;
mod from;
mod mul;
mod pow;
mod shr;
mod sub;

#[cfg(feature = "rand")]
mod rand;

use crate::Limb;
use alloc::vec::Vec;
use core::fmt;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// Arbitrary-precision heap-allocated natural number.
///
/// Unlike a fixed-precision integer this type grows as needed and never wraps: every
/// operation which would leave the naturals (subtracting a larger value) is either a
/// `checked_*` method returning [`Option`] or a panicking operator.
///
/// The representation is canonical: limbs are stored least significant first and the
/// most significant limb is never zero, so zero is the empty vector. Derived equality
/// and hashing therefore agree with numeric equality.
#[derive(Clone, Default, PartialEq, Eq, Hash)]
pub struct Natural {
    /// Limbs, stored from least significant to most significant.
    pub(crate) limbs: Vec<Limb>,
}

impl Natural {
    /// Get the value `0`.
    #[must_use]
    pub const fn zero() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Get the value `1`.
    #[must_use]
    pub fn one() -> Self {
        Self::from_limb(Limb::ONE)
    }

    /// Create a [`Natural`] holding a single limb.
    #[must_use]
    pub fn from_limb(limb: Limb) -> Self {
        Self::from_limbs(alloc::vec![limb])
    }

    /// Create a [`Natural`] from limbs stored least significant first.
    ///
    /// Trailing zero limbs are discarded.
    #[must_use]
    pub fn from_limbs(limbs: Vec<Limb>) -> Self {
        let mut ret = Self { limbs };
        ret.normalize();
        ret
    }

    /// Is this [`Natural`] equal to zero?
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Is this [`Natural`] equal to one?
    #[inline]
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.limbs.as_slice() == [Limb::ONE]
    }

    /// Borrow the limbs of this [`Natural`], least significant first.
    #[inline]
    #[must_use]
    pub fn as_limbs(&self) -> &[Limb] {
        &self.limbs
    }

    /// Consume this [`Natural`] and return its limbs, least significant first.
    #[must_use]
    pub fn into_limbs(self) -> Vec<Limb> {
        self.limbs
    }

    /// Get the number of limbs in the canonical representation of this number.
    #[inline]
    #[must_use]
    pub fn nlimbs(&self) -> usize {
        self.limbs.len()
    }

    /// Drop most significant zero limbs to restore the canonical form.
    pub(crate) fn normalize(&mut self) {
        while self.limbs.last() == Some(&Limb::ZERO) {
            self.limbs.pop();
        }
    }
}

impl AsRef<[Limb]> for Natural {
    fn as_ref(&self) -> &[Limb] {
        self.as_limbs()
    }
}

impl num_traits::Zero for Natural {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        self.is_zero()
    }
}

impl num_traits::One for Natural {
    fn one() -> Self {
        Self::one()
    }

    fn is_one(&self) -> bool {
        self.is_one()
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Natural {
    fn zeroize(&mut self) {
        self.limbs.zeroize();
    }
}

impl fmt::Debug for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Natural({self})")
    }
}

#[cfg(test)]
mod tests {
    use super::Natural;
    use crate::Limb;
    use alloc::vec;

    #[test]
    fn zero_is_empty() {
        assert!(Natural::zero().is_zero());
        assert_eq!(Natural::zero().nlimbs(), 0);
        assert_eq!(Natural::default(), Natural::zero());
    }

    #[test]
    fn from_limbs_normalizes() {
        let n = Natural::from_limbs(vec![Limb::ONE, Limb::ZERO, Limb::ZERO]);
        assert_eq!(n, Natural::one());
        assert!(n.is_one());
        assert_eq!(Natural::from_limbs(vec![Limb::ZERO; 4]), Natural::zero());
    }

    #[test]
    fn debug_is_decimal() {
        assert_eq!(alloc::format!("{:?}", Natural::from(1024u32)), "Natural(1024)");
    }
}
