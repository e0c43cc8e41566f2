//! Big integers are represented as a vector of smaller CPU word-size integers
//! called "limbs".

use crate::{
    Word,
    primitives::{borrowing_sub, carrying_add, carrying_mul_add, div_wide},
};
use core::fmt;

/// Calculate the number of limbs required to represent the given number of bits.
#[inline(always)]
#[must_use]
pub const fn nlimbs(bits: u32) -> usize {
    bits.div_ceil(Limb::BITS) as usize
}

/// Big integers are represented as a vector of smaller CPU word-size integers called
/// "limbs".
///
/// The [`Limb`] type uses a 32-bit or 64-bit saturated representation, depending on the target.
/// All bits of an inner [`Word`] are used to represent larger big integer types.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Limb(pub Word);

impl Limb {
    /// The value `0`.
    pub const ZERO: Self = Limb(0);

    /// The value `1`.
    pub const ONE: Self = Limb(1);

    /// Maximum value this [`Limb`] can express.
    pub const MAX: Self = Limb(Word::MAX);

    /// Size of the inner integer in bits.
    pub const BITS: u32 = Word::BITS;

    /// Size of the inner integer in bytes.
    pub const BYTES: usize = Word::BITS as usize / 8;

    /// Is this limb equal to [`Limb::ZERO`]?
    #[inline(always)]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Calculate the number of bits needed to represent this number.
    #[inline(always)]
    #[must_use]
    pub const fn bits(self) -> u32 {
        Limb::BITS - self.0.leading_zeros()
    }

    /// Computes `self + rhs + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_add(self, rhs: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_add(self.0, rhs.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Computes `self - (rhs + borrow)`, returning the result along with the new borrow.
    #[inline(always)]
    #[must_use]
    pub const fn borrowing_sub(self, rhs: Limb, borrow: Limb) -> (Limb, Limb) {
        let (res, borrow) = borrowing_sub(self.0, rhs.0, borrow.0);
        (Limb(res), Limb(borrow))
    }

    /// Computes `self + (b * c) + carry`, returning the result along with the new carry.
    #[inline(always)]
    #[must_use]
    pub const fn carrying_mul_add(self, b: Limb, c: Limb, carry: Limb) -> (Limb, Limb) {
        let (res, carry) = carrying_mul_add(b.0, c.0, self.0, carry.0);
        (Limb(res), Limb(carry))
    }

    /// Divides the two-limb value `(hi, self)` by `divisor`, returning the quotient and remainder.
    ///
    /// Requires `hi < divisor`.
    #[inline(always)]
    #[must_use]
    pub(crate) const fn div_rem_wide(self, hi: Limb, divisor: Limb) -> (Limb, Limb) {
        let (quo, rem) = div_wide(hi.0, self.0, divisor.0);
        (Limb(quo), Limb(rem))
    }
}

impl From<Word> for Limb {
    #[inline]
    fn from(n: Word) -> Limb {
        Limb(n)
    }
}

impl fmt::Debug for Limb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Limb(0x{self:X})")
    }
}

impl fmt::LowerHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$x}", &self.0, width = Self::BYTES * 2)
    }
}

impl fmt::UpperHex for Limb {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "0x")?;
        }
        write!(f, "{:0width$X}", &self.0, width = Self::BYTES * 2)
    }
}

#[cfg(feature = "zeroize")]
impl zeroize::DefaultIsZeroes for Limb {}

#[cfg(test)]
mod tests {
    use super::Limb;
    use crate::Word;

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn nlimbs_for_bits() {
        assert_eq!(super::nlimbs(0), 0);
        assert_eq!(super::nlimbs(1), 1);
        assert_eq!(super::nlimbs(64), 1);
        assert_eq!(super::nlimbs(65), 2);
        assert_eq!(super::nlimbs(128), 2);
        assert_eq!(super::nlimbs(129), 3);
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn nlimbs_for_bits() {
        assert_eq!(super::nlimbs(0), 0);
        assert_eq!(super::nlimbs(1), 1);
        assert_eq!(super::nlimbs(64), 2);
        assert_eq!(super::nlimbs(65), 3);
        assert_eq!(super::nlimbs(128), 4);
        assert_eq!(super::nlimbs(129), 5);
    }

    #[test]
    fn bits() {
        assert_eq!(Limb::ZERO.bits(), 0);
        assert_eq!(Limb::ONE.bits(), 1);
        assert_eq!(Limb(0b1010).bits(), 4);
        assert_eq!(Limb::MAX.bits(), Limb::BITS);
    }

    #[test]
    fn carrying_add_overflow() {
        assert_eq!(Limb::MAX.carrying_add(Limb::ONE, Limb::ZERO), (Limb::ZERO, Limb::ONE));
        assert_eq!(Limb::MAX.carrying_add(Limb::MAX, Limb::ONE), (Limb::MAX, Limb::ONE));
    }

    #[test]
    fn borrowing_sub_underflow() {
        assert_eq!(Limb::ZERO.borrowing_sub(Limb::ONE, Limb::ZERO), (Limb::MAX, Limb::ONE));
        assert_eq!(Limb(3).borrowing_sub(Limb(1), Limb::ONE), (Limb(1), Limb::ZERO));
    }

    #[test]
    fn carrying_mul_add_wide() {
        let (lo, hi) = Limb::ZERO.carrying_mul_add(Limb::MAX, Limb(2), Limb::ZERO);
        assert_eq!(lo, Limb(Word::MAX - 1));
        assert_eq!(hi, Limb::ONE);
    }
}
