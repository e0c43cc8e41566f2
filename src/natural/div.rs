//! [`Natural`] division by a single limb.

use crate::{Limb, Natural, Word};
use core::num::NonZero;
use core::ops::{Div, Rem};

impl Natural {
    /// Computes `self / rhs`, returning the quotient and the remainder.
    #[must_use]
    pub fn div_rem_limb(&self, rhs: NonZero<Word>) -> (Self, Limb) {
        let mut quo = self.clone();
        let rem = quo.div_rem_limb_assign(rhs);
        (quo, rem)
    }

    /// Computes `self / rhs` in place, returning the remainder.
    pub fn div_rem_limb_assign(&mut self, rhs: NonZero<Word>) -> Limb {
        let divisor = Limb(rhs.get());
        let mut rem = Limb::ZERO;
        for limb in self.limbs.iter_mut().rev() {
            (*limb, rem) = limb.div_rem_wide(rem, divisor);
        }
        self.normalize();
        rem
    }

    /// Computes `self % rhs`.
    #[must_use]
    pub fn rem_limb(&self, rhs: NonZero<Word>) -> Limb {
        let divisor = Limb(rhs.get());
        self.limbs
            .iter()
            .rev()
            .fold(Limb::ZERO, |rem, limb| limb.div_rem_wide(rem, divisor).1)
    }
}

impl Div<NonZero<Word>> for Natural {
    type Output = Natural;

    fn div(mut self, rhs: NonZero<Word>) -> Natural {
        self.div_rem_limb_assign(rhs);
        self
    }
}

impl Div<NonZero<Word>> for &Natural {
    type Output = Natural;

    fn div(self, rhs: NonZero<Word>) -> Natural {
        self.div_rem_limb(rhs).0
    }
}

impl Rem<NonZero<Word>> for &Natural {
    type Output = Limb;

    fn rem(self, rhs: NonZero<Word>) -> Limb {
        self.rem_limb(rhs)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Limb, Natural, Word};
    use core::num::NonZero;

    fn nz(w: Word) -> NonZero<Word> {
        NonZero::new(w).unwrap()
    }

    #[test]
    fn div_rem_small() {
        let n = Natural::from(189943527u32);
        let (q, r) = n.div_rem_limb(nz(10));
        assert_eq!(q, Natural::from(18994352u32));
        assert_eq!(r, Limb(7));
        assert_eq!(n.rem_limb(nz(10)), Limb(7));
    }

    #[test]
    fn div_zero() {
        let (q, r) = Natural::zero().div_rem_limb(nz(3));
        assert!(q.is_zero());
        assert_eq!(r, Limb::ZERO);
    }

    #[test]
    fn div_multi_limb() {
        let n = Natural::from(u128::MAX);
        let (q, r) = n.div_rem_limb(nz(2));
        assert_eq!(q, Natural::from(u128::MAX >> 1));
        assert_eq!(r, Limb::ONE);

        let (q, r) = n.div_rem_limb(nz(Word::MAX));
        assert_eq!(q, Natural::from(u128::MAX / Word::MAX as u128));
        assert_eq!(r, Limb::ZERO);
    }

    #[test]
    fn div_operator() {
        let n = Natural::from(1025u32);
        assert_eq!(&n / nz(2), Natural::from(512u32));
        assert_eq!(&n % nz(2), Limb::ONE);
        assert_eq!(n / nz(1025), Natural::one());
    }
}
