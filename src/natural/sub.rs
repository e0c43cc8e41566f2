//! [`Natural`] subtraction operations.

use crate::{Limb, Natural};
use core::ops::{Sub, SubAssign};

impl Natural {
    /// Computes `self - rhs`, returning [`None`] if `rhs` is greater than `self`.
    #[must_use]
    pub fn checked_sub(&self, rhs: &Self) -> Option<Self> {
        let mut ret = self.clone();
        ret.sub_assign_limbs(&rhs.limbs).then_some(ret)
    }

    /// Computes `self - 1`, returning [`None`] for zero.
    #[must_use]
    pub fn checked_dec(&self) -> Option<Self> {
        self.checked_sub(&Self::one())
    }

    /// Computes `self - rhs` in place, returning `false` on underflow.
    ///
    /// `self` is left in an unspecified (but canonical) state when the subtraction underflows.
    pub(crate) fn sub_assign_limbs(&mut self, rhs: &[Limb]) -> bool {
        if self.limbs.len() < rhs.len() {
            return false;
        }

        let mut borrow = Limb::ZERO;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            if i >= rhs.len() && borrow.is_zero() {
                break;
            }
            let b = rhs.get(i).copied().unwrap_or(Limb::ZERO);
            (*limb, borrow) = limb.borrowing_sub(b, borrow);
        }

        self.normalize();
        borrow.is_zero()
    }
}

impl Sub for Natural {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.sub(&rhs)
    }
}

impl Sub<&Natural> for Natural {
    type Output = Self;

    fn sub(mut self, rhs: &Natural) -> Self {
        self -= rhs;
        self
    }
}

impl Sub<&Natural> for &Natural {
    type Output = Natural;

    fn sub(self, rhs: &Natural) -> Natural {
        self.checked_sub(rhs).expect("attempted to subtract with underflow")
    }
}

impl SubAssign for Natural {
    fn sub_assign(&mut self, rhs: Self) {
        *self -= &rhs;
    }
}

impl SubAssign<&Natural> for Natural {
    fn sub_assign(&mut self, rhs: &Natural) {
        assert!(
            self.sub_assign_limbs(&rhs.limbs),
            "attempted to subtract with underflow"
        );
    }
}
