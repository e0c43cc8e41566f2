//! [`Natural`] addition operations.

use crate::{Limb, Natural};
use core::ops::{Add, AddAssign};

impl Natural {
    /// Computes `self + 1` in place.
    pub fn inc(&mut self) {
        self.add_assign_limbs(&[Limb::ONE]);
    }

    /// Computes `self + rhs` in place, where `rhs` is a little-endian limb slice.
    ///
    /// The result is extended by one limb if the sum carries out of the top.
    pub(crate) fn add_assign_limbs(&mut self, rhs: &[Limb]) {
        if self.limbs.len() < rhs.len() {
            self.limbs.resize(rhs.len(), Limb::ZERO);
        }

        let mut carry = Limb::ZERO;
        for (i, limb) in self.limbs.iter_mut().enumerate() {
            if i >= rhs.len() && carry.is_zero() {
                break;
            }
            let b = rhs.get(i).copied().unwrap_or(Limb::ZERO);
            (*limb, carry) = limb.carrying_add(b, carry);
        }

        if !carry.is_zero() {
            self.limbs.push(carry);
        }
    }
}

impl Add for Natural {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += &rhs;
        self
    }
}

impl Add<&Natural> for Natural {
    type Output = Self;

    fn add(mut self, rhs: &Natural) -> Self {
        self += rhs;
        self
    }
}

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, rhs: &Natural) -> Natural {
        self.clone() + rhs
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, rhs: Self) {
        self.add_assign_limbs(&rhs.limbs);
    }
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, rhs: &Natural) {
        self.add_assign_limbs(&rhs.limbs);
    }
}
