//! [`Natural`] multiplication operations.

use crate::{Limb, Natural};
use alloc::{vec, vec::Vec};
use core::ops::{Mul, MulAssign};

impl Natural {
    /// Multiply `self` by `rhs`.
    #[must_use]
    pub fn mul(&self, rhs: &Self) -> Self {
        Self::from_limbs(schoolbook_multiplication(&self.limbs, &rhs.limbs))
    }

    /// Computes `self * self`.
    #[must_use]
    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Computes `self * mul + add` in place for single-limb operands.
    pub(crate) fn mul_add_limb_assign(&mut self, mul: Limb, add: Limb) {
        let mut carry = add;
        for limb in self.limbs.iter_mut() {
            (*limb, carry) = Limb::ZERO.carrying_mul_add(*limb, mul, carry);
        }

        if !carry.is_zero() {
            self.limbs.push(carry);
        }
        self.normalize();
    }
}

/// Schoolbook multiplication, producing `lhs.len() + rhs.len()` limbs.
fn schoolbook_multiplication(lhs: &[Limb], rhs: &[Limb]) -> Vec<Limb> {
    let mut out = vec![Limb::ZERO; lhs.len() + rhs.len()];

    for (i, &xi) in lhs.iter().enumerate() {
        let mut carry = Limb::ZERO;
        for (j, &yj) in rhs.iter().enumerate() {
            (out[i + j], carry) = out[i + j].carrying_mul_add(xi, yj, carry);
        }
        out[i + rhs.len()] = carry;
    }

    out
}

impl Mul for Natural {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Natural::mul(&self, &rhs)
    }
}

impl Mul<&Natural> for Natural {
    type Output = Self;

    fn mul(self, rhs: &Natural) -> Self {
        Natural::mul(&self, rhs)
    }
}

impl Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, rhs: &Natural) -> Natural {
        Natural::mul(self, rhs)
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, rhs: &Natural) {
        *self = Natural::mul(self, rhs);
    }
}
