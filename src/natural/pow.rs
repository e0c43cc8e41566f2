//! [`Natural`] exponentiation operations.

use crate::Natural;

impl Natural {
    /// Computes `self^exp` using left-to-right binary exponentiation.
    ///
    /// `0^0` is defined as `1`.
    ///
    /// This method is variable time in both `self` and the exponent.
    #[must_use]
    pub fn pow(&self, exp: u32) -> Self {
        if exp == 0 {
            return Self::one();
        }
        if self.is_zero() || self.is_one() {
            return self.clone();
        }

        let mut ret = self.clone();
        let mut i = u32::BITS - exp.leading_zeros() - 1;
        while i > 0 {
            i -= 1;
            ret = ret.square();
            if (exp >> i) & 1 == 1 {
                ret = ret.mul(self);
            }
        }
        ret
    }
}

impl num_traits::Pow<u32> for Natural {
    type Output = Natural;

    fn pow(self, exp: u32) -> Natural {
        Natural::pow(&self, exp)
    }
}

impl num_traits::Pow<u32> for &Natural {
    type Output = Natural;

    fn pow(self, exp: u32) -> Natural {
        Natural::pow(self, exp)
    }
}
