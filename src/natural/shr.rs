//! [`Natural`] bitwise right shift operations.

use crate::{Limb, Natural};
use core::ops::{Shr, ShrAssign};

impl Natural {
    /// Computes `self >> shift`.
    ///
    /// Shifting by more bits than the number holds yields zero.
    #[must_use]
    pub fn shr_vartime(&self, shift: u32) -> Self {
        let mut ret = self.clone();
        ret.shr_assign_vartime(shift);
        ret
    }

    /// Computes `self >>= shift`.
    pub fn shr_assign_vartime(&mut self, shift: u32) {
        let limb_shift = (shift / Limb::BITS) as usize;
        let bit_shift = shift % Limb::BITS;

        if limb_shift >= self.limbs.len() {
            self.limbs.clear();
            return;
        }
        self.limbs.drain(..limb_shift);

        if bit_shift != 0 {
            let len = self.limbs.len();
            for i in 0..len {
                let hi = self.limbs.get(i + 1).map_or(0, |l| l.0 << (Limb::BITS - bit_shift));
                self.limbs[i] = Limb((self.limbs[i].0 >> bit_shift) | hi);
            }
        }

        self.normalize();
    }
}

impl Shr<u32> for Natural {
    type Output = Natural;

    fn shr(mut self, shift: u32) -> Natural {
        self.shr_assign_vartime(shift);
        self
    }
}

impl Shr<u32> for &Natural {
    type Output = Natural;

    fn shr(self, shift: u32) -> Natural {
        self.shr_vartime(shift)
    }
}

impl ShrAssign<u32> for Natural {
    fn shr_assign(&mut self, shift: u32) {
        self.shr_assign_vartime(shift);
    }
}
