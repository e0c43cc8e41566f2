use crate::{Limb, Natural};

impl Natural {
    /// Calculate the number of bits needed to represent this number, i.e. the length
    /// of its binary expansion without leading zeros.
    ///
    /// Returns `0` for zero.
    #[must_use]
    pub fn bits(&self) -> u32 {
        match self.limbs.last() {
            Some(top) => (self.limbs.len() as u32 - 1) * Limb::BITS + top.bits(),
            None => 0,
        }
    }

    /// Returns `true` if the bit at position `index` is set, `false` for an unset bit
    /// or for indices out of range.
    #[must_use]
    pub fn bit_vartime(&self, index: u32) -> bool {
        let limb_num = (index / Limb::BITS) as usize;
        let index_in_limb = index % Limb::BITS;
        self.limbs
            .get(limb_num)
            .is_some_and(|limb| (limb.0 >> index_in_limb) & 1 == 1)
    }

    /// Calculate the number of trailing zeros in the binary representation of this number.
    ///
    /// Returns [`None`] for zero, which has no set bit.
    #[must_use]
    pub fn trailing_zeros(&self) -> Option<u32> {
        let (i, limb) = self.limbs.iter().enumerate().find(|(_, l)| !l.is_zero())?;
        Some(i as u32 * Limb::BITS + limb.0.trailing_zeros())
    }
}
