//! `From`-like conversions for [`Natural`].

use crate::{Limb, Natural, Word};
use alloc::vec::Vec;

impl Natural {
    /// Create a [`Natural`] from a `u64`.
    #[must_use]
    pub fn from_u64(n: u64) -> Self {
        Self::from_u128(n.into())
    }

    /// Create a [`Natural`] from a `u128`.
    #[must_use]
    pub fn from_u128(n: u128) -> Self {
        let limbs = (0..u128::BITS / Limb::BITS)
            .map(|i| Limb((n >> (i * Limb::BITS)) as Word))
            .collect::<Vec<_>>();
        Self::from_limbs(limbs)
    }

    /// Convert to a `u128`, returning [`None`] if the value does not fit.
    #[must_use]
    pub fn to_u128(&self) -> Option<u128> {
        if self.bits() > u128::BITS {
            return None;
        }

        Some(
            self.limbs
                .iter()
                .rev()
                .fold(0u128, |acc, limb| (acc << Limb::BITS) | limb.0 as u128),
        )
    }
}

impl From<u8> for Natural {
    fn from(n: u8) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u16> for Natural {
    fn from(n: u16) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u32> for Natural {
    fn from(n: u32) -> Self {
        Self::from_u64(n.into())
    }
}

impl From<u64> for Natural {
    fn from(n: u64) -> Self {
        Self::from_u64(n)
    }
}

impl From<u128> for Natural {
    fn from(n: u128) -> Self {
        Self::from_u128(n)
    }
}

impl From<Limb> for Natural {
    fn from(limb: Limb) -> Self {
        Self::from_limb(limb)
    }
}
