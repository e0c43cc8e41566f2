//! Random number generator support.

use crate::{Limb, Natural, Word, limb::nlimbs};
use alloc::vec::Vec;
use rand_core::RngCore;

impl Natural {
    /// Generate a random [`Natural`] in the range `0..2^bit_length`.
    ///
    /// The result is uniformly distributed provided the underlying generator is.
    pub fn random_bits<R: RngCore + ?Sized>(rng: &mut R, bit_length: u32) -> Self {
        let mut limbs = (0..nlimbs(bit_length))
            .map(|_| {
                let mut bytes = [0u8; Limb::BYTES];
                rng.fill_bytes(&mut bytes);
                Limb(Word::from_le_bytes(bytes))
            })
            .collect::<Vec<_>>();

        let partial = bit_length % Limb::BITS;
        if let (Some(top), true) = (limbs.last_mut(), partial != 0) {
            top.0 &= Word::MAX >> (Limb::BITS - partial);
        }

        Self::from_limbs(limbs)
    }
}
