//! `Word` represents the core integer type we use as the core of `Limb`, and is typically the same
//! size as a pointer on a particular CPU.

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("this crate builds on 32-bit and 64-bit platforms only");

/// 32-bit definitions
#[cfg(target_pointer_width = "32")]
mod word32 {
    /// Inner integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u32;

    /// Unsigned wide integer type: double the width of [`Word`].
    pub type WideWord = u64;

    /// Number of decimal digits which always fit into a [`Word`].
    pub(crate) const WORD_LOG10: usize = 9;
}

/// 64-bit definitions
#[cfg(target_pointer_width = "64")]
mod word64 {
    /// Inner integer type that the [`Limb`][`crate::Limb`] newtype wraps.
    pub type Word = u64;

    /// Wide integer type: double the width of [`Word`].
    pub type WideWord = u128;

    /// Number of decimal digits which always fit into a [`Word`].
    pub(crate) const WORD_LOG10: usize = 19;
}

#[cfg(target_pointer_width = "32")]
pub use word32::*;
#[cfg(target_pointer_width = "64")]
pub use word64::*;

/// Largest power of ten representable in a [`Word`]: `10^WORD_LOG10`.
pub(crate) const WORD_MAX10: Word = Word::pow(10, WORD_LOG10 as u32);
