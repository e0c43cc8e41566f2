//! Decimal, hexadecimal, and byte encodings of [`Natural`].

use crate::{
    Limb, Natural, Word,
    word::{WORD_LOG10, WORD_MAX10},
};
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
use core::{fmt, num::NonZero, str::FromStr};

#[cfg(feature = "serde")]
use serdect::serde::{
    Deserialize, Deserializer, Serialize, Serializer,
    de::{Error, Unexpected, Visitor},
};

/// The failure result for decimal parsing operations.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ParseNaturalError {
    /// The input was empty.
    Empty,
    /// The input contained a byte which is not an ASCII decimal digit.
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl fmt::Display for ParseNaturalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "cannot parse natural number from empty string"),
            Self::InvalidDigit { index } => {
                write!(f, "invalid decimal digit at byte offset {index}")
            }
        }
    }
}

impl core::error::Error for ParseNaturalError {}

/// Radix of the base-`10^WORD_LOG10` digits used when rendering decimal strings.
const DECIMAL_RADIX: NonZero<Word> = match NonZero::new(WORD_MAX10) {
    Some(radix) => radix,
    None => panic!("WORD_MAX10 is zero"),
};

impl Natural {
    /// Parse a [`Natural`] from a string of ASCII decimal digits.
    ///
    /// Leading zeros are accepted; signs, whitespace, and digit separators are not.
    pub fn from_decimal(dec: &str) -> Result<Self, ParseNaturalError> {
        Self::from_decimal_bytes(dec.as_bytes())
    }

    /// Parse a [`Natural`] from a byte string of ASCII decimal digits.
    pub fn from_decimal_bytes(dec: &[u8]) -> Result<Self, ParseNaturalError> {
        if dec.is_empty() {
            return Err(ParseNaturalError::Empty);
        }
        if let Some(index) = dec.iter().position(|c| !c.is_ascii_digit()) {
            return Err(ParseNaturalError::InvalidDigit { index });
        }

        // The leading chunk may be short; every following chunk is exactly `WORD_LOG10` digits.
        let mut ret = Self::zero();
        let head = dec.len() % WORD_LOG10;
        let (first, rest) = dec.split_at(head);
        if !first.is_empty() {
            ret.mul_add_limb_assign(Limb(WORD_MAX10), decimal_chunk(first));
        }
        for chunk in rest.chunks(WORD_LOG10) {
            ret.mul_add_limb_assign(Limb(WORD_MAX10), decimal_chunk(chunk));
        }
        Ok(ret)
    }

    /// Render this number as a string of decimal digits.
    #[must_use]
    pub fn to_decimal(&self) -> String {
        self.to_string()
    }

    /// Serialize this number as a little-endian byte vector with no trailing zero bytes.
    #[must_use]
    pub fn to_le_bytes(&self) -> Vec<u8> {
        let mut bytes = self
            .limbs
            .iter()
            .flat_map(|limb| limb.0.to_le_bytes())
            .collect::<Vec<_>>();
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    }

    /// Decode a [`Natural`] from a little-endian byte slice of any length.
    #[must_use]
    pub fn from_le_slice(bytes: &[u8]) -> Self {
        let limbs = bytes
            .chunks(Limb::BYTES)
            .map(|chunk| {
                let mut buf = [0u8; Limb::BYTES];
                buf[..chunk.len()].copy_from_slice(chunk);
                Limb(Word::from_le_bytes(buf))
            })
            .collect();
        Self::from_limbs(limbs)
    }
}

/// Fold a run of at most `WORD_LOG10` validated ASCII digits into a limb.
fn decimal_chunk(chunk: &[u8]) -> Limb {
    Limb(
        chunk
            .iter()
            .fold(0, |acc: Word, c| acc * 10 + Word::from(c - b'0')),
    )
}

impl FromStr for Natural {
    type Err = ParseNaturalError;

    fn from_str(src: &str) -> Result<Self, ParseNaturalError> {
        Self::from_decimal(src)
    }
}

impl fmt::Display for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Collect base-10^WORD_LOG10 digits, least significant first.
        let mut n = self.clone();
        let mut chunks = Vec::with_capacity(self.limbs.len() + 1);
        while !n.is_zero() {
            chunks.push(n.div_rem_limb_assign(DECIMAL_RADIX).0);
        }

        let mut buf = String::with_capacity(chunks.len() * WORD_LOG10);
        let mut iter = chunks.iter().rev();
        match iter.next() {
            Some(top) => fmt::Write::write_fmt(&mut buf, format_args!("{top}"))?,
            None => buf.push('0'),
        }
        for chunk in iter {
            fmt::Write::write_fmt(&mut buf, format_args!("{chunk:0width$}", width = WORD_LOG10))?;
        }

        f.pad_integral(true, "", &buf)
    }
}

impl fmt::LowerHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(self, f, false)
    }
}

impl fmt::UpperHex for Natural {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(self, f, true)
    }
}

fn write_hex(n: &Natural, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
    let mut buf = String::with_capacity(n.limbs.len() * Limb::BYTES * 2);
    let mut iter = n.limbs.iter().rev();
    match (iter.next(), upper) {
        (Some(top), false) => fmt::Write::write_fmt(&mut buf, format_args!("{:x}", top.0))?,
        (Some(top), true) => fmt::Write::write_fmt(&mut buf, format_args!("{:X}", top.0))?,
        (None, _) => buf.push('0'),
    }
    for limb in iter {
        if upper {
            fmt::Write::write_fmt(&mut buf, format_args!("{limb:X}"))?;
        } else {
            fmt::Write::write_fmt(&mut buf, format_args!("{limb:x}"))?;
        }
    }
    f.pad_integral(true, "0x", &buf)
}

#[cfg(feature = "serde")]
struct DecimalVisitor;

#[cfg(feature = "serde")]
impl Visitor<'_> for DecimalVisitor {
    type Value = Natural;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "a decimal string")
    }

    fn visit_str<E>(self, dec: &str) -> Result<Natural, E>
    where
        E: Error,
    {
        Natural::from_decimal(dec).map_err(|_| E::invalid_value(Unexpected::Str(dec), &self))
    }
}

#[cfg(feature = "serde")]
impl<'de> Deserialize<'de> for Natural {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(DecimalVisitor)
    }
}

#[cfg(feature = "serde")]
impl Serialize for Natural {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}
