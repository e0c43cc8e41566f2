use crate::{WideWord, Word};

/// Computes `lhs + rhs + carry`, returning the result along with the new carry (0, 1, or 2).
#[inline(always)]
pub(crate) const fn carrying_add(lhs: Word, rhs: Word, carry: Word) -> (Word, Word) {
    let a = lhs as WideWord;
    let b = rhs as WideWord;
    let carry = carry as WideWord;
    let ret = a + b + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Computes `lhs - (rhs + borrow)`, returning the result along with the new borrow.
///
/// The borrow is `0` or `1`.
#[inline(always)]
pub(crate) const fn borrowing_sub(lhs: Word, rhs: Word, borrow: Word) -> (Word, Word) {
    let (ret, b1) = lhs.overflowing_sub(rhs);
    let (ret, b2) = ret.overflowing_sub(borrow);
    (ret, (b1 | b2) as Word)
}

/// Computes `(lhs * rhs) + addend + carry`, returning the result along with the new carry.
#[inline(always)]
pub(crate) const fn carrying_mul_add(
    lhs: Word,
    rhs: Word,
    addend: Word,
    carry: Word,
) -> (Word, Word) {
    let lhs = lhs as WideWord;
    let rhs = rhs as WideWord;
    let addend = addend as WideWord;
    let carry = carry as WideWord;

    // Cannot overflow:
    // (2^64-1) * (2^64-1) + (2^64-1) + (2^64-1) = 2^128 - 1
    let ret = ((lhs * rhs) + addend) + carry;
    (ret as Word, (ret >> Word::BITS) as Word)
}

/// Divides the two-word value `(hi, lo)` by `divisor`, returning the quotient and remainder.
///
/// Requires `hi < divisor`, which keeps the quotient within a single word.
#[inline(always)]
pub(crate) const fn div_wide(hi: Word, lo: Word, divisor: Word) -> (Word, Word) {
    debug_assert!(hi < divisor);
    let num = ((hi as WideWord) << Word::BITS) | (lo as WideWord);
    let divisor = divisor as WideWord;
    ((num / divisor) as Word, (num % divisor) as Word)
}
