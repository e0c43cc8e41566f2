//! [`Natural`] comparisons.
//!
//! All comparisons are variable-time: canonical limb vectors of different lengths
//! are ordered by length before any limb is inspected.

use super::Natural;
use core::cmp::Ordering;

impl Natural {
    /// Returns the Ordering between `self` and `rhs` in variable time.
    #[must_use]
    pub fn cmp_vartime(&self, rhs: &Self) -> Ordering {
        self.limbs
            .len()
            .cmp(&rhs.limbs.len())
            .then_with(|| self.limbs.iter().rev().cmp(rhs.limbs.iter().rev()))
    }
}

impl Ord for Natural {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_vartime(other)
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::Natural;
    use core::cmp::Ordering;

    #[test]
    fn cmp() {
        let a = Natural::zero();
        let b = Natural::one();
        let c = Natural::from(u128::MAX);

        assert_eq!(a.cmp(&b), Ordering::Less);
        assert_eq!(a.cmp(&c), Ordering::Less);
        assert_eq!(b.cmp(&c), Ordering::Less);

        assert_eq!(a.cmp(&a), Ordering::Equal);
        assert_eq!(b.cmp(&b), Ordering::Equal);
        assert_eq!(c.cmp(&c), Ordering::Equal);

        assert_eq!(b.cmp(&a), Ordering::Greater);
        assert_eq!(c.cmp(&a), Ordering::Greater);
        assert_eq!(c.cmp(&b), Ordering::Greater);
    }

    #[test]
    fn cmp_same_length() {
        let a = Natural::from((1u128 << 127) | 1);
        let b = Natural::from((1u128 << 127) | 2);
        assert!(a < b);
        assert!(b > a);
        assert_eq!(a.max(b.clone()), b);
    }
}
