//! Pure Rust integer roots of arbitrary-precision natural numbers.
//!
//! # About
//! This library computes the floor `r`-th root of a natural number: the unique `x` such that
//! `x^r <= n < (x + 1)^r`. The search is a plain bisection over candidate roots, so it needs
//! nothing from the number type beyond addition, subtraction, halving, exponentiation, and
//! comparison. Those capabilities are captured by the [`NaturalNumber`] trait.
//!
//! The crate ships its own heap-allocated, arbitrary-precision [`Natural`] type. With the
//! `num-bigint` feature enabled, [`num_bigint::BigUint`] can be used as well.
//!
//! # Usage
//! ```
//! use natural_root::{Natural, floor_root};
//!
//! let n: Natural = "170141183460469231731687303715884105727".parse().unwrap();
//! assert_eq!(floor_root(&n, 6), Natural::from(2353973u32));
//! assert_eq!(n.floor_root(2).to_decimal(), "13043817825332782212");
//! ```
//!
//! # Variable time
//! Every operation in this crate is variable time. It is not suitable for use on secret values.

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![forbid(unsafe_code, clippy::unwrap_used)]
#![warn(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unused_qualifications
)]

extern crate alloc;

mod limb;
mod natural;
mod primitives;
mod root;
mod traits;
mod word;

pub use crate::{
    limb::{Limb, nlimbs},
    natural::{Natural, encoding::ParseNaturalError},
    root::{checked_root, floor_root, root_assign},
    traits::NaturalNumber,
    word::{WideWord, Word},
};

#[cfg(feature = "num-bigint")]
pub use num_bigint;

#[cfg(feature = "rand")]
pub use rand_core;

#[cfg(feature = "zeroize")]
pub use zeroize;
