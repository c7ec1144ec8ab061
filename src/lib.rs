//! # Bignum comparison
//!
//! Three-way ordering of fixed capacity unsigned big integers, stored as a length prefixed array of
//! 64-bit limbs, least significant limb first.
//!
//! The comparison looks at the declared length first and only then at the limbs, from most to
//! least significant. Operands are optional references; a missing operand produces
//! [`ComparisonResult::NullInputError`] rather than an ordering.
//!
//! ```
//! use bignum_cmp::{compare, Bignum, ComparisonResult};
//!
//! let a = Bignum::from_limbs(&[0, 2]).unwrap();
//! let b = Bignum::from_limbs(&[u64::MAX, 1]).unwrap();
//!
//! assert_eq!(compare(Some(&a), Some(&b)), ComparisonResult::Greater);
//! assert_eq!(compare(None, Some(&b)), ComparisonResult::NullInputError);
//! ```
#![warn(missing_docs)]

pub use data::number_types::bignum::{Bignum, CAPACITY, Limb};
pub use data::number_types::bignum::compare::{compare, try_compare, ComparisonResult};

pub mod data;
pub mod error;
