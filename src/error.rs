//! # Errors
//!
//! Failures when comparing or building big integers.
use std::error::Error;
use std::fmt;

use crate::data::number_types::bignum::CAPACITY;

/// A comparison could not produce an ordering.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub enum Compare {
    /// One or both operands were absent.
    NullInput,
}

impl fmt::Display for Compare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compare::NullInput => f.write_str("one or both operands of the comparison are absent"),
        }
    }
}

impl Error for Compare {}

/// More limbs were requested than a `Bignum` can hold.
#[derive(Debug, Eq, PartialEq, Copy, Clone)]
pub struct Capacity {
    /// Number of limbs that was requested.
    pub length: usize,
}

impl fmt::Display for Capacity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "length {} exceeds the capacity of {} limbs", self.length, CAPACITY)
    }
}

impl Error for Capacity {}
