//! # Comparison
//!
//! Ordering of two optional `Bignum` operands.
use std::cmp::Ordering;
use std::convert::TryFrom;
use std::fmt;

use crate::data::number_types::bignum::{Bignum, Limb};
use crate::error::Compare;

/// Outcome of comparing two optional operands.
///
/// Not a magnitude. Check for `NullInputError` before reading the value as an ordering, or convert
/// into an `Ordering` with `TryFrom`.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Hash)]
pub enum ComparisonResult {
    /// `a > b`
    Greater,
    /// `a == b`
    Equal,
    /// `a < b`
    Less,
    /// At least one of the operands was absent.
    NullInputError,
}

impl ComparisonResult {
    // Encoding of the C interface of the bignum library.
    const RAW_GREATER: i32 = 1;
    const RAW_EQUAL: i32 = 0;
    const RAW_LESS: i32 = -1;
    const RAW_NULL_INPUT_ERROR: i32 = i32::MIN;

    /// The ordering, if both operands were present.
    pub fn ordering(self) -> Option<Ordering> {
        match self {
            ComparisonResult::Greater => Some(Ordering::Greater),
            ComparisonResult::Equal => Some(Ordering::Equal),
            ComparisonResult::Less => Some(Ordering::Less),
            ComparisonResult::NullInputError => None,
        }
    }

    /// Whether the comparison was refused.
    pub fn is_error(self) -> bool {
        self == ComparisonResult::NullInputError
    }

    /// The result with the operands swapped.
    ///
    /// The error stays an error.
    pub fn reverse(self) -> Self {
        match self {
            ComparisonResult::Greater => ComparisonResult::Less,
            ComparisonResult::Less => ComparisonResult::Greater,
            other => other,
        }
    }

    /// Integer encoding of the C interface: `1`, `0`, `-1` and `i32::MIN` for the error.
    pub const fn to_raw(self) -> i32 {
        match self {
            ComparisonResult::Greater => Self::RAW_GREATER,
            ComparisonResult::Equal => Self::RAW_EQUAL,
            ComparisonResult::Less => Self::RAW_LESS,
            ComparisonResult::NullInputError => Self::RAW_NULL_INPUT_ERROR,
        }
    }

    /// Decode the integer encoding of the C interface.
    ///
    /// Any other integer is not a valid result and gives `None`.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match raw {
            Self::RAW_GREATER => Some(ComparisonResult::Greater),
            Self::RAW_EQUAL => Some(ComparisonResult::Equal),
            Self::RAW_LESS => Some(ComparisonResult::Less),
            Self::RAW_NULL_INPUT_ERROR => Some(ComparisonResult::NullInputError),
            _ => None,
        }
    }
}

impl From<Ordering> for ComparisonResult {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Greater => ComparisonResult::Greater,
            Ordering::Equal => ComparisonResult::Equal,
            Ordering::Less => ComparisonResult::Less,
        }
    }
}

impl TryFrom<ComparisonResult> for Ordering {
    type Error = Compare;

    fn try_from(result: ComparisonResult) -> Result<Self, Self::Error> {
        result.ordering().ok_or(Compare::NullInput)
    }
}

impl fmt::Display for ComparisonResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ComparisonResult::Greater => "greater",
            ComparisonResult::Equal => "equal",
            ComparisonResult::Less => "less",
            ComparisonResult::NullInputError => "null input error",
        })
    }
}

/// Compare two big unsigned integers.
///
/// # Arguments
///
/// * `a`: Left operand, may be absent.
/// * `b`: Right operand, may be absent.
///
/// # Return value
///
/// `NullInputError` if either operand is absent; the other one is then not read. Otherwise the
/// longer operand is the larger one, and operands of equal length are ordered by their most
/// significant differing limb.
///
/// The operands are only read, so any number of threads may compare the same values at once.
pub fn compare(a: Option<&Bignum>, b: Option<&Bignum>) -> ComparisonResult {
    match (a, b) {
        (Some(a), Some(b)) => cmp_limbs(a.limbs(), b.limbs()).into(),
        (a, b) => {
            tracing::debug!(
                left_present = a.is_some(),
                right_present = b.is_some(),
                "refusing to compare with an absent operand"
            );
            ComparisonResult::NullInputError
        },
    }
}

/// Like `compare`, with the error as the `Err` variant.
///
/// # Errors
///
/// `Compare::NullInput` if either operand is absent.
pub fn try_compare(a: Option<&Bignum>, b: Option<&Bignum>) -> Result<Ordering, Compare> {
    Ordering::try_from(compare(a, b))
}

/// Order two limb slices, least significant limb first.
///
/// The longer slice is larger, regardless of its contents. Slices of equal length are compared
/// starting at the most significant limb.
pub(crate) fn cmp_limbs(a: &[Limb], b: &[Limb]) -> Ordering {
    match Ord::cmp(&a.len(), &b.len()) {
        Ordering::Equal => Iterator::cmp(a.iter().rev(), b.iter().rev()),
        other => other,
    }
}
