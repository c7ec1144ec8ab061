//! # Fixed capacity big integers
//!
//! Storage layout shared with the rest of the bignum library: `CAPACITY` limbs, least significant
//! first, followed by the number of limbs in use.
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use crate::data::number_types::bignum::compare::cmp_limbs;
use crate::error::Capacity;

pub mod compare;
mod macros;

/// A single word of a big integer.
pub type Limb = u64;

/// Maximum number of limbs a `Bignum` can hold.
pub const CAPACITY: usize = 32;

/// A big unsigned integer of at most `CAPACITY` limbs.
///
/// Only the first `len` limbs are significant. The storage behind them is never read and may hold
/// anything.
///
/// Values are not normalized: a length that counts leading zero limbs is kept as given, and such a
/// value is longer (and so larger) than the same number without those limbs.
#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct Bignum {
    limbs: [Limb; CAPACITY],
    len: u32,
}

impl Bignum {
    /// The value zero, with no significant limbs.
    pub const fn zero() -> Self {
        Self { limbs: [0; CAPACITY], len: 0 }
    }

    /// Create a value from its significant limbs, least significant first.
    ///
    /// The remaining storage is zeroed. Leading zero limbs are not stripped.
    ///
    /// # Errors
    ///
    /// If more than `CAPACITY` limbs are given.
    pub fn from_limbs(limbs: &[Limb]) -> Result<Self, Capacity> {
        if limbs.len() > CAPACITY {
            return Err(Capacity { length: limbs.len() });
        }

        let mut value = Self::zero();
        value.limbs[..limbs.len()].copy_from_slice(limbs);
        value.len = limbs.len() as u32;

        Ok(value)
    }

    /// Create a value from the raw storage layout.
    ///
    /// Limbs at indices `len` and beyond are kept but never read.
    ///
    /// # Errors
    ///
    /// If `len` exceeds `CAPACITY`.
    pub fn from_raw_parts(limbs: [Limb; CAPACITY], len: u32) -> Result<Self, Capacity> {
        if len as usize > CAPACITY {
            return Err(Capacity { length: len as usize });
        }

        Ok(Self { limbs, len })
    }

    /// The raw storage layout, including limbs beyond the length.
    pub fn into_raw_parts(self) -> ([Limb; CAPACITY], u32) {
        (self.limbs, self.len)
    }

    /// Number of significant limbs.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Whether there are no significant limbs, which represents zero.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The significant limbs, least significant first.
    pub fn limbs(&self) -> &[Limb] {
        debug_assert!(self.len() <= CAPACITY);

        &self.limbs[..self.len()]
    }

    /// Whether the most significant limb in use is nonzero (or there are none).
    pub fn is_normalized(&self) -> bool {
        self.limbs().last() != Some(&0)
    }
}

impl Default for Bignum {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Bignum {
    fn eq(&self, other: &Self) -> bool {
        self.limbs() == other.limbs()
    }
}
impl Eq for Bignum {}

impl Hash for Bignum {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.limbs().hash(state);
    }
}

impl PartialOrd for Bignum {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bignum {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_limbs(self.limbs(), other.limbs())
    }
}
