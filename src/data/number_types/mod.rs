//! # Number types
//!
//! Fixed capacity unsigned big integers and their ordering.
pub mod bignum;
