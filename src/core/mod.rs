//! Core domain types for Baseball
//!
//! The digit value, the distinct-sequence container and the scoring result.
//! All types here are pure values, immutable once built.

mod digit;
mod distinct;
mod hint;

pub use digit::{DIGITS_LENGTH, Digit, DigitError, MAX_STRIKES};
pub use distinct::{DistinctList, Ordinal};
pub use hint::Hint;

/// A secret or a parsed guess
pub type Digits = DistinctList<Digit>;
