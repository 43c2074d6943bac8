//! Game digit representation
//!
//! A Digit is a single value from the legal range used for secrets and guesses.

use std::fmt;

/// Number of digits in a secret and in every guess
pub const DIGITS_LENGTH: usize = 3;

/// Most strikes a single guess can earn
pub const MAX_STRIKES: usize = DIGITS_LENGTH;

/// A single digit in `[Digit::MIN, Digit::MAX]`
///
/// Equality and ordering follow the underlying value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

/// Error type for digits outside the legal range
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DigitError {
    OutOfRange(u8),
}

impl fmt::Display for DigitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "Digit must be between {} and {}, got {value}",
                Digit::MIN,
                Digit::MAX
            ),
        }
    }
}

impl std::error::Error for DigitError {}

// The legal range has to fit in one decimal digit and hold a whole secret.
const _: () = {
    assert!(Digit::MAX <= 9);
    assert!(Digit::MIN >= 1);
    assert!(Digit::MAX > Digit::MIN);
    assert!((Digit::MAX - Digit::MIN + 1) as usize >= DIGITS_LENGTH);
};

impl Digit {
    /// Smallest legal digit
    pub const MIN: u8 = 1;

    /// Largest legal digit
    pub const MAX: u8 = 9;

    /// Create a digit from a value the caller has already range-checked
    ///
    /// # Panics
    /// Panics in debug mode if value is outside `[MIN, MAX]`
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        debug_assert!(
            value >= Self::MIN && value <= Self::MAX,
            "Digit value out of range"
        );
        Self(value)
    }

    /// Get the raw digit value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Interpret a character as a digit
    ///
    /// Returns `None` for anything that is not an ASCII digit in range, so callers
    /// can filter raw text before construction.
    ///
    /// # Examples
    /// ```
    /// use baseball::core::Digit;
    ///
    /// assert_eq!(Digit::from_char('7'), Some(Digit::new(7)));
    /// assert_eq!(Digit::from_char('0'), None);
    /// assert_eq!(Digit::from_char('a'), None);
    /// ```
    #[must_use]
    pub fn from_char(ch: char) -> Option<Self> {
        let value = u8::try_from(ch.to_digit(10)?).ok()?;
        Self::try_from(value).ok()
    }

    /// Every legal digit in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (Self::MIN..=Self::MAX).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = DigitError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Self(value))
        } else {
            Err(DigitError::OutOfRange(value))
        }
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> Self {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digit_from_char_valid() {
        for (ch, value) in ('1'..='9').zip(1u8..) {
            assert_eq!(Digit::from_char(ch).map(Digit::value), Some(value));
        }
    }

    #[test]
    fn digit_from_char_rejects_zero_and_letters() {
        assert_eq!(Digit::from_char('0'), None);
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char(' '), None);
        assert_eq!(Digit::from_char('-'), None);
    }

    #[test]
    fn digit_try_from_range() {
        assert_eq!(Digit::try_from(1), Ok(Digit::new(1)));
        assert_eq!(Digit::try_from(9), Ok(Digit::new(9)));
        assert_eq!(Digit::try_from(0), Err(DigitError::OutOfRange(0)));
        assert_eq!(Digit::try_from(10), Err(DigitError::OutOfRange(10)));
    }

    #[test]
    fn digit_error_display() {
        let err = Digit::try_from(12).unwrap_err();
        assert_eq!(err.to_string(), "Digit must be between 1 and 9, got 12");
    }

    #[test]
    fn digit_ordering_follows_value() {
        assert!(Digit::new(2) < Digit::new(5));
        assert_eq!(Digit::new(4), Digit::new(4));
        assert_eq!(u8::from(Digit::new(6)), 6);
    }

    #[test]
    fn digit_all_covers_range() {
        let all: Vec<u8> = Digit::all().map(Digit::value).collect();
        assert_eq!(all, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn digit_display() {
        assert_eq!(format!("{}", Digit::new(3)), "3");
    }
}
