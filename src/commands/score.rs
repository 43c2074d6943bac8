//! One-shot scoring command
//!
//! Scores a single guess against an explicit secret.

use crate::core::{DIGITS_LENGTH, Digit, Digits, Hint};
use crate::game::{parse_guess, score};
use anyhow::{Result, anyhow};

/// Parse `raw` as a full sequence, naming `what` in the error
///
/// # Errors
///
/// Returns an error if `raw` is not `DIGITS_LENGTH` distinct digits in range.
pub fn parse_digits(raw: &str, what: &str) -> Result<Digits> {
    parse_guess(raw.trim()).ok_or_else(|| {
        anyhow!(
            "Invalid {what} '{raw}': expected {DIGITS_LENGTH} distinct digits from {} to {}",
            Digit::MIN,
            Digit::MAX
        )
    })
}

/// Score `guess` against `secret`, both given as raw text
///
/// # Errors
///
/// Returns an error if either input is not a valid sequence.
pub fn score_guess(secret: &str, guess: &str) -> Result<Hint> {
    let secret = parse_digits(secret, "secret")?;
    let guess = parse_digits(guess, "guess")?;
    Ok(score(&secret, &guess))
}
