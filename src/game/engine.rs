//! Secret generation, guess parsing and strike/ball scoring

use crate::core::{DIGITS_LENGTH, Digit, Digits, DistinctList, Hint};
use rand::Rng;
use rand::seq::SliceRandom;
use rustc_hash::FxHashSet;
use std::hash::Hash;
use tracing::{debug, trace};

/// Pick a new secret: the legal range shuffled, first `DIGITS_LENGTH` kept
///
/// The shuffled range has no duplicates and is at least `DIGITS_LENGTH` long,
/// so the result is always full size.
pub fn generate_secret<R: Rng + ?Sized>(rng: &mut R) -> Digits {
    let mut pool: Vec<Digit> = Digit::all().collect();
    pool.shuffle(rng);
    let secret = DistinctList::with_limit(pool, DIGITS_LENGTH);

    debug_assert_eq!(secret.len(), DIGITS_LENGTH);
    debug!(len = secret.len(), "generated secret");
    secret
}

/// Parse raw input into a guess
///
/// Returns `Some` only when `raw` is exactly `DIGITS_LENGTH` characters, every
/// one a legal digit, and no digit repeats. Invalid characters are filtered
/// before the list is built and duplicates collapse inside it, so either way
/// the list comes out short and the input is rejected.
///
/// # Examples
/// ```
/// use baseball::game::parse_guess;
///
/// assert_eq!(parse_guess("123").map(|g| g.len()), Some(3));
/// assert!(parse_guess("112").is_none());
/// assert!(parse_guess("12").is_none());
/// assert!(parse_guess("1a2").is_none());
/// ```
#[must_use]
pub fn parse_guess(raw: &str) -> Option<Digits> {
    if raw.chars().count() != DIGITS_LENGTH {
        trace!(raw, "rejected guess: wrong length");
        return None;
    }

    let digits = DistinctList::of(raw.chars().filter_map(Digit::from_char));
    if digits.len() == DIGITS_LENGTH {
        Some(digits)
    } else {
        trace!(raw, "rejected guess: invalid or repeated digit");
        None
    }
}

/// Score `guess` against `secret`
///
/// Strikes are positional matches. Value matches are found by counting the
/// distinct digits across both lists: every shared digit shrinks that union by
/// one. When nothing matches and the secret is a consecutive run, balls
/// carries [`Hint::CONSECUTIVE_SIGNAL`] instead of zero.
///
/// # Panics
/// Panics if either list does not hold exactly `DIGITS_LENGTH` digits.
///
/// # Examples
/// ```
/// use baseball::game::{parse_guess, score};
///
/// let secret = parse_guess("123").unwrap();
/// let guess = parse_guess("321").unwrap();
/// let hint = score(&secret, &guess);
/// assert_eq!((hint.strikes(), hint.balls()), (1, 2));
/// ```
#[must_use]
pub fn score(secret: &Digits, guess: &Digits) -> Hint {
    assert_eq!(secret.len(), DIGITS_LENGTH, "secret must be full length");
    assert_eq!(guess.len(), DIGITS_LENGTH, "guess must be full length");

    let strikes = (0..DIGITS_LENGTH)
        .filter(|&i| secret.get(i) == guess.get(i))
        .count();
    let uniques = count_distinct(secret.concat(guess));
    let duplicates = DIGITS_LENGTH * 2 - uniques;
    let mut balls = duplicates - strikes;

    if strikes == 0 && balls == 0 && secret.is_consecutive() {
        balls = usize::from(Hint::CONSECUTIVE_SIGNAL);
    }

    let hint = Hint::new(strikes as u8, balls as u8);
    trace!(%hint, "scored guess");
    hint
}

/// Count distinct values in a stream
fn count_distinct<I>(values: I) -> usize
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    values.into_iter().collect::<FxHashSet<_>>().len()
}
