//! Enumeration of every possible secret

use crate::core::{DIGITS_LENGTH, Digit, Digits, DistinctList};

/// Every sequence of `DIGITS_LENGTH` distinct legal digits, in ascending order
///
/// # Examples
/// ```
/// use baseball::solver::all_secrets;
///
/// let secrets = all_secrets();
/// assert_eq!(secrets.len(), 9 * 8 * 7);
/// assert_eq!(secrets[0].to_string(), "123");
/// ```
#[must_use]
pub fn all_secrets() -> Vec<Digits> {
    let mut secrets = Vec::new();
    let mut prefix = Vec::with_capacity(DIGITS_LENGTH);
    extend(&mut prefix, &mut secrets);
    secrets
}

fn extend(prefix: &mut Vec<Digit>, out: &mut Vec<Digits>) {
    if prefix.len() == DIGITS_LENGTH {
        out.push(DistinctList::of(prefix.iter().copied()));
        return;
    }
    for digit in Digit::all() {
        if !prefix.contains(&digit) {
            prefix.push(digit);
            extend(prefix, out);
            prefix.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse_guess;
    use rustc_hash::FxHashSet;

    #[test]
    fn count_matches_permutations() {
        assert_eq!(all_secrets().len(), 504);
    }

    #[test]
    fn secrets_are_unique_and_full() {
        let secrets = all_secrets();
        assert!(secrets.iter().all(|s| s.len() == DIGITS_LENGTH));
        let unique: FxHashSet<&Digits> = secrets.iter().collect();
        assert_eq!(unique.len(), secrets.len());
    }

    #[test]
    fn ordering_is_ascending() {
        let secrets = all_secrets();
        assert_eq!(secrets.first(), parse_guess("123").as_ref());
        assert_eq!(secrets.get(1), parse_guess("124").as_ref());
        assert_eq!(secrets.last(), parse_guess("987").as_ref());
    }

    #[test]
    fn every_secret_parses_back() {
        for secret in all_secrets() {
            assert_eq!(parse_guess(&secret.to_string()), Some(secret));
        }
    }
}
