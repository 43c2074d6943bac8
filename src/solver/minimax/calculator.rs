//! Worst-case partition size for a guess
//!
//! Candidates are grouped by the hint they would give for a guess; the largest
//! group is what remains if the hint is as unhelpful as possible.

use crate::core::{Digits, Hint};
use crate::game::score;
use rustc_hash::FxHashMap;

/// Calculate the maximum remaining candidates for a guess
///
/// # Examples
/// ```
/// use baseball::game::parse_guess;
/// use baseball::solver::minimax::calculate_max_remaining;
///
/// let guess = parse_guess("123").unwrap();
/// let candidates = vec![parse_guess("123").unwrap(), parse_guess("456").unwrap()];
/// let candidate_refs: Vec<_> = candidates.iter().collect();
///
/// assert_eq!(calculate_max_remaining(&guess, &candidate_refs), 1);
/// ```
#[must_use]
pub fn calculate_max_remaining(guess: &Digits, candidates: &[&Digits]) -> usize {
    group_by_hint(guess, candidates)
        .values()
        .max()
        .copied()
        .unwrap_or(0)
}

/// Group candidates by the hint each would give for `guess`
///
/// Each candidate is treated as the secret.
#[must_use]
pub fn group_by_hint(guess: &Digits, candidates: &[&Digits]) -> FxHashMap<Hint, usize> {
    let mut counts = FxHashMap::default();

    for &candidate in candidates {
        let hint = score(candidate, guess);
        *counts.entry(hint).or_insert(0) += 1;
    }

    counts
}
