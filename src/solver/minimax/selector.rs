//! Minimax-based guess selection strategy

use super::calculator::calculate_max_remaining;
use crate::core::Digits;

/// Select best guess by minimizing worst-case remaining candidates
///
/// Ties go to guesses that could themselves be the secret, then to the
/// earliest guess in the pool. Returns the guess and its worst case, or `None`
/// if the pool is empty.
#[must_use]
pub fn select_best_guess<'a>(
    guess_pool: &'a [Digits],
    candidates: &[&Digits],
) -> Option<(&'a Digits, usize)> {
    guess_pool
        .iter()
        .enumerate()
        .map(|(index, guess)| {
            let max_remaining = calculate_max_remaining(guess, candidates);
            let is_candidate = candidates.iter().any(|&c| c == guess);
            (index, guess, max_remaining, is_candidate)
        })
        .min_by_key(|&(index, _, max, is_candidate)| (max, !is_candidate, index))
        .map(|(_, guess, max, _)| (guess, max))
}
