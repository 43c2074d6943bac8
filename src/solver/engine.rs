//! Auto-player that narrows down the secret from hints

use super::strategy::Strategy;
use crate::core::{Digits, Hint};
use crate::game::{Round, score};
use tracing::debug;

/// Baseball solver
///
/// Keeps every secret consistent with the hints so far and lets a strategy
/// pick the next guess.
pub struct Solver<'a, S: Strategy> {
    strategy: S,
    secrets: &'a [Digits],
    opening: Option<&'a Digits>,
}

impl<'a, S: Strategy> Solver<'a, S> {
    /// Create a solver over the given pool of possible secrets
    ///
    /// The opening guess depends only on the pool, so it is chosen once here.
    pub fn new(strategy: S, secrets: &'a [Digits]) -> Self {
        let all: Vec<&Digits> = secrets.iter().collect();
        let opening = strategy.select_guess(secrets, &all);
        debug!(opening = ?opening.map(ToString::to_string), "solver ready");
        Self {
            strategy,
            secrets,
            opening,
        }
    }

    /// Get the next guess given previous guesses and hints
    ///
    /// Returns `None` if no secret is consistent with the history.
    pub fn next_guess(&self, history: &[(Digits, Hint)]) -> Option<&'a Digits> {
        if history.is_empty() {
            return self.opening;
        }

        let candidates = self.filter_candidates(history);

        match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => self.strategy.select_guess(self.secrets, &candidates),
        }
    }

    /// Secrets that would have produced every observed hint
    fn filter_candidates(&self, history: &[(Digits, Hint)]) -> Vec<&'a Digits> {
        self.secrets
            .iter()
            .filter(|&candidate| {
                history
                    .iter()
                    .all(|(guess, observed)| score(candidate, guess) == *observed)
            })
            .collect()
    }

    /// Count how many candidates remain given the history
    pub fn count_candidates(&self, history: &[(Digits, Hint)]) -> usize {
        self.filter_candidates(history).len()
    }

    /// Get the current candidates
    pub fn get_candidates(&self, history: &[(Digits, Hint)]) -> Vec<&'a Digits> {
        self.filter_candidates(history)
    }

    /// Play a round against `secret` until it is found or `max_turns` runs out
    pub fn solve(&self, secret: &Digits, max_turns: Option<usize>) -> Round {
        let mut round = Round::with_secret(secret.clone(), max_turns);

        while !round.is_over() {
            let Some(guess) = self.next_guess(round.history()) else {
                break;
            };
            round.submit(guess.clone());
        }

        round
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse_guess;
    use crate::solver::all_secrets;
    use crate::solver::strategy::{FirstStrategy, MinimaxStrategy, RandomStrategy};

    #[test]
    fn opening_comes_from_pool() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);
        assert_eq!(solver.next_guess(&[]), secrets.first());
    }

    #[test]
    fn count_candidates_starts_full() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);
        assert_eq!(solver.count_candidates(&[]), 504);
    }

    #[test]
    fn filter_keeps_secret() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);
        let secret = parse_guess("862").unwrap();

        let guess = parse_guess("123").unwrap();
        let hint = score(&secret, &guess);
        let history = vec![(guess, hint)];

        let candidates = solver.get_candidates(&history);
        assert!(candidates.iter().any(|&c| *c == secret));
        assert!(candidates.len() < secrets.len());
    }

    #[test]
    fn impossible_history_yields_none() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);

        // No secret scores 123 as both a full match and a miss
        let guess = parse_guess("123").unwrap();
        let history = vec![(guess.clone(), Hint::OUT), (guess, Hint::new(0, 0))];
        assert_eq!(solver.next_guess(&history), None);
    }

    #[test]
    fn single_candidate_is_guessed() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);
        let guess = parse_guess("529").unwrap();
        let history = vec![(guess.clone(), Hint::OUT)];
        assert_eq!(solver.next_guess(&history), Some(&guess));
    }

    #[test]
    fn solve_finds_secret() {
        let secrets = all_secrets();
        let solver = Solver::new(MinimaxStrategy, &secrets);
        for raw in ["123", "987", "415", "369"] {
            let secret = parse_guess(raw).unwrap();
            let round = solver.solve(&secret, None);
            assert!(round.is_won(), "failed on {raw}");
            assert_eq!(round.history().last().map(|(g, _)| g), Some(&secret));
        }
    }

    #[test]
    fn solve_respects_turn_limit() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);
        let secret = parse_guess("987").unwrap();
        let round = solver.solve(&secret, Some(1));
        assert!(!round.is_won());
        assert_eq!(round.attempts(), 1);
    }

    #[test]
    fn seeded_random_solver_replays_the_same_game() {
        let secrets = all_secrets();
        let secret = parse_guess("746").unwrap();

        let first = Solver::new(RandomStrategy::new(Some(9)), &secrets).solve(&secret, None);
        let second = Solver::new(RandomStrategy::new(Some(9)), &secrets).solve(&secret, None);

        assert!(first.is_won());
        assert_eq!(first.history(), second.history());
    }
}
