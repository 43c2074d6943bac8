//! Secret solving command
//!
//! Lets the solver find a specific secret and records the path it took.

use super::score::parse_digits;
use crate::core::Hint;
use crate::solver::{Solver, Strategy};
use anyhow::Result;

/// Configuration for solving a secret
pub struct SolveConfig {
    pub secret: String,
    pub max_turns: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(secret: String) -> Self {
        Self {
            secret,
            max_turns: None,
        }
    }
}

/// Result of solving a secret
pub struct SolveResult {
    pub success: bool,
    pub guesses: Vec<GuessStep>,
    pub secret: String,
}

/// A single guess step in the solution
pub struct GuessStep {
    pub guess: String,
    pub hint: Hint,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Solve a specific secret using the given solver
///
/// # Errors
///
/// Returns an error if the secret is not a valid sequence.
pub fn solve_secret<S: Strategy>(config: SolveConfig, solver: &Solver<S>) -> Result<SolveResult> {
    let secret = parse_digits(&config.secret, "secret")?;
    let round = solver.solve(&secret, config.max_turns);

    let history = round.history();
    let guesses = history
        .iter()
        .enumerate()
        .map(|(i, (guess, hint))| GuessStep {
            guess: guess.to_string(),
            hint: *hint,
            candidates_before: solver.count_candidates(&history[..i]),
            candidates_after: solver.count_candidates(&history[..=i]),
        })
        .collect();

    Ok(SolveResult {
        success: round.is_won(),
        guesses,
        secret: secret.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{FirstStrategy, MinimaxStrategy, all_secrets};

    #[test]
    fn solve_secret_succeeds() {
        let secrets = all_secrets();
        let solver = Solver::new(MinimaxStrategy, &secrets);

        let result = solve_secret(SolveConfig::new("742".to_string()), &solver).unwrap();

        assert!(result.success);
        assert_eq!(result.secret, "742");
        assert_eq!(result.guesses.last().unwrap().guess, "742");
        assert!(result.guesses.last().unwrap().hint.is_out());
    }

    #[test]
    fn solve_records_history() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);

        let result = solve_secret(SolveConfig::new("968".to_string()), &solver).unwrap();

        assert_eq!(result.guesses[0].candidates_before, 504);
        for step in &result.guesses {
            assert!(step.candidates_after <= step.candidates_before);
            assert!(step.candidates_after >= 1);
        }
    }

    #[test]
    fn solve_invalid_secret_returns_error() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);

        assert!(solve_secret(SolveConfig::new("099".to_string()), &solver).is_err());
    }

    #[test]
    fn solve_with_turn_limit() {
        let secrets = all_secrets();
        let solver = Solver::new(FirstStrategy, &secrets);
        let mut config = SolveConfig::new("987".to_string());
        config.max_turns = Some(2);

        let result = solve_secret(config, &solver).unwrap();

        assert!(!result.success);
        assert_eq!(result.guesses.len(), 2);
    }
}
