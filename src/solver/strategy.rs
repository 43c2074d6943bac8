//! Guess selection strategies
//!
//! Defines the Strategy trait and concrete implementations.

use crate::core::Digits;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::cell::RefCell;

/// A strategy for selecting the next guess
pub trait Strategy {
    /// Select a guess from the pool given the candidates still consistent with the hints
    ///
    /// Returns `None` if nothing can be selected.
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Digits],
        candidates: &[&'a Digits],
    ) -> Option<&'a Digits>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Guess the first consistent candidate
    First(FirstStrategy),
    /// Minimize the worst-case remaining candidates
    Minimax(MinimaxStrategy),
    /// Random consistent candidate
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Digits],
        candidates: &[&'a Digits],
    ) -> Option<&'a Digits> {
        match self {
            Self::First(s) => s.select_guess(guess_pool, candidates),
            Self::Minimax(s) => s.select_guess(guess_pool, candidates),
            Self::Random(s) => s.select_guess(guess_pool, candidates),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "minimax", "first", "random".
    /// Defaults to minimax if name is unrecognized. `seed` only affects the
    /// random strategy.
    #[must_use]
    pub fn from_name(name: &str, seed: Option<u64>) -> Self {
        match name {
            "first" => Self::First(FirstStrategy),
            "random" => Self::Random(RandomStrategy::new(seed)),
            _ => Self::Minimax(MinimaxStrategy),
        }
    }
}

/// Always guesses the first remaining candidate
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_guess<'a>(
        &self,
        _guess_pool: &'a [Digits],
        candidates: &[&'a Digits],
    ) -> Option<&'a Digits> {
        candidates.first().copied()
    }
}

/// Pure minimax strategy
///
/// Picks any guess from the pool, not just candidates, if it splits them better.
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn select_guess<'a>(
        &self,
        guess_pool: &'a [Digits],
        candidates: &[&'a Digits],
    ) -> Option<&'a Digits> {
        if candidates.is_empty() {
            return None;
        }
        super::minimax::select_best_guess(guess_pool, candidates).map(|(best, _)| best)
    }
}

/// Random strategy
///
/// Picks uniformly among the remaining candidates. A seeded strategy repeats
/// the same picks for the same sequence of candidate lists.
pub struct RandomStrategy {
    rng: RefCell<StdRng>,
}

impl RandomStrategy {
    /// Create a random strategy, seeded from the OS when `seed` is `None`
    #[must_use]
    pub fn new(seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            rng: RefCell::new(rng),
        }
    }
}

impl Strategy for RandomStrategy {
    fn select_guess<'a>(
        &self,
        _guess_pool: &'a [Digits],
        candidates: &[&'a Digits],
    ) -> Option<&'a Digits> {
        use rand::prelude::IndexedRandom;

        candidates.choose(&mut *self.rng.borrow_mut()).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::parse_guess;

    fn setup_test_data() -> (Vec<Digits>, Vec<Digits>) {
        let pool = ["123", "456", "789", "147"]
            .iter()
            .filter_map(|r| parse_guess(r))
            .collect();
        let candidates = ["147", "174", "417"]
            .iter()
            .filter_map(|r| parse_guess(r))
            .collect();
        (pool, candidates)
    }

    #[test]
    fn first_strategy_takes_first_candidate() {
        let (pool, candidates) = setup_test_data();
        let refs: Vec<&Digits> = candidates.iter().collect();

        let guess = FirstStrategy.select_guess(&pool, &refs).unwrap();
        assert_eq!(guess.to_string(), "147");
    }

    #[test]
    fn minimax_strategy_selects_from_pool() {
        let (pool, candidates) = setup_test_data();
        let refs: Vec<&Digits> = candidates.iter().collect();

        let guess = MinimaxStrategy.select_guess(&pool, &refs).unwrap();
        assert!(pool.contains(guess));
    }

    #[test]
    fn minimax_strategy_without_candidates() {
        let (pool, _) = setup_test_data();
        assert!(MinimaxStrategy.select_guess(&pool, &[]).is_none());
    }

    #[test]
    fn random_strategy_selects_from_candidates() {
        let (pool, candidates) = setup_test_data();
        let refs: Vec<&Digits> = candidates.iter().collect();

        let strategy = RandomStrategy::new(None);
        for _ in 0..20 {
            let guess = strategy.select_guess(&pool, &refs).unwrap();
            assert!(candidates.contains(guess));
        }
    }

    #[test]
    fn seeded_random_strategy_is_reproducible() {
        let (pool, candidates) = setup_test_data();
        let refs: Vec<&Digits> = candidates.iter().collect();

        let picks = |strategy: &RandomStrategy| -> Vec<String> {
            (0..20)
                .filter_map(|_| strategy.select_guess(&pool, &refs))
                .map(ToString::to_string)
                .collect()
        };
        let first = picks(&RandomStrategy::new(Some(42)));
        let second = picks(&RandomStrategy::new(Some(42)));

        assert_eq!(first.len(), 20);
        assert_eq!(first, second);
    }

    #[test]
    fn random_strategy_without_candidates() {
        let (pool, _) = setup_test_data();
        assert!(RandomStrategy::new(Some(1)).select_guess(&pool, &[]).is_none());
    }

    #[test]
    fn from_name_defaults_to_minimax() {
        assert!(matches!(StrategyType::from_name("first", None), StrategyType::First(_)));
        assert!(matches!(
            StrategyType::from_name("random", Some(3)),
            StrategyType::Random(_)
        ));
        assert!(matches!(StrategyType::from_name("minimax", None), StrategyType::Minimax(_)));
        assert!(matches!(StrategyType::from_name("bogus", None), StrategyType::Minimax(_)));
    }
}
