//! Benchmark command
//!
//! Tests solver performance across a sample of secrets.

use crate::core::Digits;
use crate::solver::{Solver, Strategy};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};
use tracing::info;

/// Result of a benchmark run
///
/// Guess statistics cover solved rounds only; rounds that ran out of turns
/// are counted in `failed`.
pub struct BenchmarkResult {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub min_guesses: usize,
    pub max_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub secrets_per_second: f64,
}

/// Run benchmark on a set of secrets, capping each round at `max_turns`
pub fn run_benchmark<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Digits],
    max_turns: Option<usize>,
) -> BenchmarkResult {
    let start = Instant::now();
    let mut solved = 0;
    let mut total_guesses = 0;
    let mut min_guesses: Option<usize> = None;
    let mut max_guesses = 0;
    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();

    for secret in secrets {
        let round = solver.solve(secret, max_turns);
        if !round.is_won() {
            continue;
        }
        let guesses = round.attempts();

        solved += 1;
        total_guesses += guesses;
        min_guesses = Some(min_guesses.map_or(guesses, |min| min.min(guesses)));
        max_guesses = max_guesses.max(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let total_secrets = secrets.len();
    let failed = total_secrets - solved;
    info!(total_secrets, solved, failed, ?duration, "benchmark finished");

    let average_guesses = if solved > 0 {
        total_guesses as f64 / solved as f64
    } else {
        0.0
    };
    let elapsed = duration.as_secs_f64();
    let secrets_per_second = if elapsed > 0.0 {
        total_secrets as f64 / elapsed
    } else {
        0.0
    };

    BenchmarkResult {
        total_secrets,
        solved,
        failed,
        total_guesses,
        average_guesses,
        min_guesses: min_guesses.unwrap_or(0),
        max_guesses,
        distribution,
        duration,
        secrets_per_second,
    }
}
