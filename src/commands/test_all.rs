//! Test all secrets - comprehensive solver evaluation
//!
//! Runs the solver against every possible secret and generates statistics.

use crate::core::Digits;
use crate::output::formatters::create_progress_bar;
use crate::solver::{Solver, Strategy};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result from testing a single secret
#[derive(Debug, Clone)]
pub struct SecretTestResult {
    pub secret: String,
    pub num_guesses: usize,
    pub success: bool,
}

/// Statistics from testing all secrets
#[derive(Debug)]
pub struct TestAllStatistics {
    pub total_secrets: usize,
    pub solved: usize,
    pub failed: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
    pub total_time: Duration,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub hardest_secrets: Vec<(String, usize)>,
}

/// Run solver on all secrets (or the first `limit` of them)
///
/// Secrets are solved one after another; `max_turns` caps each round.
pub fn run_test_all<S: Strategy>(
    solver: &Solver<S>,
    secrets: &[Digits],
    limit: Option<usize>,
    max_turns: Option<usize>,
    progress: &ProgressBar,
) -> TestAllStatistics {
    let test_secrets = &secrets[..limit.unwrap_or(secrets.len()).min(secrets.len())];
    progress.set_length(test_secrets.len() as u64);

    let start = Instant::now();
    let results: Vec<SecretTestResult> = test_secrets
        .iter()
        .map(|secret| {
            let round = solver.solve(secret, max_turns);
            progress.inc(1);
            SecretTestResult {
                secret: secret.to_string(),
                num_guesses: round.attempts(),
                success: round.is_won(),
            }
        })
        .collect();
    progress.finish_with_message("Complete!");
    let total_time = start.elapsed();

    summarize(results, total_time)
}

/// Progress bar styled for terminal runs
#[must_use]
pub fn terminal_progress_bar() -> ProgressBar {
    let bar = ProgressBar::new(0);
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        bar.set_style(style.progress_chars("█▓▒░"));
    }
    bar
}

fn summarize(results: Vec<SecretTestResult>, total_time: Duration) -> TestAllStatistics {
    let solved: Vec<&SecretTestResult> = results.iter().filter(|r| r.success).collect();
    let solved_count = solved.len();

    let mut guess_distribution: FxHashMap<usize, usize> = FxHashMap::default();
    for r in &solved {
        *guess_distribution.entry(r.num_guesses).or_insert(0) += 1;
    }

    let total_guesses: usize = solved.iter().map(|r| r.num_guesses).sum();
    let average_guesses = if solved_count > 0 {
        total_guesses as f64 / solved_count as f64
    } else {
        0.0
    };

    let max_guesses = solved.iter().map(|r| r.num_guesses).max().unwrap_or(0);
    let min_guesses = solved.iter().map(|r| r.num_guesses).min().unwrap_or(0);

    let mut hardest_secrets: Vec<(String, usize)> = solved
        .iter()
        .filter(|r| r.num_guesses == max_guesses)
        .map(|r| (r.secret.clone(), r.num_guesses))
        .collect();
    hardest_secrets.sort();
    hardest_secrets.truncate(10);

    TestAllStatistics {
        total_secrets: results.len(),
        solved: solved_count,
        failed: results.len() - solved_count,
        guess_distribution,
        total_time,
        average_guesses,
        max_guesses,
        min_guesses,
        hardest_secrets,
    }
}

/// Print test-all statistics
pub fn print_test_all_statistics(stats: &TestAllStatistics) {
    println!("\n{}", "═".repeat(60));
    println!(" Test Results ");
    println!("{}", "═".repeat(60));

    println!("\n📊 {}", "Overall Performance".bright_cyan().bold());
    println!("  Total secrets tested: {}", stats.total_secrets);
    println!(
        "  Successfully solved:  {} {}",
        stats.solved,
        format!(
            "({:.1}%)",
            stats.solved as f64 / stats.total_secrets.max(1) as f64 * 100.0
        )
        .green()
    );
    if stats.failed > 0 {
        println!(
            "  Failed to solve:      {} {}",
            stats.failed,
            format!(
                "({:.1}%)",
                stats.failed as f64 / stats.total_secrets.max(1) as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "  Average guesses:      {}",
        format!("{:.3}", stats.average_guesses)
            .bright_yellow()
            .bold()
    );
    println!(
        "  Best / worst:         {} / {}",
        stats.min_guesses, stats.max_guesses
    );
    println!(
        "  Total time:           {:.2}s",
        stats.total_time.as_secs_f64()
    );

    println!("\n📈 {}", "Guess Distribution".bright_cyan().bold());
    let max_count = stats.guess_distribution.values().copied().max().unwrap_or(1);
    for guesses in stats.min_guesses..=stats.max_guesses {
        let count = stats.guess_distribution.get(&guesses).copied().unwrap_or(0);
        let percentage = count as f64 / stats.solved.max(1) as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!(
            "  {guesses:2} guesses: {} {count:4} ({percentage:5.1}%)",
            bar.green()
        );
    }

    if !stats.hardest_secrets.is_empty() {
        println!("\n😰 {}", "Hardest Secrets".yellow().bold());
        for (secret, guesses) in stats.hardest_secrets.iter().take(5) {
            println!("  {} ({guesses} guesses)", secret.yellow());
        }
    }
}
