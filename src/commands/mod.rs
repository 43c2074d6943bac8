//! Command implementations

pub mod benchmark;
pub mod score;
pub mod simple;
pub mod solve;
pub mod test_all;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use score::{parse_digits, score_guess};
pub use simple::{GameConfig, SessionSummary, run_simple};
pub use solve::{SolveConfig, SolveResult, solve_secret};
pub use test_all::{
    TestAllStatistics, print_test_all_statistics, run_test_all, terminal_progress_bar,
};
