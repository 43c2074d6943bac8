//! Baseball solving algorithms
//!
//! An auto-player used by the solve, benchmark and test-all commands.

mod candidates;
mod engine;
pub mod minimax;
pub mod strategy;

pub use candidates::all_secrets;
pub use engine::Solver;
pub use strategy::{FirstStrategy, MinimaxStrategy, RandomStrategy, Strategy, StrategyType};
