//! Minimax guess selection
//!
//! Picks the guess that leaves the fewest candidates in the worst case.

mod calculator;
mod selector;

pub use calculator::{calculate_max_remaining, group_by_hint};
pub use selector::select_best_guess;
