//! Baseball
//!
//! The number-guessing game: a secret of distinct digits, scored guess by
//! guess in strikes and balls until every digit is in place.
//!
//! # Quick Start
//!
//! ```rust
//! use baseball::game::{parse_guess, score};
//!
//! let secret = parse_guess("123").unwrap();
//! let guess = parse_guess("321").unwrap();
//!
//! let hint = score(&secret, &guess);
//! assert_eq!((hint.strikes(), hint.balls()), (1, 2));
//! ```

// Core domain types
pub mod core;

// Secret generation, parsing and scoring
pub mod game;

// Auto-player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing setup for the binary
pub mod logging;
