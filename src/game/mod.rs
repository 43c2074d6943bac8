//! Game engine and round state
//!
//! The engine functions are pure apart from secret generation, which draws
//! from the caller's random source once per round.

mod engine;
mod round;

pub use engine::{generate_secret, parse_guess, score};
pub use round::{Pitch, Round, RoundState};
