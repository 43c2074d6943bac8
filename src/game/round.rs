//! A single game round
//!
//! Holds the secret for the round's lifetime and walks the
//! awaiting-input / scored / won cycle as raw guesses come in.

use super::engine::{generate_secret, parse_guess, score};
use crate::core::{Digits, Hint};
use rand::Rng;
use tracing::{debug, info};

/// Where the round stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    AwaitingInput,
    Won,
    OutOfAttempts,
}

/// Result of offering one raw guess to the round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pitch {
    /// Input did not parse; the round is still waiting
    Rejected,
    /// Input was scored and the round continues
    Scored(Hint),
    /// Input matched the secret
    Won(Hint),
    /// Input was scored and used up the last allowed attempt
    OutOfAttempts(Hint),
    /// The round was already over
    Finished,
}

/// One secret and the guesses made against it
#[derive(Debug, Clone)]
pub struct Round {
    secret: Digits,
    history: Vec<(Digits, Hint)>,
    rejected: usize,
    max_attempts: Option<usize>,
    state: RoundState,
}

impl Round {
    /// Start a round with a freshly generated secret
    pub fn new<R: Rng + ?Sized>(rng: &mut R, max_attempts: Option<usize>) -> Self {
        Self::with_secret(generate_secret(rng), max_attempts)
    }

    /// Start a round against a known secret
    ///
    /// # Panics
    /// Panics if `max_attempts` is `Some(0)`
    #[must_use]
    pub fn with_secret(secret: Digits, max_attempts: Option<usize>) -> Self {
        assert_ne!(max_attempts, Some(0), "a round needs at least one attempt");
        Self {
            secret,
            history: Vec::new(),
            rejected: 0,
            max_attempts,
            state: RoundState::AwaitingInput,
        }
    }

    /// Offer raw input to the round
    ///
    /// # Examples
    /// ```
    /// use baseball::game::{Pitch, Round, parse_guess};
    ///
    /// let mut round = Round::with_secret(parse_guess("472").unwrap(), None);
    /// assert_eq!(round.pitch("44"), Pitch::Rejected);
    /// assert!(matches!(round.pitch("427"), Pitch::Scored(_)));
    /// assert!(matches!(round.pitch("472"), Pitch::Won(_)));
    /// assert!(round.is_over());
    /// ```
    pub fn pitch(&mut self, raw: &str) -> Pitch {
        if self.is_over() {
            return Pitch::Finished;
        }

        let Some(guess) = parse_guess(raw) else {
            self.rejected += 1;
            debug!(rejected = self.rejected, "guess rejected");
            return Pitch::Rejected;
        };

        self.submit(guess)
    }

    /// Score an already parsed guess
    ///
    /// # Panics
    /// Panics if `guess` is not full length
    pub fn submit(&mut self, guess: Digits) -> Pitch {
        if self.is_over() {
            return Pitch::Finished;
        }

        let hint = score(&self.secret, &guess);
        self.history.push((guess, hint));
        debug!(attempt = self.history.len(), %hint, "guess scored");

        if hint.is_out() {
            self.state = RoundState::Won;
            info!(attempts = self.history.len(), "round won");
            Pitch::Won(hint)
        } else if self
            .max_attempts
            .is_some_and(|max| self.history.len() >= max)
        {
            self.state = RoundState::OutOfAttempts;
            info!(attempts = self.history.len(), "round lost: out of attempts");
            Pitch::OutOfAttempts(hint)
        } else {
            Pitch::Scored(hint)
        }
    }

    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state != RoundState::AwaitingInput
    }

    #[must_use]
    pub fn is_won(&self) -> bool {
        self.state == RoundState::Won
    }

    /// Scored guesses so far, oldest first
    #[must_use]
    pub fn history(&self) -> &[(Digits, Hint)] {
        &self.history
    }

    /// Number of scored guesses
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.history.len()
    }

    /// Number of inputs that failed to parse
    #[must_use]
    pub const fn rejected(&self) -> usize {
        self.rejected
    }

    /// Attempts left before the round is lost, if capped
    #[must_use]
    pub fn remaining_attempts(&self) -> Option<usize> {
        self.max_attempts
            .map(|max| max.saturating_sub(self.history.len()))
    }

    /// The secret, for revealing once the round is over
    #[must_use]
    pub const fn secret(&self) -> &Digits {
        &self.secret
    }
}
