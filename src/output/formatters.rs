//! Formatting utilities for terminal output

use crate::core::{DIGITS_LENGTH, Hint};

/// Describe a hint in words
///
/// # Examples
/// ```
/// use baseball::core::Hint;
/// use baseball::output::formatters::hint_text;
///
/// assert_eq!(hint_text(Hint::new(1, 2)), "1 strike 2 balls");
/// assert_eq!(hint_text(Hint::new(0, 0)), "nothing");
/// ```
#[must_use]
pub fn hint_text(hint: Hint) -> String {
    if hint.is_consecutive_signal() {
        return "nothing, but the secret digits are consecutive".to_string();
    }
    if hint.is_nothing() {
        return "nothing".to_string();
    }

    let mut parts = Vec::with_capacity(2);
    if hint.strikes() > 0 {
        parts.push(plural(hint.strikes(), "strike"));
    }
    if hint.balls() > 0 {
        parts.push(plural(hint.balls(), "ball"));
    }
    parts.join(" ")
}

fn plural(count: u8, noun: &str) -> String {
    if count == 1 {
        format!("{count} {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

/// Format a hint as one square per digit: strikes, then balls, then misses
#[must_use]
pub fn hint_to_emoji(hint: Hint) -> String {
    if hint.is_consecutive_signal() {
        return "🔢".repeat(DIGITS_LENGTH);
    }

    let strikes = usize::from(hint.strikes());
    let balls = usize::from(hint.balls());
    let misses = DIGITS_LENGTH.saturating_sub(strikes + balls);

    format!(
        "{}{}{}",
        "🟩".repeat(strikes),
        "🟨".repeat(balls),
        "⬜".repeat(misses)
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
