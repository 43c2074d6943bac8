//! Simple console game mode
//!
//! Line-based play: one guess per line, a hint after each, until the secret
//! is found. Input and output are passed in so the loop runs the same against
//! a terminal or a buffer.

use crate::core::{DIGITS_LENGTH, Digit};
use crate::game::{Pitch, Round};
use crate::output::formatters::hint_text;
use anyhow::Result;
use colored::Colorize;
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::info;

/// Settings shared by every round in a session
#[derive(Debug, Clone, Copy, Default)]
pub struct GameConfig {
    /// Scored guesses allowed per round; unlimited when `None`
    pub max_attempts: Option<usize>,
    /// Seed for secrets and the random solver strategy; OS entropy when `None`
    pub seed: Option<u64>,
}

/// What happened over a console session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub rounds_played: usize,
    pub rounds_won: usize,
    /// Scored guesses per finished round, in play order
    pub attempts: Vec<usize>,
}

/// Run the simple console game until the player stops or input ends
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R, W, G>(
    input: &mut R,
    output: &mut W,
    rng: &mut G,
    config: GameConfig,
) -> Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    writeln!(output, "{}", "⚾ Baseball".bright_cyan().bold())?;
    writeln!(
        output,
        "Guess the {DIGITS_LENGTH}-digit number. Digits run from {} to {} and never repeat.\n",
        Digit::MIN,
        Digit::MAX
    )?;

    let mut summary = SessionSummary::default();

    loop {
        let mut round = Round::new(rng, config.max_attempts);
        let finished = play_round(&mut round, input, output)?;

        if !finished {
            break;
        }

        summary.rounds_played += 1;
        summary.attempts.push(round.attempts());
        if round.is_won() {
            summary.rounds_won += 1;
        }

        match read_line(input, output, "Play again? (yes/no): ")? {
            Some(answer) if matches!(answer.to_lowercase().as_str(), "yes" | "y") => {
                writeln!(output)?;
            }
            _ => break,
        }
    }

    writeln!(output, "\n👋 Thanks for playing!")?;
    info!(
        rounds = summary.rounds_played,
        won = summary.rounds_won,
        "session finished"
    );
    Ok(summary)
}

/// Drive one round; returns false if input ran out before the round ended
fn play_round<R: BufRead, W: Write>(
    round: &mut Round,
    input: &mut R,
    output: &mut W,
) -> Result<bool> {
    while !round.is_over() {
        let Some(line) = read_line(input, output, "Enter a number: ")? else {
            return Ok(false);
        };

        match round.pitch(&line) {
            Pitch::Rejected => writeln!(
                output,
                "{}",
                format!(
                    "Please enter a {DIGITS_LENGTH}-digit number made of distinct digits from {} to {}.",
                    Digit::MIN,
                    Digit::MAX
                )
                .red()
            )?,
            Pitch::Scored(hint) => writeln!(output, "{}", hint_text(hint))?,
            Pitch::Won(hint) => {
                writeln!(output, "{}", hint_text(hint))?;
                writeln!(
                    output,
                    "{}",
                    format!(
                        "🎉 You found {} in {} {}!",
                        round.secret(),
                        round.attempts(),
                        if round.attempts() == 1 { "guess" } else { "guesses" }
                    )
                    .bright_green()
                    .bold()
                )?;
            }
            Pitch::OutOfAttempts(hint) => {
                writeln!(output, "{}", hint_text(hint))?;
                writeln!(
                    output,
                    "{}",
                    format!("Out of attempts. The number was {}.", round.secret()).yellow()
                )?;
            }
            Pitch::Finished => break,
        }
    }

    Ok(true)
}

/// Prompt and read one trimmed line; `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::generate_secret;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    const SEED: u64 = 2024;

    fn secret_for_seed() -> String {
        generate_secret(&mut StdRng::seed_from_u64(SEED)).to_string()
    }

    fn run(script: &str, config: GameConfig) -> (SessionSummary, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        let mut rng = StdRng::seed_from_u64(SEED);
        let summary = run_simple(&mut input, &mut output, &mut rng, config).unwrap();
        (summary, String::from_utf8(output).unwrap())
    }

    fn wrong_guess(secret: &str) -> String {
        crate::solver::all_secrets()
            .into_iter()
            .map(|s| s.to_string())
            .find(|s| s != secret)
            .unwrap()
    }

    #[test]
    fn winning_round_then_quit() {
        let secret = secret_for_seed();
        let script = format!("12\n{}\n{secret}\nno\n", wrong_guess(&secret));
        let (summary, output) = run(&script, GameConfig::default());

        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.rounds_won, 1);
        assert_eq!(summary.attempts, vec![2]);
        assert!(output.contains("Please enter a 3-digit number"));
        assert!(output.contains("3 strikes"));
        assert!(output.contains("Thanks for playing"));
    }

    #[test]
    fn input_ending_mid_round_stops_cleanly() {
        let (summary, output) = run("abc\n", GameConfig::default());

        assert_eq!(summary.rounds_played, 0);
        assert!(summary.attempts.is_empty());
        assert!(output.contains("Enter a number: "));
    }

    #[test]
    fn trailing_whitespace_is_ignored() {
        let secret = secret_for_seed();
        let script = format!("  {secret} \r\n");
        let (summary, _) = run(&script, GameConfig::default());

        assert_eq!(summary.rounds_won, 1);
        assert_eq!(summary.attempts, vec![1]);
    }

    #[test]
    fn attempt_cap_reveals_secret() {
        let secret = secret_for_seed();
        let script = format!("{}\nno\n", wrong_guess(&secret));
        let config = GameConfig {
            max_attempts: Some(1),
            ..GameConfig::default()
        };
        let (summary, output) = run(&script, config);

        assert_eq!(summary.rounds_played, 1);
        assert_eq!(summary.rounds_won, 0);
        assert!(output.contains(&format!("The number was {secret}")));
    }

    #[test]
    fn play_again_starts_new_round() {
        let mut rng = StdRng::seed_from_u64(SEED);
        let first = generate_secret(&mut rng).to_string();
        let second = generate_secret(&mut rng).to_string();

        let script = format!("{first}\ny\n{second}\nno\n");
        let (summary, _) = run(&script, GameConfig::default());

        assert_eq!(summary.rounds_played, 2);
        assert_eq!(summary.rounds_won, 2);
        assert_eq!(summary.attempts, vec![1, 1]);
    }
}
