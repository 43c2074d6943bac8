//! TUI application state and logic

use crate::core::{DIGITS_LENGTH, Digits, Hint};
use crate::game::{Pitch, Round};
use crate::output::formatters::hint_text;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use rand::rngs::StdRng;
use rustc_hash::FxHashMap;
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub round: Round,
    pub rng: StdRng,
    pub max_attempts: Option<usize>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    RoundOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    /// Fewest guesses in any won game
    #[must_use]
    pub fn best(&self) -> Option<usize> {
        self.guess_distribution.keys().copied().min()
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games > 0 {
            self.games_won as f64 / self.total_games as f64 * 100.0
        } else {
            0.0
        }
    }
}

impl App {
    #[must_use]
    pub fn new(mut rng: StdRng, max_attempts: Option<usize>) -> Self {
        let round = Round::new(&mut rng, max_attempts);

        Self {
            round,
            rng,
            max_attempts,
            input_mode: InputMode::Guessing,
            input_buffer: String::new(),
            messages: vec![Message {
                text: format!("Welcome! Guess the {DIGITS_LENGTH}-digit number."),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Scored guesses of the current round
    #[must_use]
    pub fn history(&self) -> &[(Digits, Hint)] {
        self.round.history()
    }

    pub fn submit_guess(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        match self.round.pitch(&input) {
            Pitch::Rejected => {
                self.add_message(
                    &format!("'{input}' is not {DIGITS_LENGTH} distinct digits from 1 to 9"),
                    MessageStyle::Error,
                );
            }
            Pitch::Scored(hint) => {
                self.add_message(&format!("{input}: {}", hint_text(hint)), MessageStyle::Info);
            }
            Pitch::Won(_) => {
                let attempts = self.round.attempts();
                self.finish_round(true);

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2..=3 => "🔥 MAGNIFICENT! 🔥",
                    4..=5 => "✨ SPLENDID! ✨",
                    6..=7 => "👏 GREAT JOB! 👏",
                    _ => "🎊 SOLVED! 🎊",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message(
                    &format!("Found {} in {attempts} guesses.", self.round.secret()),
                    MessageStyle::Success,
                );
            }
            Pitch::OutOfAttempts(_) => {
                self.finish_round(false);
                self.add_message(
                    &format!("Out of attempts! The number was {}.", self.round.secret()),
                    MessageStyle::Error,
                );
            }
            Pitch::Finished => {}
        }
    }

    /// Reveal the secret and end the round as a loss
    pub fn give_up(&mut self) {
        if self.input_mode == InputMode::RoundOver {
            return;
        }
        self.finish_round(false);
        self.input_buffer.clear();
        self.add_message(
            &format!("The number was {}.", self.round.secret()),
            MessageStyle::Error,
        );
    }

    fn finish_round(&mut self, won: bool) {
        self.stats.total_games += 1;
        if won {
            self.stats.games_won += 1;
            *self
                .stats
                .guess_distribution
                .entry(self.round.attempts())
                .or_insert(0) += 1;
        }
        self.input_mode = InputMode::RoundOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
        debug!(won, attempts = self.round.attempts(), "tui round finished");
    }

    pub fn new_game(&mut self) {
        self.round = Round::new(&mut self.rng, self.max_attempts);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return;
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
                return;
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::RoundOver => {
                if key.code == KeyCode::Char('n') {
                    self.new_game();
                }
            }
            InputMode::Guessing => match key.code {
                KeyCode::Char('g') => self.give_up(),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    if self.input_buffer.len() < DIGITS_LENGTH {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
