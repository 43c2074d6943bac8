//! TUI rendering with ratatui
//!
//! Layout and widgets for the Baseball game interface.

use super::app::{App, InputMode, MessageStyle};
use crate::core::DIGITS_LENGTH;
use crate::output::formatters::{hint_text, hint_to_emoji};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    render_history(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("⚾ BASEBALL - Guess the Number")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .history()
        .iter()
        .enumerate()
        .rev()
        .map(|(i, (guess, hint))| {
            let style = if hint.is_out() {
                Style::default().fg(Color::Green)
            } else if hint.is_consecutive_signal() {
                Style::default().fg(Color::Magenta)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::styled(
                    guess.to_string(),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(format!(" {} ", hint_to_emoji(*hint))),
                Span::styled(hint_text(*hint), style),
            ]))
        })
        .collect();

    let history = List::new(items).block(
        Block::default()
            .title(" Guesses ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );

    f.render_widget(history, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Attempts gauge
            Constraint::Length(6), // Session stats
            Constraint::Min(3),    // Messages
        ])
        .split(area);

    render_attempts(f, app, chunks[0]);
    render_stats(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_attempts(f: &mut Frame, app: &App, area: Rect) {
    let used = app.round.attempts();
    let (percent, label) = match app.max_attempts {
        Some(max) => (
            (used * 100 / max.max(1)).min(100) as u16,
            format!("{used}/{max} attempts"),
        ),
        None => (0, format!("{used} attempts")),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Attempts ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_stats(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let best = stats
        .best()
        .map_or_else(|| "-".to_string(), |b| b.to_string());

    let content = vec![
        Line::from(format!("Games:    {}", stats.total_games)),
        Line::from(format!("Won:      {}", stats.games_won)),
        Line::from(format!("Win rate: {:.0}%", stats.win_rate())),
        Line::from(format!("Best:     {best}")),
    ];

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Session ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.input_mode {
        InputMode::RoundOver => " Round over | Press 'n' for new game or 'q' to quit ".to_string(),
        InputMode::Guessing => format!(" Enter {DIGITS_LENGTH} distinct digits (1-9) "),
    };
    let color = match app.input_mode {
        InputMode::RoundOver => Color::Green,
        InputMode::Guessing => Color::Yellow,
    };

    let input = Paragraph::new(app.input_buffer.as_str())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let remaining = app
        .round
        .remaining_attempts()
        .map_or_else(|| "unlimited".to_string(), |r| r.to_string());
    let status = Paragraph::new(format!("Attempts left: {remaining}"))
        .alignment(Alignment::Center);
    f.render_widget(status, chunks[0]);

    let help_text = match app.input_mode {
        InputMode::RoundOver => "q: Quit | n: New Game",
        InputMode::Guessing => "q: Quit | g: Give Up | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn render_to_string(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn renders_header_and_help() {
        let app = App::new(StdRng::seed_from_u64(5), None);
        let screen = render_to_string(&app);

        assert!(screen.contains("BASEBALL"));
        assert!(screen.contains("g: Give Up"));
        assert!(screen.contains("unlimited"));
    }

    #[test]
    fn renders_round_over_prompt() {
        let mut app = App::new(StdRng::seed_from_u64(5), Some(3));
        app.give_up();
        let screen = render_to_string(&app);

        assert!(screen.contains("n: New Game"));
        assert!(screen.contains("Games:    1"));
    }
}
