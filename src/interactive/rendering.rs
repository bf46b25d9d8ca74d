//! TUI rendering with ratatui
//!
//! Visualizations for the solver interface.

use super::app::{App, InputMode, MessageStyle};
use crate::output::formatters::weight_bar;
use crate::solver::SessionState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Number of ranked candidates listed at once
const CANDIDATES_SHOWN: usize = 12;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(5), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🎯 WORDLE ASSIST - Interactive Mode")
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

fn render_main_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30), // Current guess info
            Constraint::Percentage(40), // Candidates
            Constraint::Percentage(30), // History
        ])
        .split(area);

    render_current_guess(f, app, chunks[0]);
    render_candidates(f, app, chunks[1]);
    render_history(f, app, chunks[2]);
}

fn render_current_guess(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Current Guess ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);

    if app.session.state() == SessionState::Exhausted {
        let paragraph = Paragraph::new("No suggestion available").block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let guess = app.session.current_guess();
    let weight = app.weights.weight_of(guess).unwrap_or(0);
    let best = app.weights.best().map_or(0, |(_, w)| w);

    let content = vec![
        Line::from(vec![
            Span::raw(format!("Attempt {}: ", app.session.attempt())),
            Span::styled(
                guess.text().to_uppercase(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Weight:    [{}] {weight}", weight_bar(weight, best, 18))),
        Line::from(format!(
            "Letters:   {} distinct of {}",
            guess.distinct_letters(),
            guess.len()
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

fn render_candidates(f: &mut Frame, app: &App, area: Rect) {
    let candidates = app.session.candidates();
    let guess = app.session.current_guess();

    let content: Vec<Line> = if candidates.is_empty() {
        vec![Line::from("No candidates left")]
    } else {
        let mut lines = vec![Line::from(format!("{} remaining", candidates.len()))];
        lines.extend(
            candidates
                .ranked()
                .into_iter()
                .take(CANDIDATES_SHOWN)
                .map(|(word, weight)| {
                    let style = if word == guess {
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD)
                    } else {
                        Style::default().fg(Color::Green)
                    };
                    Line::from(vec![
                        Span::raw("  "),
                        Span::styled(format!("{:<8}", word.text().to_uppercase()), style),
                        Span::styled(format!(" {weight}"), Style::default().fg(Color::Cyan)),
                    ])
                }),
        );
        lines
    };

    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Candidates ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(paragraph, area);
}

fn render_history(f: &mut Frame, app: &App, area: Rect) {
    let history = app.session.history();
    let history_items: Vec<ListItem> = history
        .iter()
        .rev()
        .take(6)
        .enumerate()
        .map(|(i, record)| {
            ListItem::new(format!(
                "{}: {} {} {} → {}",
                history.len() - i,
                record.guess.text().to_uppercase(),
                record.feedback.to_emoji(),
                record.candidates_before,
                record.candidates_after
            ))
        })
        .collect();

    let list =
        List::new(history_items).block(Block::default().title(" History ").borders(Borders::ALL));

    f.render_widget(list, area);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_search_progress(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_search_progress(f: &mut Frame, app: &App, area: Rect) {
    let fraction = app.eliminated_fraction().clamp(0.0, 1.0);
    let remaining = app.session.remaining();

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Candidates Eliminated ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(fraction)
        .label(format!(
            "{:.0}% | {remaining} of {} remain",
            fraction * 100.0,
            app.weights.len()
        ));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .take(10)
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
    let (title, content, color) = match app.input_mode {
        InputMode::WinCelebration => (
            " 🎉 CONGRATULATIONS! 🎉 | Press 'n' for new game or 'q' to quit ".to_string(),
            "",
            Color::Green,
        ),
        InputMode::Feedback => (
            format!(
                " Enter Result for {} (b=black y=yellow g=green) ",
                app.session.current_guess().text().to_uppercase()
            ),
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
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
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let mode_text = match app.session.state() {
        SessionState::AwaitingFeedback => "Mode: Playing".to_string(),
        SessionState::Solved { attempts } => format!("Mode: Solved in {attempts}"),
        SessionState::Exhausted => "Mode: Exhausted".to_string(),
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        if app.stats.total_games > 0 {
            app.stats.games_won as f64 / app.stats.total_games as f64 * 100.0
        } else {
            0.0
        }
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let candidates_text = format!("Candidates: {}", app.session.remaining());
    let candidates = Paragraph::new(candidates_text).alignment(Alignment::Center);
    f.render_widget(candidates, chunks[2]);

    let help_text = if app.session.state() == SessionState::Exhausted {
        "q: Quit | n: New Game | u: Undo"
    } else {
        "q: Quit | u: Undo | n: New | Enter: Submit"
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_strings;
    use ratatui::{Terminal, backend::TestBackend};

    fn rendered(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
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
    fn renders_suggestion_and_candidates() {
        let words = words_from_strings(["crane", "slate", "crate", "plate"]);
        let app = App::new(&words, 5).unwrap();

        let screen = rendered(&app);
        assert!(screen.contains("CRATE"));
        assert!(screen.contains("SLATE"));
        assert!(screen.contains("4 remaining"));
    }

    #[test]
    fn renders_exhausted_game() {
        let words = words_from_strings(["crane", "slate", "crate", "plate"]);
        let mut app = App::new(&words, 5).unwrap();
        app.handle_feedback("bbbbb");

        let screen = rendered(&app);
        assert!(screen.contains("No candidates left"));
        assert!(screen.contains("Exhausted"));
    }
}
