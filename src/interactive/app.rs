//! TUI application state and logic

use crate::core::Word;
use crate::solver::{RoundOutcome, SessionState, SolverError, SolverSession, WordWeights};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::debug;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::collections::BTreeMap;
use std::io;
use std::sync::Arc;

/// Application state
pub struct App {
    /// Weights computed once at startup and shared by every game
    pub weights: Arc<WordWeights>,
    pub session: SolverSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    WinCelebration,
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
    /// Solved games keyed by attempt count
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl App {
    /// Weight the word list for `length` and open the first game
    ///
    /// # Errors
    ///
    /// Returns `SolverError::EmptyCorpus` if no word has `length` letters.
    pub fn new(words: &[Word], length: usize) -> Result<Self, SolverError> {
        let weights = Arc::new(crate::solver::weight_corpus(words, length)?);
        let session = SolverSession::new(Arc::clone(&weights))?;

        Ok(Self {
            weights,
            session,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest the best-weighted word each round.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: format!(
                        "Enter the result as {length} letters of b/y/g (e.g. 'bygbb')"
                    ),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
        })
    }

    /// Word length of the current game
    #[must_use]
    pub fn length(&self) -> usize {
        self.weights.length()
    }

    /// Share of the starting candidates ruled out so far, in `0.0..=1.0`
    #[must_use]
    pub fn eliminated_fraction(&self) -> f64 {
        let total = self.weights.len();
        if total == 0 {
            return 0.0;
        }
        1.0 - self.session.remaining() as f64 / total as f64
    }

    pub fn handle_feedback(&mut self, feedback: &str) {
        match self.session.submit_feedback(feedback) {
            Ok(RoundOutcome::NextGuess {
                guess, remaining, ..
            }) => {
                self.add_message(
                    &format!(
                        "{remaining} candidates remaining, next: {}",
                        guess.text().to_uppercase()
                    ),
                    MessageStyle::Info,
                );
                self.input_buffer.clear();
            }
            Ok(RoundOutcome::Solved { attempts }) => {
                self.stats.games_won += 1;
                self.stats.total_games += 1;
                *self.stats.guess_distribution.entry(attempts).or_insert(0) += 1;

                self.input_mode = InputMode::WinCelebration;

                let celebration = match attempts {
                    1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                    2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                    3 => "✨ SPLENDID! Three guesses! ✨",
                    4 => "👏 GREAT JOB! Four guesses! 👏",
                    5 => "🎉 NICE WORK! Five guesses! 🎉",
                    6 => "😅 PHEW! Got it in six! 😅",
                    _ => "🎊 SOLVED! 🎊",
                };

                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                self.input_buffer.clear();
            }
            Ok(RoundOutcome::Exhausted) => {
                self.stats.total_games += 1;
                self.add_message(
                    "No candidates remain - the results may be incorrect. Press 'u' to undo.",
                    MessageStyle::Error,
                );
                self.input_buffer.clear();
            }
            // Buffer is kept so the entry can be corrected
            Err(e) => {
                debug!("feedback rejected: {e}");
                self.add_message(&format!("{e}"), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        match SolverSession::new(Arc::clone(&self.weights)) {
            Ok(session) => self.session = session,
            Err(e) => {
                self.add_message(&e.to_string(), MessageStyle::Error);
                return;
            }
        }
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! Here is the best first guess.",
            MessageStyle::Info,
        );
    }

    pub fn undo_last(&mut self) {
        if let Some(previous) = self.session.rewound() {
            // Undoing out of an exhausted game reopens it
            if self.session.state() == SessionState::Exhausted {
                self.stats.total_games = self.stats.total_games.saturating_sub(1);
            }
            self.session = previous;
            self.input_buffer.clear();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
        }
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
        match self.input_mode {
            InputMode::WinCelebration => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') => {
                    self.new_game();
                }
                _ => {
                    // In celebration mode, ignore other keys
                }
            },
            InputMode::Feedback => match key.code {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.should_quit = true;
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                }
                KeyCode::Char('n') => {
                    self.new_game();
                }
                KeyCode::Char('u') => {
                    self.undo_last();
                }
                KeyCode::Char(c) => {
                    if self.input_buffer.chars().count() < self.length() {
                        self.input_buffer.push(c);
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => {
                    let input = self.input_buffer.clone();
                    self.handle_feedback(&input);
                }
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
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
