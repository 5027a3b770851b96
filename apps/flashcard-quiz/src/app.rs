//! Application state and key handling.

use crate::config::Config;
use crate::models::{Card, QuizOptions};
use crate::session::QuizSession;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;

pub struct App {
    pub config: Config,
    pub session: QuizSession,
    pub show_help: bool,
    pub should_quit: bool,
    pub message: Option<String>,
    /// Where option toggles are written back; `None` keeps them in memory.
    pub config_path: Option<PathBuf>,
}

impl App {
    pub fn new(config: Config, cards: Vec<Card>, options: QuizOptions) -> Self {
        let mut app = Self::with_session(config, QuizSession::new(cards, options));
        app.config_path = Config::config_path();
        app
    }

    pub fn with_session(config: Config, session: QuizSession) -> Self {
        Self {
            config,
            session,
            show_help: false,
            should_quit: false,
            message: None,
            config_path: None,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        self.message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Char('r') => {
                self.session.restart();
                self.message = Some("Deck restarted".to_string());
            }
            KeyCode::Char('s') => self.toggle_shuffle(),
            KeyCode::Char('o') => self.toggle_random_sides(),
            _ if self.session.is_completed() => self.handle_completed_key(key),
            _ => self.handle_card_key(key),
        }
    }

    fn handle_card_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => self.session.reveal(),
            KeyCode::Char('y') | KeyCode::Char('1') | KeyCode::Right => self.session.grade(true),
            KeyCode::Char('n') | KeyCode::Char('2') | KeyCode::Left => self.session.grade(false),
            _ => {}
        }
    }

    fn handle_completed_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char(' ') | KeyCode::Enter) {
            self.session.restart();
        }
    }

    fn toggle_shuffle(&mut self) {
        let mut options = self.session.options();
        options.shuffle = !options.shuffle;
        self.session.set_options(options);
        self.config.quiz.shuffle = options.shuffle;
        self.persist_options(format!("Shuffle {}, deck restarted", on_off(options.shuffle)));
    }

    fn toggle_random_sides(&mut self) {
        let mut options = self.session.options();
        options.randomize_sides = !options.randomize_sides;
        self.session.set_options(options);
        self.config.quiz.random_sides = options.randomize_sides;
        self.persist_options(format!(
            "Random sides {}, deck restarted",
            on_off(options.randomize_sides)
        ));
    }

    fn persist_options(&mut self, status: String) {
        let Some(path) = &self.config_path else {
            self.message = Some(status);
            return;
        };
        match self.config.save_to(path) {
            Ok(()) => self.message = Some(status),
            Err(err) => {
                tracing::warn!(error = %format!("{err:#}"), "failed to save options");
                self.message = Some(format!("{status} (not saved: {err})"));
            }
        }
    }
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}
