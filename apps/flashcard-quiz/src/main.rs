#![allow(dead_code)]
//! Flashcard Quiz - Flip vocabulary cards and grade yourself.

mod app;
mod config;
mod deck;
mod logging;
mod models;
mod session;
mod ui;

use anyhow::Context;
use app::App;
use clap::Parser;
use config::Config;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "flashcard-quiz", version, about)]
struct Args {
    /// JSON deck file (array of {"front", "back"} objects). Defaults to the bundled word list.
    deck: Option<PathBuf>,

    /// Present cards in a random order.
    #[arg(long)]
    shuffle: bool,

    /// Randomly ask the back side first.
    #[arg(long)]
    random_sides: bool,

    /// Log filter directive, e.g. "debug" or "flashcard_quiz=trace".
    #[arg(long)]
    log_level: Option<String>,

    /// Write the effective options to the config file before starting.
    #[arg(long)]
    save_config: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let (mut config, config_error) = match Config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    if let Some(path) = Config::log_path() {
        let filter = logging::filter(args.log_level.as_deref(), &config.logging.level);
        if let Err(err) = logging::init(&path, filter) {
            eprintln!("Warning: logging disabled: {}", err);
        }
    }

    if let Some(err) = config_error {
        tracing::warn!(error = %format!("{err:#}"), "using default config");
    }

    if args.deck.is_some() {
        config.quiz.deck = args.deck.clone();
    }
    config.quiz.shuffle |= args.shuffle;
    config.quiz.random_sides |= args.random_sides;

    if args.save_config {
        config.save().context("failed to save config")?;
    }

    let cards = deck::load_or_bundled(config.quiz.deck.as_deref())?;
    let options = config.to_quiz_options();
    let mut app = App::new(config, cards, options);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        tracing::error!(%err, "quiz aborted");
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }

    tracing::info!(tally = %app.session.tally(), "exiting");
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> anyhow::Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }
    Ok(())
}
