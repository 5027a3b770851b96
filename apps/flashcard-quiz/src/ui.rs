//! UI rendering for flashcard quiz.

use crate::app::App;
use crate::models::Tally;
use crate::session::{CardView, SessionView};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Card or summary
            Constraint::Length(3), // Footer
        ])
        .split(f.area());

    let header = Paragraph::new(app.config.display.title.as_str())
        .style(Style::default().add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, chunks[0]);

    match app.session.view() {
        SessionView::Active(card) => draw_card(f, app, &card, chunks[1]),
        SessionView::Completed(tally) => draw_completed(f, tally, chunks[1]),
    }

    draw_footer(f, app, chunks[2]);

    if app.show_help {
        draw_help(f);
    }

    if let Some(msg) = &app.message {
        draw_message(f, msg);
    }
}

fn draw_card(f: &mut Frame, app: &App, card: &CardView<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Score
            Constraint::Min(0),    // Card
            Constraint::Length(3), // Buttons
        ])
        .split(area);

    let mut status = format!("Correct Answers: {}", card.correct);
    if app.config.display.show_progress {
        status.push_str(&format!("  |  Card {} of {}", card.number, card.total));
    }
    let score = Paragraph::new(status).alignment(Alignment::Center);
    f.render_widget(score, chunks[0]);

    let (text, title, style) = match card.answer {
        Some(answer) => (
            answer,
            format!(" {} ", card.question_side.other().name()),
            Style::default().fg(Color::Green),
        ),
        None => (
            card.question,
            format!(" {} ", card.question_side.name()),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    };

    // Vertically center the word inside the card box.
    let inner_height = chunks[1].height.saturating_sub(2);
    let mut lines = vec![Line::raw(""); (inner_height / 2) as usize];
    lines.push(Line::styled(text, style));

    let face = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(title))
        .wrap(Wrap { trim: true });
    f.render_widget(face, chunks[1]);

    let buttons = if card.answer.is_some() {
        vec![
            ("y", "✓ Correct", Color::Green),
            ("n", "✗ Wrong", Color::Red),
            ("Space", "Flip back", Color::White),
        ]
    } else {
        vec![("Space", "Flip", Color::White)]
    };
    f.render_widget(button_line(&buttons), chunks[2]);
}

fn draw_completed(f: &mut Frame, tally: Tally, area: Rect) {
    let lines = vec![
        Line::raw(""),
        Line::styled(
            "Deck Completed!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(format!("You got {} correct.", tally)),
        Line::styled(
            format!("({:.0}%)", tally.ratio() * 100.0),
            Style::default().fg(Color::DarkGray),
        ),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
            Span::raw(" Start Over"),
        ]),
    ];

    let summary = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, area);
}

fn button_line(buttons: &[(&str, &str, Color)]) -> Paragraph<'static> {
    let spans: Vec<Span> = buttons
        .iter()
        .flat_map(|(key, label, color)| {
            vec![
                Span::styled(format!("[{}]", key), Style::default().fg(*color).add_modifier(Modifier::BOLD)),
                Span::raw(format!(" {} ", label)),
                Span::raw("  "),
            ]
        })
        .collect();

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL))
}

fn draw_footer(f: &mut Frame, app: &App, area: Rect) {
    let options = app.session.options();
    let mode = if options.is_randomized() {
        format!(
            "shuffle:{} sides:{}",
            if options.shuffle { "on" } else { "off" },
            if options.randomize_sides { "random" } else { "front" },
        )
    } else {
        "in order".to_string()
    };

    let footer = Paragraph::new(format!("r:Restart  s:Shuffle  o:Sides  ?:Help  q:Quit  [{mode}]"))
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(footer, area);
}

fn draw_help(f: &mut Frame) {
    let area = centered_rect(60, 80, f.area());
    f.render_widget(Clear, area);

    let help = r#"
Flashcard Quiz Keybindings

Card:
  Space, Enter, f   Flip card
  y, 1, Right       Got it right
  n, 2, Left        Got it wrong

Deck:
  r                 Restart deck
  s                 Toggle shuffle (restarts)
  o                 Toggle random sides (restarts)
  Enter             Start over when completed

General:
  ?                 Show this help
  q, Esc            Quit

Press any key to close
"#;

    let popup = Paragraph::new(help)
        .block(Block::default().borders(Borders::ALL).title(" Help "))
        .wrap(Wrap { trim: false });
    f.render_widget(popup, area);
}

fn draw_message(f: &mut Frame, msg: &str) {
    let area = Rect::new(
        f.area().x + 2,
        f.area().height.saturating_sub(5),
        f.area().width.saturating_sub(4),
        3,
    );
    f.render_widget(Clear, area);

    let message = Paragraph::new(msg)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(message, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
