//! Output panel: exactly one of idle hint, loading notice, error panel,
//! or explanation with provenance.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use eitm_core::RequestState;

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();

    let (title, lines) = match app.session.state() {
        RequestState::Idle => (" Explanation ", idle_lines()),
        RequestState::Loading { submitted } => {
            (" Explanation ", loading_lines(&submitted.text_to_explain))
        }
        RequestState::Failed { message } => (" Error ", error_lines(message)),
        RequestState::Success {
            explanation,
            request,
        } => (
            " Explanation ",
            success_lines(explanation, &request.text_to_explain, &request.model_to_use),
        ),
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

fn idle_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::styled(
            "Get clear and simple explanations for complex topics.",
            Styles::hint(),
        ),
        Line::styled(
            "Type a question above and press Enter.",
            Styles::hint(),
        ),
    ]
}

fn loading_lines(submitted_text: &str) -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::styled(
            "Explaining...",
            Style::default()
                .fg(colors().highlight)
                .add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(
            format!("Waiting for an answer about: {submitted_text}"),
            Styles::hint(),
        ),
    ]
}

fn error_lines(message: &str) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(""),
        Line::styled(
            "Something went wrong",
            Styles::error().add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];
    // Failure messages are single-line today; split anyway so a multi-line
    // server message cannot collapse into one row.
    for part in message.split('\n') {
        lines.push(Line::styled(part.to_string(), Styles::error()));
    }
    lines.push(Line::from(""));
    lines.push(Line::styled("Press Esc to dismiss.", Styles::hint()));
    lines
}

/// The result view with provenance: what was asked, the explanation, and
/// which model produced it. The explanation is bound as plain text line by
/// line; it is never parsed or interpreted as markup.
fn success_lines(explanation: &str, asked: &str, model: &str) -> Vec<Line<'static>> {
    let c = colors();
    let mut lines = vec![Line::from("")];

    lines.push(Line::styled("You asked about:", Styles::hint()));
    for part in asked.split('\n') {
        lines.push(Line::styled(
            part.to_string(),
            Style::default().fg(c.fg).add_modifier(Modifier::ITALIC),
        ));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Explanation:", Styles::heading()));
    for part in explanation.split('\n') {
        lines.push(Line::styled(part.to_string(), Style::default().fg(c.fg)));
    }

    lines.push(Line::from(""));
    lines.push(Line::styled(
        format!("Explained using: {model}"),
        Styles::hint(),
    ));

    lines
}
