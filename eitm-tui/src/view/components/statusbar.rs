//! Bottom status bar.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;
use crate::view::theme::{colors, Styles};

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.border)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(c.border)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(c.highlight)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Key hints for the current state.
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let mut hints = Vec::new();

    if app.session.is_loading() {
        hints.push(("", "Waiting for the server..."));
    } else {
        hints.push(("Enter", "Explain"));
        hints.push(("Alt+Enter", "New line"));
        hints.push(("Tab", "Switch field"));
        if app.focus.is_model() {
            hints.push(("←→", "Select model"));
        }
        hints.push(("Esc", "Clear"));
    }

    hints.push(("Alt+q", "Quit"));
    hints
}
