//! Submission form: text input, model selector, submit hint.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthChar;

use crate::model::App;
use crate::view::theme::{colors, Styles};

const PLACEHOLDER: &str = "e.g., What is quantum entanglement? or paste a paragraph here...";

/// Lines of the input area inside the form block.
const INPUT_ROWS: usize = 4;

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let loading = app.session.is_loading();

    let border_style = if app.focus.is_text() {
        Style::default().fg(c.border_focused)
    } else {
        Style::default().fg(c.border)
    };

    let block = Block::default()
        .title(" Ask ")
        .title_style(Style::default().fg(c.fg).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = Vec::new();

    lines.push(Line::styled(
        "Enter text or topic to explain:",
        Styles::label(),
    ));

    // Text input rows
    if app.form.input.is_empty() {
        lines.push(Line::styled(PLACEHOLDER, Styles::hint()));
        for _ in 1..INPUT_ROWS {
            lines.push(Line::from(""));
        }
    } else {
        let show_cursor = app.focus.is_text() && !loading;
        for line in input_rows(&app.form.input, INPUT_ROWS, inner.width, show_cursor) {
            lines.push(line);
        }
    }

    lines.push(Line::from(""));

    // Model selector
    let model_name = app
        .config
        .models
        .get(app.form.model_index)
        .map_or("(no models configured)", |m| m.name.as_str());
    let selector_style = if app.focus.is_model() {
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::from(vec![
        Span::styled("Model: ", Styles::label()),
        Span::styled(format!("◀ {model_name} ▶"), selector_style),
    ]));

    // Submit control, disabled while a request is outstanding
    let submit = if loading {
        Span::styled("[ Explaining... ]", Styles::hint())
    } else {
        Span::styled(
            "[ Explain It! (Enter) ]",
            Style::default()
                .fg(c.success)
                .add_modifier(Modifier::BOLD),
        )
    };
    lines.push(Line::from(submit));

    frame.render_widget(Paragraph::new(lines), inner);
}

/// The last `rows` display lines of the input, each truncated from the
/// front so the tail (where typing happens) stays visible, with a cursor
/// appended to the final line.
fn input_rows(input: &str, rows: usize, width: u16, show_cursor: bool) -> Vec<Line<'static>> {
    let max_width = usize::from(width).saturating_sub(1).max(1);

    let mut all: Vec<String> = input.split('\n').map(|l| tail_fit(l, max_width)).collect();
    if all.len() > rows {
        all.drain(..all.len() - rows);
    }

    if show_cursor {
        if let Some(last) = all.last_mut() {
            last.push('█');
        }
    }

    let mut lines: Vec<Line<'static>> = all.into_iter().map(Line::from).collect();
    while lines.len() < rows {
        lines.push(Line::from(""));
    }
    lines
}

/// Keep the widest suffix of `line` that fits in `max_width` columns.
fn tail_fit(line: &str, max_width: usize) -> String {
    let mut width = 0usize;
    let mut result: Vec<char> = Vec::new();

    for ch in line.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width {
            break;
        }
        width += w;
        result.push(ch);
    }

    result.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tail_fit_keeps_short_lines() {
        assert_eq!(tail_fit("hello", 10), "hello");
    }

    #[test]
    fn test_tail_fit_truncates_from_front() {
        assert_eq!(tail_fit("abcdefgh", 3), "fgh");
    }

    #[test]
    fn test_tail_fit_counts_wide_chars() {
        // CJK characters are two columns wide
        assert_eq!(tail_fit("ab你好", 4), "你好");
        assert_eq!(tail_fit("ab你好", 5), "b你好");
    }

    #[test]
    fn test_input_rows_shows_last_lines_with_cursor() {
        let lines = input_rows("one\ntwo\nthree\nfour\nfive", 4, 40, true);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_string(), "two");
        assert_eq!(lines[3].to_string(), "five█");
    }

    #[test]
    fn test_input_rows_pads_to_row_count() {
        let lines = input_rows("only", 4, 40, false);
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0].to_string(), "only");
        assert_eq!(lines[1].to_string(), "");
    }
}
