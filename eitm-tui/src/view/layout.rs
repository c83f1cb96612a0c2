//! Main layout rendering.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::model::App;

use super::components;
use super::theme::colors;

/// Render the whole frame: title bar, form, output panel, status bar.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // title bar
            Constraint::Length(10), // form
            Constraint::Min(3),     // output panel
            Constraint::Length(1),  // status bar
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);
    components::form::render(app, frame, main_layout[1]);
    components::output::render(app, frame, main_layout[2]);
    components::statusbar::render(app, frame, main_layout[3]);
}

fn render_title_bar(frame: &mut Frame, area: ratatui::layout::Rect) {
    let c = colors();
    let title = Paragraph::new(" Explain It To Me (EITM)").style(
        Style::default()
            .fg(c.highlight)
            .add_modifier(Modifier::BOLD),
    );
    frame.render_widget(title, area);
}
