//! Event handler.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::AppMessage;
use crate::model::App;

/// Poll for an input event.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Translate a raw event into a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // Terminal resize triggers a redraw by itself
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Only handle Press; Release/Repeat cause double input on Windows terminals
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Global shortcuts, regardless of focus
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if DefaultKeymap::CLEAR.matches(&key) {
        return AppMessage::ClearOutput;
    }

    if DefaultKeymap::NEXT_FIELD.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // Submit works from either field; the update layer holds the
    // in-flight and validation guards.
    if DefaultKeymap::SUBMIT.matches(&key) {
        return AppMessage::Submit;
    }

    // Editing keys are disabled while a request is outstanding, matching
    // the disabled form controls.
    if app.session.is_loading() {
        return AppMessage::Noop;
    }

    if app.focus.is_text() {
        handle_text_keys(key)
    } else {
        handle_model_keys(key)
    }
}

/// Keys for the text input.
fn handle_text_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::NEWLINE.matches(&key) {
        return AppMessage::InsertNewline;
    }

    match key.code {
        KeyCode::Backspace => AppMessage::Backspace,
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Input(ch)
        }
        _ => AppMessage::Noop,
    }
}

/// Keys for the model selector.
fn handle_model_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Left | KeyCode::Up | KeyCode::Char('k') => AppMessage::PrevModel,
        KeyCode::Right | KeyCode::Down | KeyCode::Char('j') => AppMessage::NextModel,
        _ => AppMessage::Noop,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FocusField;
    use eitm_core::ClientConfig;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn app() -> App {
        App::new(ClientConfig::default())
    }

    #[test]
    fn test_enter_submits_from_any_focus() {
        let mut app = app();
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Submit));

        app.focus = FocusField::Model;
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Submit));
    }

    #[test]
    fn test_typing_goes_to_text_input() {
        let app = app();
        let msg = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Input('x')));

        let msg = handle_event(press(KeyCode::Char('X'), KeyModifiers::SHIFT), &app);
        assert!(matches!(msg, AppMessage::Input('X')));
    }

    #[test]
    fn test_alt_enter_inserts_newline() {
        let app = app();
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::ALT), &app);
        assert!(matches!(msg, AppMessage::InsertNewline));
    }

    #[test]
    fn test_arrows_cycle_models_when_selector_focused() {
        let mut app = app();
        app.focus = FocusField::Model;

        let msg = handle_event(press(KeyCode::Left, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::PrevModel));

        let msg = handle_event(press(KeyCode::Right, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::NextModel));
    }

    #[test]
    fn test_editing_disabled_while_loading() {
        let mut app = app();
        app.session.begin("question", "phi3:mini-4k-instruct");

        let msg = handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));

        let msg = handle_event(press(KeyCode::Backspace, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Noop));

        // Submit still reaches the update layer, where the guard makes it
        // a no-op rather than a queued retry.
        let msg = handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app);
        assert!(matches!(msg, AppMessage::Submit));
    }

    #[test]
    fn test_quit_bindings() {
        let app = app();
        let msg = handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app);
        assert!(matches!(msg, AppMessage::Quit));

        let msg = handle_event(press(KeyCode::Char('q'), KeyModifiers::ALT), &app);
        assert!(matches!(msg, AppMessage::Quit));
    }
}
