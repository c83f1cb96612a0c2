//! Update layer: state transitions.
//!
//! The only place that mutates the model. Side effects are not performed
//! here; when a submission passes its guards the resulting request comes
//! back as a [`Command`] for the main loop to hand to the backend layer.

use eitm_core::ExplainRequest;

use crate::message::AppMessage;
use crate::model::App;

/// Side effect requested by an update.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    /// Nothing to do.
    None,
    /// Issue this request through the backend layer.
    Submit(ExplainRequest),
}

/// Apply a message to the model.
pub fn update(app: &mut App, msg: AppMessage) -> Command {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
        }

        AppMessage::Input(ch) => {
            if app.focus.is_text() && !app.session.is_loading() {
                app.form.insert_char(ch);
            }
        }

        AppMessage::Backspace => {
            if app.focus.is_text() && !app.session.is_loading() {
                app.form.backspace();
            }
        }

        AppMessage::InsertNewline => {
            if app.focus.is_text() && !app.session.is_loading() {
                app.form.insert_newline();
            }
        }

        AppMessage::PrevModel => {
            if !app.session.is_loading() {
                app.form.prev_model(app.config.models.len());
            }
        }

        AppMessage::NextModel => {
            if !app.session.is_loading() {
                app.form.next_model(app.config.models.len());
            }
        }

        AppMessage::Submit => {
            return handle_submit(app);
        }

        AppMessage::ClearOutput => {
            app.session.reset();
            app.clear_status();
        }

        AppMessage::RequestFinished(outcome) => {
            app.session.finish(outcome);
            app.clear_status();
        }

        AppMessage::Noop => {}
    }

    Command::None
}

/// Submit the form: the session enforces the re-entrancy guard and the
/// non-empty-after-trim validation, and snapshots the request.
fn handle_submit(app: &mut App) -> Command {
    let model = app.selected_model_id().to_string();
    match app.session.begin(&app.form.input, &model) {
        Some(request) => {
            app.set_status("Explaining...");
            Command::Submit(request)
        }
        None => Command::None,
    }
}
