//! Message layer: the bridge between Event and Update.
//!
//! Raw terminal events are translated into messages; the update layer
//! consumes messages and mutates the model. A single flat enum is enough
//! here, there is only one page.

use eitm_core::ExplainResult;

/// Application message.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Quit the application.
    Quit,

    /// Move focus between the text input and the model selector.
    ToggleFocus,

    /// Type a character into the text input.
    Input(char),

    /// Delete the character before the cursor.
    Backspace,

    /// Insert a literal newline into the text input.
    InsertNewline,

    /// Select the previous model.
    PrevModel,

    /// Select the next model.
    NextModel,

    /// Submit the current form.
    Submit,

    /// Dismiss the current result or error panel.
    ClearOutput,

    /// The outstanding request resolved.
    RequestFinished(ExplainResult<String>),

    /// No operation (ignored events).
    Noop,
}
