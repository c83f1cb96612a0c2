//! Application main state structure.

use eitm_core::{ClientConfig, ExplainSession};

use super::{FocusField, FormState};

/// Application main state.
pub struct App {
    /// Whether the application should exit.
    pub should_quit: bool,

    /// Which form control has focus.
    pub focus: FocusField,

    /// Editable form fields.
    pub form: FormState,

    /// Request lifecycle; the output panel renders whatever state this is in.
    pub session: ExplainSession,

    /// Injected configuration (endpoint, model list, default).
    pub config: ClientConfig,

    /// Status bar message.
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            should_quit: false,
            focus: FocusField::Text,
            form: FormState::new(&config),
            session: ExplainSession::new(),
            config,
            status_message: None,
        }
    }

    /// Identifier of the currently selected model.
    pub fn selected_model_id(&self) -> &str {
        self.config.model_id(self.form.model_index)
    }

    /// Set the status bar message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status bar message.
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}
