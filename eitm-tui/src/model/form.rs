//! Form state: the text input and the model selector.

use eitm_core::ClientConfig;

/// Editable form fields.
///
/// `model_index` points into `ClientConfig::models`; the identifier it
/// resolves to is read at submission time, never cached.
#[derive(Debug, Default)]
pub struct FormState {
    /// Text the user wants explained. May contain literal newlines.
    pub input: String,
    /// Selected entry in the configured model list.
    pub model_index: usize,
}

impl FormState {
    pub fn new(config: &ClientConfig) -> Self {
        Self {
            input: String::new(),
            model_index: config.default_index(),
        }
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
    }

    pub fn insert_newline(&mut self) {
        self.input.push('\n');
    }

    pub fn backspace(&mut self) {
        self.input.pop();
    }

    /// Select the previous model, wrapping around.
    pub fn prev_model(&mut self, model_count: usize) {
        if model_count == 0 {
            return;
        }
        if self.model_index == 0 {
            self.model_index = model_count - 1;
        } else {
            self.model_index -= 1;
        }
    }

    /// Select the next model, wrapping around.
    pub fn next_model(&mut self, model_count: usize) {
        if model_count == 0 {
            return;
        }
        self.model_index = (self.model_index + 1) % model_count;
    }
}
