//! Focus state definition.

/// Which form control receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusField {
    /// The text-to-explain input.
    #[default]
    Text,
    /// The model selector.
    Model,
}

impl FocusField {
    /// Cycle to the other field.
    pub fn toggle(self) -> Self {
        match self {
            FocusField::Text => FocusField::Model,
            FocusField::Model => FocusField::Text,
        }
    }

    pub fn is_text(self) -> bool {
        matches!(self, FocusField::Text)
    }

    pub fn is_model(self) -> bool {
        matches!(self, FocusField::Model)
    }
}
