//! Unified error type definition

use thiserror::Error;

/// Client error taxonomy.
///
/// Every failure path of a submission collapses into one of these; nothing
/// propagates past the session boundary. The `Display` impl is for logs;
/// [`ExplainError::user_message`] produces the exact strings shown in the
/// error panel.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExplainError {
    /// Input was empty after trimming; caught before any network call.
    #[error("empty input")]
    EmptyInput,

    /// Backend responded with a structured `error` field.
    #[error("server reported: {0}")]
    ServerReported(String),

    /// Backend responded successfully but without a usable `explanation`.
    #[error("malformed response body")]
    MalformedResponse,

    /// No response reached the client (connect failure, timeout, dropped body).
    #[error("transport failure: {0}")]
    Transport(String),

    /// Anything else.
    #[error("{0}")]
    Unknown(String),
}

impl ExplainError {
    /// The user-facing message for the `Failed` panel.
    ///
    /// These strings are part of the UI contract; change them only together
    /// with the tests that pin them.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter some text to explain.".to_string(),
            Self::MalformedResponse => {
                "Received an unexpected response from the server.".to_string()
            }
            Self::Transport(_) => {
                "Error: No response received from the server. Is it running?".to_string()
            }
            Self::ServerReported(message) | Self::Unknown(message) => {
                format!("Error: {message}")
            }
        }
    }

    /// Whether this is expected behavior (user input, backend saying no)
    /// rather than something broken. Used for log level selection:
    /// `warn` when `true`, `error` when `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::EmptyInput | Self::ServerReported(_))
    }
}

/// Result type alias for client operations.
pub type ExplainResult<T> = std::result::Result<T, ExplainError>;
