//! Wire types for the explanation API.

use serde::{Deserialize, Serialize};

/// Payload sent to the explanation endpoint.
///
/// Constructed fresh on each submission and never mutated afterwards; the
/// session keeps a copy for the provenance display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExplainRequest {
    /// The text or topic the user wants explained.
    pub text_to_explain: String,
    /// Backend model identifier, e.g. `phi3:mini-4k-instruct`.
    pub model_to_use: String,
}

impl ExplainRequest {
    pub fn new(text: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            text_to_explain: text.into(),
            model_to_use: model.into(),
        }
    }
}

/// Response body from the explanation endpoint.
///
/// Both fields are optional on the wire: a success body carries
/// `explanation`, an error body carries `error`, and a broken backend may
/// send neither. Interpretation happens in `client::decode_reply`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ExplainReply {
    pub explanation: Option<String>,
    pub error: Option<String>,
}
