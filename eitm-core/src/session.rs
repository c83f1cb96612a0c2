//! Request lifecycle state machine
//!
//! One submission at a time, four states, exactly one active. The session
//! owns the state; the view layer only reads it, and the front end's
//! update layer is the only caller of the transition methods.
//!
//! ```text
//!            begin(valid text)
//!   Idle ──────────────────────▶ Loading
//!   Success ───────────────────▶ Loading      (resubmission)
//!   Failed ────────────────────▶ Loading      (resubmission)
//!
//!   begin(blank text)  : any non-Loading state ──▶ Failed (no network call)
//!   begin while Loading: no-op (re-entrancy guard)
//!
//!   finish(Ok)  : Loading ──▶ Success
//!   finish(Err) : Loading ──▶ Failed
//! ```

use log::{error, warn};

use crate::error::{ExplainError, ExplainResult};
use crate::types::ExplainRequest;

/// Render state of the request lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestState {
    /// Nothing submitted yet (or output cleared).
    #[default]
    Idle,
    /// A request is outstanding; `submitted` is the snapshot taken at
    /// submission time, kept for the provenance display.
    Loading { submitted: ExplainRequest },
    /// Backend delivered a non-empty explanation.
    Success {
        explanation: String,
        request: ExplainRequest,
    },
    /// Submission failed; `message` is ready for display as-is.
    Failed { message: String },
}

/// Owns the [`RequestState`] and enforces its transitions.
#[derive(Debug, Default)]
pub struct ExplainSession {
    state: RequestState,
}

impl ExplainSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &RequestState {
        &self.state
    }

    /// Whether a request is outstanding. While `true`, submission is a
    /// no-op and the front end keeps its controls disabled.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.state, RequestState::Loading { .. })
    }

    /// Validate and start a submission.
    ///
    /// Returns the request the caller must issue, or `None` when nothing
    /// may be sent: either a request is already in flight (state
    /// unchanged), or the text is blank after trimming (state becomes
    /// `Failed` with the validation message).
    pub fn begin(&mut self, text: &str, model: &str) -> Option<ExplainRequest> {
        if self.is_loading() {
            return None;
        }

        if text.trim().is_empty() {
            self.state = RequestState::Failed {
                message: ExplainError::EmptyInput.user_message(),
            };
            return None;
        }

        let submitted = ExplainRequest::new(text, model);
        self.state = RequestState::Loading {
            submitted: submitted.clone(),
        };
        Some(submitted)
    }

    /// Apply the resolution of the outstanding request.
    ///
    /// There is no cancellation, so a resolution always finds the session
    /// in `Loading`; one that does not is stale and gets dropped.
    pub fn finish(&mut self, outcome: ExplainResult<String>) {
        let submitted = match std::mem::take(&mut self.state) {
            RequestState::Loading { submitted } => submitted,
            other => {
                warn!("[session] dropping resolution with no request outstanding");
                self.state = other;
                return;
            }
        };

        match outcome {
            Ok(explanation) => {
                self.state = RequestState::Success {
                    explanation,
                    request: submitted,
                };
            }
            Err(e) => {
                if e.is_expected() {
                    warn!("[session] request failed: {e}");
                } else {
                    error!("[session] request failed: {e}");
                }
                self.state = RequestState::Failed {
                    message: e.user_message(),
                };
            }
        }
    }

    /// Return to `Idle` from a resolved state. No-op while `Loading`.
    pub fn reset(&mut self) {
        if !self.is_loading() {
            self.state = RequestState::Idle;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn loading_session() -> ExplainSession {
        let mut session = ExplainSession::new();
        session
            .begin("What is quantum entanglement?", "phi3:mini-4k-instruct")
            .unwrap();
        session
    }

    #[test]
    fn test_initial_state_is_idle() {
        let session = ExplainSession::new();
        assert_eq!(*session.state(), RequestState::Idle);
        assert!(!session.is_loading());
    }

    #[test]
    fn test_blank_input_fails_without_request() {
        for text in ["", "   ", "\n\t "] {
            let mut session = ExplainSession::new();
            let request = session.begin(text, "phi3:mini-4k-instruct");
            assert!(request.is_none(), "no request may be issued for {text:?}");
            assert_eq!(
                *session.state(),
                RequestState::Failed {
                    message: "Please enter some text to explain.".to_string()
                }
            );
        }
    }

    #[test]
    fn test_valid_input_enters_loading_with_snapshot() {
        let mut session = ExplainSession::new();
        let request = session
            .begin("What is quantum entanglement?", "phi3:mini-4k-instruct")
            .unwrap();
        assert_eq!(request.text_to_explain, "What is quantum entanglement?");
        assert_eq!(request.model_to_use, "phi3:mini-4k-instruct");
        assert!(session.is_loading());
        assert_eq!(
            *session.state(),
            RequestState::Loading {
                submitted: request.clone()
            }
        );
    }

    #[test]
    fn test_begin_is_noop_while_loading() {
        let mut session = loading_session();
        let before = session.state().clone();

        assert!(session.begin("another question", "llama3:8b-instruct").is_none());
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn test_success_carries_provenance() {
        let mut session = loading_session();
        session.finish(Ok("Spooky action at a distance.".to_string()));

        match session.state() {
            RequestState::Success {
                explanation,
                request,
            } => {
                assert_eq!(explanation, "Spooky action at a distance.");
                assert_eq!(request.text_to_explain, "What is quantum entanglement?");
                assert_eq!(request.model_to_use, "phi3:mini-4k-instruct");
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_server_error_becomes_failed_message() {
        let mut session = loading_session();
        session.finish(Err(ExplainError::ServerReported("model not found".into())));
        assert_eq!(
            *session.state(),
            RequestState::Failed {
                message: "Error: model not found".to_string()
            }
        );
    }

    #[test]
    fn test_transport_error_becomes_failed_message() {
        let mut session = loading_session();
        session.finish(Err(ExplainError::Transport("connection refused".into())));
        assert_eq!(
            *session.state(),
            RequestState::Failed {
                message: "Error: No response received from the server. Is it running?".to_string()
            }
        );
    }

    #[test]
    fn test_resolved_states_accept_resubmission() {
        let mut session = loading_session();
        session.finish(Err(ExplainError::MalformedResponse));
        assert!(session.begin("try again", "qwen:1.8b-chat").is_some());
        assert!(session.is_loading());

        session.finish(Ok("second answer".to_string()));
        assert!(session.begin("and again", "qwen:1.8b-chat").is_some());
        assert!(session.is_loading());
    }

    #[test]
    fn test_sequential_submissions_reflect_latest_response() {
        let mut session = ExplainSession::new();

        session.begin("same question", "phi3:mini-4k-instruct").unwrap();
        session.finish(Ok("first answer".to_string()));

        session.begin("same question", "phi3:mini-4k-instruct").unwrap();
        session.finish(Ok("second answer".to_string()));

        match session.state() {
            RequestState::Success { explanation, .. } => {
                assert_eq!(explanation, "second answer");
            }
            other => panic!("expected Success, got {other:?}"),
        }
    }

    #[test]
    fn test_stale_resolution_is_dropped() {
        let mut session = ExplainSession::new();
        session.finish(Ok("nobody asked".to_string()));
        assert_eq!(*session.state(), RequestState::Idle);
    }

    #[test]
    fn test_reset_clears_resolved_states_only() {
        let mut session = loading_session();
        session.reset();
        assert!(session.is_loading(), "reset must not abort an in-flight request");

        session.finish(Err(ExplainError::MalformedResponse));
        session.reset();
        assert_eq!(*session.state(), RequestState::Idle);
    }
}
