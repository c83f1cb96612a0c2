//! HTTP transport for the explanation endpoint.

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;

use crate::config::ClientConfig;
use crate::error::{ExplainError, ExplainResult};
use crate::types::{ExplainReply, ExplainRequest};

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Transport seam between the front end and the explanation service.
///
/// The real implementation is [`HttpExplainClient`]; tests substitute
/// their own to drive the session without a server.
#[async_trait]
pub trait ExplainBackend: Send + Sync {
    /// Issue one explanation request and return the explanation text.
    async fn explain(&self, request: &ExplainRequest) -> ExplainResult<String>;
}

/// Reqwest-backed client for the fixed `POST <endpoint>` contract.
///
/// Deliberately no overall request timeout: explanation generation is slow
/// and the contract leaves hang behavior to the transport default. Only
/// connection establishment is bounded.
pub struct HttpExplainClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpExplainClient {
    pub fn new(config: &ClientConfig) -> ExplainResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .map_err(|e| ExplainError::Unknown(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
        })
    }
}

#[async_trait]
impl ExplainBackend for HttpExplainClient {
    async fn explain(&self, request: &ExplainRequest) -> ExplainResult<String> {
        debug!(
            "[explain] POST {} model={}",
            self.endpoint, request.model_to_use
        );

        let response = self
            .http
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| ExplainError::Transport(format!("failed to read response body: {e}")))?;

        debug!("[explain] status={status} body_len={}", body.len());
        decode_reply(status, &body)
    }
}

/// Classify a send-phase reqwest failure.
///
/// Connect, timeout, and request-building failures mean no response ever
/// reached us; everything else is unknown territory.
fn map_send_error(e: reqwest::Error) -> ExplainError {
    if e.is_connect() || e.is_timeout() || e.is_request() {
        ExplainError::Transport(e.to_string())
    } else {
        ExplainError::Unknown(e.to_string())
    }
}

/// Interpret a received response per the contract.
///
/// A structured `error` field wins regardless of status code. A success
/// status must carry a non-empty `explanation`; anything else on a success
/// status is malformed. A non-success status without a structured error
/// surfaces as its status line.
fn decode_reply(status: StatusCode, body: &[u8]) -> ExplainResult<String> {
    let reply = serde_json::from_slice::<ExplainReply>(body).ok();

    if let Some(error) = reply.as_ref().and_then(|r| r.error.as_deref()) {
        if !error.trim().is_empty() {
            return Err(ExplainError::ServerReported(error.to_string()));
        }
    }

    if status.is_success() {
        return match reply.and_then(|r| r.explanation) {
            Some(explanation) if !explanation.trim().is_empty() => Ok(explanation),
            _ => Err(ExplainError::MalformedResponse),
        };
    }

    Err(ExplainError::Unknown(format!("server returned HTTP {status}")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_success_with_explanation() {
        let body = br#"{"explanation":"Entangled particles share a state."}"#;
        let result = decode_reply(StatusCode::OK, body).unwrap();
        assert_eq!(result, "Entangled particles share a state.");
    }

    #[test]
    fn test_decode_success_without_explanation_is_malformed() {
        for body in [
            br#"{"message":"hello"}"#.as_slice(),
            br#"{"explanation":""}"#.as_slice(),
            br#"{"explanation":"   "}"#.as_slice(),
            b"{}".as_slice(),
        ] {
            let result = decode_reply(StatusCode::OK, body);
            assert_eq!(result, Err(ExplainError::MalformedResponse));
        }
    }

    #[test]
    fn test_decode_non_json_success_is_malformed() {
        let result = decode_reply(StatusCode::OK, b"<html>oops</html>");
        assert_eq!(result, Err(ExplainError::MalformedResponse));
    }

    #[test]
    fn test_decode_structured_error_wins_over_status() {
        let body = br#"{"error":"model not found"}"#;
        for status in [
            StatusCode::OK,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::SERVICE_UNAVAILABLE,
        ] {
            let result = decode_reply(status, body);
            assert_eq!(
                result,
                Err(ExplainError::ServerReported("model not found".to_string()))
            );
        }
    }

    #[test]
    fn test_decode_error_status_without_body_is_unknown() {
        let result = decode_reply(StatusCode::BAD_GATEWAY, b"");
        match result {
            Err(ExplainError::Unknown(message)) => {
                assert!(message.contains("502"), "got: {message}");
            }
            other => panic!("expected Unknown, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_blank_error_field_is_ignored() {
        let body = br#"{"error":"  ","explanation":"fine"}"#;
        let result = decode_reply(StatusCode::OK, body).unwrap();
        assert_eq!(result, "fine");
    }

    // NOTE: depends on a locally running EITM backend; failures may be
    // environmental, not code bugs
    #[tokio::test]
    #[ignore = "requires a running backend at localhost:5000"]
    async fn test_explain_real() {
        let client = HttpExplainClient::new(&ClientConfig::default()).unwrap();
        let request = ExplainRequest::new("What is DNS?", "phi3:mini-4k-instruct");
        let result = client.explain(&request).await;
        let explanation =
            result.unwrap_or_else(|e| panic!("explain failed (backend not running?): {e}"));
        assert!(!explanation.is_empty());
    }

    #[tokio::test]
    async fn test_explain_unreachable_backend_is_transport_error() {
        // Port 9 (discard) on localhost is a safe connection-refused target.
        let config = ClientConfig {
            endpoint: "http://127.0.0.1:9/api/explain".to_string(),
            ..ClientConfig::default()
        };
        let client = HttpExplainClient::new(&config).unwrap();
        let request = ExplainRequest::new("anyone there?", "phi3:mini-4k-instruct");

        let result = client.explain(&request).await;
        assert!(matches!(result, Err(ExplainError::Transport(_))), "got {result:?}");
    }
}
