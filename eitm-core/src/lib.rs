//! EITM Core Library
//!
//! Platform-independent client logic for the EITM explanation service:
//! - Wire types for the `/api/explain` HTTP contract (`types`)
//! - Injected client configuration (`config`)
//! - Error taxonomy with user-facing messages (`error`)
//! - The request lifecycle state machine (`session`)
//! - The HTTP transport behind a trait seam (`client`)
//!
//! This library is designed to be front-end independent: the state machine
//! and response decoding carry no I/O, and the transport is abstracted
//! through the [`ExplainBackend`] trait so UIs and tests can supply their
//! own.

pub mod client;
pub mod config;
pub mod error;
pub mod session;
pub mod types;

// Re-export common types
pub use client::{ExplainBackend, HttpExplainClient};
pub use config::{ClientConfig, ModelChoice};
pub use error::{ExplainError, ExplainResult};
pub use session::{ExplainSession, RequestState};
pub use types::{ExplainReply, ExplainRequest};
