//! Backend layer: request execution.
//!
//! Fully decoupled from the UI: the update layer emits a submit command,
//! the main loop hands it here, and the outcome comes back over a channel
//! drained once per tick. The UI thread never blocks on the network.

mod explain_service;

pub use explain_service::ExplainService;
