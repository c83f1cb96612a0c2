//! Explanation service bridge.

use std::sync::mpsc::Sender;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::debug;
use tokio::runtime::Runtime;

use eitm_core::{ClientConfig, ExplainBackend, ExplainRequest, ExplainResult, HttpExplainClient};

/// Owns the async runtime and the HTTP transport.
///
/// `submit` spawns the request onto the runtime and returns immediately;
/// the resolution travels back over the channel the caller provided. The
/// session's `Loading` guard is what keeps this to one request at a time,
/// there is no queue here.
pub struct ExplainService {
    runtime: Runtime,
    backend: Arc<dyn ExplainBackend>,
}

impl ExplainService {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()
            .context("failed to start tokio runtime")?;

        let client =
            HttpExplainClient::new(config).context("failed to build explanation client")?;

        Ok(Self {
            runtime,
            backend: Arc::new(client),
        })
    }

    /// Issue one request; the outcome is delivered on `tx`.
    pub fn submit(&self, request: ExplainRequest, tx: Sender<ExplainResult<String>>) {
        let backend = Arc::clone(&self.backend);
        self.runtime.spawn(async move {
            let outcome = backend.explain(&request).await;
            // Receiver gone means the app is shutting down.
            if tx.send(outcome).is_err() {
                debug!("[backend] outcome dropped, receiver closed");
            }
        });
    }
}
