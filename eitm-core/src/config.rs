//! Client configuration
//!
//! Endpoint, selectable models, and the default model are configuration
//! data, not code: the UI offers whatever the config lists, and the
//! request lifecycle never inspects model identifiers.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A selectable backend model: display name plus wire identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelChoice {
    /// Human-readable name shown in the selector.
    pub name: String,
    /// Identifier sent as `model_to_use`.
    pub id: String,
}

impl ModelChoice {
    pub fn new(name: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: id.into(),
        }
    }
}

/// Injected client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Fixed explanation endpoint; not changeable at runtime.
    pub endpoint: String,
    /// Identifier of the model preselected in the UI.
    pub default_model: String,
    /// Models the UI offers. Extending this list requires no code changes.
    pub models: Vec<ModelChoice>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://localhost:5000/api/explain".to_string(),
            default_model: "phi3:mini-4k-instruct".to_string(),
            models: vec![
                ModelChoice::new("Phi-3 Mini 4K Instruct", "phi3:mini-4k-instruct"),
                ModelChoice::new("Llama 3 8B Instruct", "llama3:8b-instruct"),
                ModelChoice::new("Qwen 1.8B Chat", "qwen:1.8b-chat"),
                ModelChoice::new("Gemma 2B Instruct", "gemma:2b-instruct"),
            ],
        }
    }
}

/// Configuration loading error.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Path of the optional user config file.
fn config_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("eitm")
        .join("config.json")
}

impl ClientConfig {
    /// Load the user config file if present, otherwise the built-in
    /// defaults. A missing file is normal; an unreadable or invalid one is
    /// an error the caller should surface at startup.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file())
    }

    /// Same as [`ClientConfig::load`] with an explicit path, for tests.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let config = serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(config)
    }

    /// Index of the configured default model in `models`.
    ///
    /// Falls back to the first entry when `default_model` names an
    /// identifier the list does not contain.
    #[must_use]
    pub fn default_index(&self) -> usize {
        self.models
            .iter()
            .position(|m| m.id == self.default_model)
            .unwrap_or(0)
    }

    /// Model identifier at `index`, clamped to the list.
    #[must_use]
    pub fn model_id(&self, index: usize) -> &str {
        self.models
            .get(index)
            .or_else(|| self.models.first())
            .map_or(self.default_model.as_str(), |m| m.id.as_str())
    }
}
