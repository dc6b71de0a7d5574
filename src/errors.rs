//! Error types shared by the wrapper boundary and the configuration layer.
//!
//! [`WrapperError`] is the only error the tool adapter ever returns, and it
//! returns it untouched: whatever the engine wrapper reports reaches the
//! caller as-is. [`ConfigError`] covers loading `.codesniff.toml`.

use std::path::PathBuf;
use thiserror::Error;

/// Failure reported by a [`Wrapper`](crate::wrapper::Wrapper) implementation.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// The engine rejected the run configuration.
    #[error("Configuration rejected by {engine}: {message}")]
    Configuration { engine: String, message: String },

    /// `run` was triggered before any settings were applied.
    #[error("{engine} was run before settings were applied")]
    NotConfigured { engine: String },

    /// The engine binary could not be started.
    #[error("Failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// The engine ran but failed to complete the scan.
    #[error("{engine} failed with {status}: {message}")]
    Execution {
        engine: String,
        status: String,
        message: String,
    },

    /// Filesystem failure around the scan, e.g. preparing the report directory.
    #[error("I/O error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WrapperError {
    /// Create a configuration error for the given engine
    pub fn configuration(engine: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Configuration {
            engine: engine.into(),
            message: message.into(),
        }
    }

    /// Create an execution error for the given engine
    pub fn execution(
        engine: impl Into<String>,
        status: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Execution {
            engine: engine.into(),
            status: status.into(),
            message: message.into(),
        }
    }

    /// True for errors raised while accepting settings rather than while running.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::NotConfigured { .. })
    }
}

/// Failure while loading `.codesniff.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}
