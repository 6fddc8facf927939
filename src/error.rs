//! Error types for Drawdown.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Drawdown operations.
pub type Result<T> = std::result::Result<T, DrawdownError>;

/// Errors that can occur in Drawdown.
#[derive(Debug, Error)]
pub enum DrawdownError {
    /// Failed to open a results container.
    #[error("Failed to open results container: {path}")]
    ContainerOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A mnemonic that does not name a well log channel.
    #[error("Unknown well log channel: {0}")]
    UnknownChannel(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DrawdownError {
    /// Create a ContainerOpen error.
    pub fn container_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::ContainerOpen { path, source }
    }

    /// Create an UnknownChannel error.
    pub fn unknown_channel(name: impl Into<String>) -> Self {
        Self::UnknownChannel(name.into())
    }
}
