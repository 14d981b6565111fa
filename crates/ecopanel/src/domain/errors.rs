//! Domain Errors
//!
//! Error types for domain operations.

use std::time::Duration;

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Upstream error ({status}): {message}")]
    Upstream { status: u16, message: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Upstream timed out after {0:?}")]
    Timeout(Duration),
}

impl DomainError {
    pub fn upstream<T: Into<String>>(status: u16, message: T) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Failures caused by the external model rather than by the caller
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Upstream { .. } | Self::Transport(_) | Self::Timeout(_)
        )
    }
}
