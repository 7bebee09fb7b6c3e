//! Core error types used across the system

use thiserror::Error;

/// Core error type for the kernel
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid identifier: '{0}'")]
    InvalidId(String),
}

impl CoreError {
    pub fn invalid_id(raw: impl Into<String>) -> Self {
        CoreError::InvalidId(raw.into())
    }
}
