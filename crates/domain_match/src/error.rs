//! Match domain errors
//!
//! Every operation on matches reports failures through `MatchError`. The
//! variants classify the failure; how it is presented to an end user is left
//! to the caller.

use core_kernel::{MatchId, TemporalError};
use thiserror::Error;

/// Errors that can occur in the match domain
#[derive(Debug, Error)]
pub enum MatchError {
    /// Caller input was malformed; nothing was sent to the store
    #[error("Validation error on {field}: {message}")]
    Validation {
        field: String,
        message: String,
    },

    /// No match exists with the given id
    #[error("Match not found: {0}")]
    NotFound(MatchId),

    /// The store rejected or failed to run the statement
    #[error("{context}: {source}")]
    Store {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl MatchError {
    /// Creates a validation error for a named input field
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        MatchError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Wraps a store failure with an operation-specific message
    ///
    /// # Example
    ///
    /// ```rust
    /// use domain_match::MatchError;
    ///
    /// let io = std::io::Error::new(std::io::ErrorKind::Other, "connection reset");
    /// let error = MatchError::store("failed to increment goals", io);
    /// assert_eq!(error.to_string(), "failed to increment goals: connection reset");
    /// ```
    pub fn store(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        MatchError::Store {
            context: context.into(),
            source: source.into(),
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, MatchError::Validation { .. })
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, MatchError::NotFound(_))
    }

    pub fn is_store(&self) -> bool {
        matches!(self, MatchError::Store { .. })
    }
}

impl From<TemporalError> for MatchError {
    fn from(error: TemporalError) -> Self {
        MatchError::validation("matchDate", error.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_error_becomes_match_date_validation() {
        let error: MatchError = TemporalError::InvalidFormat("04/01/2025".to_string()).into();
        match error {
            MatchError::Validation { field, message } => {
                assert_eq!(field, "matchDate");
                assert!(message.contains("04/01/2025"));
            }
            other => panic!("Expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_store_error_keeps_source() {
        let source = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "socket closed");
        let error = MatchError::store("failed to set extra time", source);

        assert!(error.is_store());
        assert!(std::error::Error::source(&error).is_some());
        assert_eq!(error.to_string(), "failed to set extra time: socket closed");
    }

    #[test]
    fn test_not_found_display() {
        let error = MatchError::NotFound(MatchId::new(99));
        assert!(error.is_not_found());
        assert_eq!(error.to_string(), "Match not found: 99");
    }
}
