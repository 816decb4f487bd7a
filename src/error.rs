//! Crate error type.
//!
//! The policy functions and the seek calculator are infallible. Errors
//! only arise in the layers around them: parsing operator input, looking
//! up a policy by name, validating a request, totalling a seek that does
//! not fit in a `u64`, and reading/writing files.

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced before (or after) a simulation runs.
#[derive(Debug, Error)]
pub enum DiskSchedError {
    /// Operator input could not be turned into typed values.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Policy name did not match any of the six known policies.
    #[error("Unknown policy '{name}' (expected one of: fcfs, sstf, scan, cscan, look, clook)")]
    UnknownPolicy { name: String },

    /// Direction name did not match `lower` or `higher`.
    #[error("Unknown direction '{name}' (expected 'lower' or 'higher')")]
    UnknownDirection { name: String },

    /// The request failed one or more validation checks.
    #[error("Validation failed: {}", join_messages(.0))]
    Validation(Vec<ValidationError>),

    /// The head path is too long to total in a `u64`.
    #[error("Total seek for {policy} exceeds {}", u64::MAX)]
    SeekOverflow { policy: String },

    /// File access failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DiskSchedError {
    /// Creates an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates an unknown policy error.
    pub fn unknown_policy(name: impl Into<String>) -> Self {
        Self::UnknownPolicy { name: name.into() }
    }

    /// Creates an unknown direction error.
    pub fn unknown_direction(name: impl Into<String>) -> Self {
        Self::UnknownDirection { name: name.into() }
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias used across the input and driver layers.
pub type Result<T> = std::result::Result<T, DiskSchedError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_unknown_policy_message() {
        let err = DiskSchedError::unknown_policy("fifo");
        assert!(err.to_string().contains("'fifo'"));
    }

    #[test]
    fn test_validation_message_joins_all() {
        let err = DiskSchedError::Validation(vec![
            ValidationError {
                kind: ValidationErrorKind::EmptyRequests,
                message: "no requests".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::NonPositiveTrackBound,
                message: "bad bound".into(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: no requests; bad bound"
        );
    }
}
