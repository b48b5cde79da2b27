//! Error types for labelgraph
//!
//! This module defines all error types used throughout the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Partition operations on the typed API are total: they never fail once a
//! partition exists. Errors only surface at the configuration boundary, where
//! untyped input (TOML, JSON) can carry missing or null values.

use std::io;
use thiserror::Error;

/// Result type alias for labelgraph operations
pub type Result<T> = std::result::Result<T, PartitionError>;

/// Error types for partition construction and configuration
#[derive(Debug, Error)]
pub enum PartitionError {
    /// A required argument was absent (null in the input document)
    ///
    /// This is a programming error on the caller's side. It is raised at the
    /// call boundary and is never retried.
    #[error("Precondition violation: {message}")]
    PreconditionViolation {
        /// Name of the offending argument
        argument: &'static str,
        /// Human readable description
        message: String,
    },

    /// Configuration document could not be parsed or holds an unknown value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// I/O error while reading or writing a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl PartitionError {
    /// Precondition violation for a null argument
    pub fn null_argument(argument: &'static str) -> Self {
        PartitionError::PreconditionViolation {
            argument,
            message: format!("{} cannot be null", argument),
        }
    }

    /// Invalid configuration error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        PartitionError::InvalidConfig(message.into())
    }

    /// Check if this is a precondition violation
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, PartitionError::PreconditionViolation { .. })
    }

    /// Stable error code, for callers that map errors onto their own taxonomy
    pub fn error_code(&self) -> &'static str {
        match self {
            PartitionError::PreconditionViolation { .. } => "PreconditionViolation",
            PartitionError::InvalidConfig(_) => "InvalidConfig",
            PartitionError::Io(_) => "Io",
        }
    }
}
