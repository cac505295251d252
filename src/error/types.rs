//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for txquery operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QueryError {
    /// Configuration Error - missing or invalid request file
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    /// Invalid Argument - a request field is absent, non-numeric or out of range
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument { field: String, message: String },

    /// Parse Error - a command string is not a well-formed `get_transactions` invocation
    #[error("Parse error: {message}")]
    Parse { message: String },
}

impl QueryError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Configuration { .. } => 1,
            Self::InvalidArgument { .. } => 2,
            Self::Parse { .. } => 3,
        }
    }

    /// Create a configuration error
    #[inline]
    pub fn configuration<S: Into<String>>(message: S) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid argument error for the named field
    #[inline]
    pub fn invalid_argument<F: Into<String>, S: Into<String>>(field: F, message: S) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a parse error
    #[inline]
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}
