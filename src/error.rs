//! Error types for command resolution
//!
//! Provides structured errors for table construction, resolution and
//! configuration. Remote-store failures live in [`crate::core::failure`].

use thiserror::Error;

/// Main error type for the command core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// No table entry matches the keyword and argument shapes
    #[error("Unsupported invocation: \"{keyword}\" with {arg_count} argument(s)")]
    Unsupported { keyword: String, arg_count: usize },

    /// A requested option is not accepted by the resolved operation
    #[error("Option {option} is not accepted by \"{operation}\"")]
    OptionNotAccepted { option: String, operation: String },

    /// Two table entries share keyword, arity and shape signature
    #[error("Duplicate command entry: {keyword} with signature [{signature}]")]
    DuplicateEntry { keyword: String, signature: String },

    /// A table entry has a malformed shape signature
    #[error("Invalid signature for {keyword}: {message}")]
    InvalidSignature { keyword: String, message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Validation errors
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl CommandError {
    /// Create a new unsupported invocation error
    pub fn unsupported(keyword: impl Into<String>, arg_count: usize) -> Self {
        Self::Unsupported {
            keyword: keyword.into(),
            arg_count,
        }
    }

    /// Create a new option-not-accepted error
    pub fn option_not_accepted(option: impl Into<String>, operation: impl Into<String>) -> Self {
        Self::OptionNotAccepted {
            option: option.into(),
            operation: operation.into(),
        }
    }

    /// Create a new duplicate entry error
    pub fn duplicate_entry(keyword: impl Into<String>, signature: impl Into<String>) -> Self {
        Self::DuplicateEntry {
            keyword: keyword.into(),
            signature: signature.into(),
        }
    }

    /// Create a new invalid signature error
    pub fn invalid_signature(keyword: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSignature {
            keyword: keyword.into(),
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, CommandError>;
