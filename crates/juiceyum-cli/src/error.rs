//! CLI error types with exit code handling
//!
//! Only configuration-level failures terminate the process with a non-zero
//! exit: per-app and per-repo failures are printed inside the command loops
//! and never surface here.

use miette::Diagnostic;
use thiserror::Error;

use crate::exit_codes;

/// CLI-specific error type that includes exit code information
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// Persisted state is unreadable or unwritable; nothing can proceed
    #[error("Configuration error: {message}")]
    #[diagnostic(code(juiceyum::cli::config))]
    Config { message: String },

    /// User provided invalid input
    #[error("{message}")]
    #[diagnostic(code(juiceyum::cli::input))]
    Input { message: String },

    /// Internal error (runtime, unexpected failure)
    #[error("Internal error: {message}")]
    #[diagnostic(code(juiceyum::cli::internal))]
    Internal { message: String },
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Config { .. } => exit_codes::CONFIG_ERROR,
            CliError::Input { .. } => exit_codes::USAGE_ERROR,
            CliError::Internal { .. } => exit_codes::ERROR,
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn input(message: impl Into<String>) -> Self {
        Self::Input {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl From<juiceyum_core::CoreError> for CliError {
    fn from(err: juiceyum_core::CoreError) -> Self {
        CliError::Config {
            message: err.to_string(),
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
