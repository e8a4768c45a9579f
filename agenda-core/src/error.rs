//! Error types for agenda operations.

use thiserror::Error;

/// Errors that can occur in agenda operations.
#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("No form is open")]
    FormClosed,
}

/// Result type alias for agenda operations.
pub type AgendaResult<T> = Result<T, AgendaError>;
