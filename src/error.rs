//! Error types for the calconv library.

use thiserror::Error;

/// Errors that can occur in calconv operations.
#[derive(Error, Debug)]
pub enum CalconvError {
    #[error("Converter with name '{0}' was not found (neither in configuration nor by type name)")]
    ConverterNotFound(String),

    #[error("Calendar source with name '{0}' has not been declared in the container")]
    SourceNotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Conversion error: {0}")]
    Convert(String),

    #[error("Source error: {0}")]
    Source(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for calconv operations.
pub type CalconvResult<T> = Result<T, CalconvError>;
