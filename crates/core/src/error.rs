//! Error types for stransi

use thiserror::Error;

/// Main error type for stransi operations
#[derive(Error, Debug)]
pub enum StransiError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Text handed to the escape constructor is not a CSI sequence
    #[error("Not an escape sequence: {text:?}")]
    MalformedEscape {
        /// The rejected text
        text: String,
    },

    /// Generic error
    #[error("Error: {0}")]
    Generic(String),
}
