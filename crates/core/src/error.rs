//! Error types for the transport adapter

use thiserror::Error;

/// Failures of the adapter itself (never the transported payload)
#[derive(Error, Debug)]
pub enum CoreError {
    /// Transport text is not a valid error record
    #[error("Parse error: {0}")]
    Parse(#[source] serde_json::Error),

    /// A codec was already installed at the registration point
    #[error("Transport codec already installed")]
    AlreadyInstalled,

    #[error("Invalid reason encoding: {0}")]
    InvalidEncoding(String),
}

/// Result type alias for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
