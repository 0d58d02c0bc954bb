use thiserror::Error;

/// Workspace-wide error types for FibonroseTrust.
#[derive(Debug, Error)]
pub enum FibonroseError {
    /// A numeric argument was negative, non-finite, or otherwise out of range.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Resource not found (e.g., an unknown task id in the metrics collector).
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Filesystem error while reading or writing reports.
    #[error("I/O error: {0}")]
    Io(String),

    /// Configuration file could not be parsed.
    #[error("Config error: {0}")]
    Config(String),
}

impl FibonroseError {
    /// Shorthand for building an `InvalidArgument` error.
    pub fn invalid(msg: impl Into<String>) -> Self {
        FibonroseError::InvalidArgument(msg.into())
    }
}

impl From<serde_json::Error> for FibonroseError {
    fn from(e: serde_json::Error) -> Self {
        FibonroseError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for FibonroseError {
    fn from(e: std::io::Error) -> Self {
        FibonroseError::Io(e.to_string())
    }
}
