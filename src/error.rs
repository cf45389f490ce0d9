use thiserror::Error;

/// Unified error type for patch-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("Invalid version request: {0}")]
    InvalidRequest(String),

    #[error("Version overflow: {0}")]
    VersionOverflow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in patch-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid request error with context
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        ReleaseError::InvalidRequest(msg.into())
    }

    /// Create a version overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        ReleaseError::VersionOverflow(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ReleaseError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        ReleaseError::Tag(msg.into())
    }
}
