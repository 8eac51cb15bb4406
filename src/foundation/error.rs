/// Convenience result type used across imaug.
pub type ImaugResult<T> = Result<T, ImaugError>;

/// Top-level error taxonomy. Nothing is caught or retried internally; every variant
/// propagates to the caller and aborts the current batch.
#[derive(thiserror::Error, Debug)]
pub enum ImaugError {
    /// Malformed, empty or unsupported image bytes.
    #[error("decode error: {0}")]
    Decode(String),

    /// A transform could not be applied (degenerate dimensions, inconsistent buffers).
    #[error("transform error: {0}")]
    Transform(String),

    /// Invalid configuration or upload metadata.
    #[error("validation error: {0}")]
    Validation(String),

    /// ZIP container assembly or inspection failed.
    #[error("archive error: {0}")]
    Archive(String),

    /// Filesystem failure in the workspace.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ImaugError {
    /// Build an [`ImaugError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build an [`ImaugError::Transform`] value.
    pub fn transform(msg: impl Into<String>) -> Self {
        Self::Transform(msg.into())
    }

    /// Build an [`ImaugError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`ImaugError::Archive`] value.
    pub fn archive(msg: impl Into<String>) -> Self {
        Self::Archive(msg.into())
    }
}

impl From<zip::result::ZipError> for ImaugError {
    fn from(err: zip::result::ZipError) -> Self {
        Self::Archive(err.to_string())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
