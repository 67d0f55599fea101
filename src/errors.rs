//! # Wall Errors
//!
//! Error types shared across the crate.
//!
//! All failures propagate synchronously to the caller: the engine never
//! retries, never logs and never suppresses.

use thiserror::Error;

/// Result type for wall operations
pub type WallResult<T> = Result<T, WallError>;

/// Errors raised by brick construction and rendering hand-off
#[derive(Debug, Clone, Error)]
pub enum WallError {
    /// Malformed call, e.g. a chunked brick spec with a zero chunk size
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A rendering attempt on a brick without a template identifier
    #[error("Brick does not define a template name")]
    MissingTemplate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_display() {
        let err = WallError::InvalidArgument("chunk size must be greater than zero".into());
        assert_eq!(
            format!("{}", err),
            "Invalid argument: chunk size must be greater than zero"
        );
    }

    #[test]
    fn test_missing_template_display() {
        let err = WallError::MissingTemplate;
        assert_eq!(format!("{}", err), "Brick does not define a template name");
    }
}
