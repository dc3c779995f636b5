use thiserror::Error;

/// Unified error type for scm-version operations
#[derive(Error, Debug)]
pub enum ScmVersionError {
    #[error("Invalid version format: {0}")]
    InvalidFormat(String),

    #[error("Version overflow: {0}")]
    Overflow(String),

    #[error("Conflicting options: {0}")]
    ConflictingOptions(String),

    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in scm-version
pub type Result<T> = std::result::Result<T, ScmVersionError>;

impl ScmVersionError {
    /// Create an invalid format error with context
    pub fn invalid_format(msg: impl Into<String>) -> Self {
        ScmVersionError::InvalidFormat(msg.into())
    }

    /// Create a version overflow error with context
    pub fn overflow(msg: impl Into<String>) -> Self {
        ScmVersionError::Overflow(msg.into())
    }

    /// Create a conflicting options error with context
    pub fn conflicting_options(msg: impl Into<String>) -> Self {
        ScmVersionError::ConflictingOptions(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        ScmVersionError::Config(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScmVersionError::config("unreadable settings");
        assert_eq!(err.to_string(), "Configuration error: unreadable settings");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ScmVersionError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_error_from_git() {
        let git_err = git2::Error::from_str("repository not found");
        let err: ScmVersionError = git_err.into();
        assert!(err.to_string().starts_with("Git operation failed"));
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (ScmVersionError::invalid_format("x"), "Invalid version format"),
            (ScmVersionError::overflow("x"), "Version overflow"),
            (ScmVersionError::conflicting_options("x"), "Conflicting options"),
            (ScmVersionError::config("x"), "Configuration error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }

    #[test]
    fn test_error_keeps_context() {
        let err = ScmVersionError::invalid_format("'1.2' - expected X.Y.Z");
        assert!(err.to_string().contains("'1.2'"));
        assert!(matches!(err, ScmVersionError::InvalidFormat(_)));
    }
}
