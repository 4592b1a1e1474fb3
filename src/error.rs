//! Error types for pagectl
//!
//! Configuration errors are raised when the controller needs a collaborator
//! that is missing or misbehaving. Boundary hits during navigation are not
//! errors; those operations return `false` instead.

use thiserror::Error;

/// The main error type for pagectl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: no count provider set, please set it first")]
    MissingCountProvider,

    #[error("Configuration error: no page provider set, please set it first")]
    MissingPageProvider,

    #[error("Configuration error: count provider returned an invalid entry count: {message}")]
    InvalidCount { message: String },

    #[error("Configuration error: page size must be at least 1, got {size}")]
    InvalidPageSize { size: u64 },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Navigation Errors
    // ============================================================================
    #[error("Page {page} is out of range (1..={pages})")]
    PageOutOfRange { page: u64, pages: u64 },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid count error
    pub fn invalid_count(message: impl Into<String>) -> Self {
        Self::InvalidCount {
            message: message.into(),
        }
    }

    /// Check if this error belongs to the configuration tier
    ///
    /// These are programmer errors: the caller has to fix the controller's
    /// configuration before retrying.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::MissingCountProvider
                | Error::MissingPageProvider
                | Error::InvalidCount { .. }
                | Error::InvalidPageSize { .. }
                | Error::Config { .. }
                | Error::YamlParse(_)
                | Error::JsonParse(_)
        )
    }
}

/// Result type alias for pagectl
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::MissingCountProvider;
        assert_eq!(
            err.to_string(),
            "Configuration error: no count provider set, please set it first"
        );

        let err = Error::InvalidPageSize { size: 0 };
        assert_eq!(
            err.to_string(),
            "Configuration error: page size must be at least 1, got 0"
        );

        let err = Error::PageOutOfRange { page: 7, pages: 3 };
        assert_eq!(err.to_string(), "Page 7 is out of range (1..=3)");
    }

    #[test]
    fn test_is_configuration() {
        assert!(Error::MissingCountProvider.is_configuration());
        assert!(Error::MissingPageProvider.is_configuration());
        assert!(Error::invalid_count("negative").is_configuration());
        assert!(Error::InvalidPageSize { size: 0 }.is_configuration());
        assert!(Error::config("bad").is_configuration());

        assert!(!Error::PageOutOfRange { page: 2, pages: 1 }.is_configuration());
        assert!(!Error::Other("x".to_string()).is_configuration());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
