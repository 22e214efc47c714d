//! Error types for the crumbs library.
//!
//! Trail resolution and label formatting are total and never fail. The
//! errors here come from the layers around them: origin and URL handling,
//! configuration, and serialization.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a crumbs error.
///
/// # Examples
///
/// ```
/// use crumbs::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the crumbs library.
#[derive(Debug, Error)]
pub enum Error {
    /// An origin was not of the form `scheme://host[:port]`.
    #[error("invalid origin '{value}': {reason}")]
    InvalidOrigin {
        /// The rejected origin.
        value: String,
        /// The reason the origin is invalid.
        reason: String,
    },

    /// A URL could not be split into origin and path.
    #[error("invalid URL '{value}': {reason}")]
    InvalidUrl {
        /// The rejected URL.
        value: String,
        /// The reason the URL is invalid.
        reason: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// Structured data could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl From<crate::request::InvalidOriginError> for Error {
    fn from(err: crate::request::InvalidOriginError) -> Self {
        Self::InvalidOrigin {
            value: err.value,
            reason: err.reason,
        }
    }
}

impl Error {
    /// Check if error was caused by a bad origin or URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbs::Error;
    ///
    /// let err = Error::InvalidOrigin {
    ///     value: "example.com".to_string(),
    ///     reason: "missing scheme".to_string(),
    /// };
    /// assert!(err.is_invalid_input());
    /// ```
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidOrigin { .. } | Self::InvalidUrl { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_origin_error() {
        let err = Error::InvalidOrigin {
            value: "ftp://example.com".to_string(),
            reason: "scheme must be http or https".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid origin"));
        assert!(display.contains("ftp://example.com"));
        assert!(display.contains("http or https"));
    }

    #[test]
    fn test_invalid_url_error() {
        let err = Error::InvalidUrl {
            value: "https://".to_string(),
            reason: "missing host".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid URL"));
        assert!(display.contains("missing host"));
    }

    #[test]
    fn test_invalid_path_error() {
        let err = Error::InvalidPath {
            path: PathBuf::from("/invalid/crumbs.yaml"),
            reason: "does not exist".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("invalid path"));
        let normalized = display.replace(std::path::MAIN_SEPARATOR, "/");
        assert!(normalized.contains("/invalid/crumbs.yaml"));
        assert!(display.contains("does not exist"));
    }

    #[test]
    fn test_validation_error() {
        let err = Error::Validation {
            field: "separator".to_string(),
            message: "must be non-empty".to_string(),
        };
        let display = format!("{err}");
        assert!(display.contains("validation error"));
        assert!(display.contains("separator"));
        assert!(display.contains("must be non-empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(format!("{err}").contains("I/O error"));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_err = serde_yaml::from_str::<u32>("not: [a number").unwrap_err();
        let err: Error = yaml_err.into();
        assert!(format!("{err}").contains("configuration error"));
    }

    #[test]
    fn test_is_invalid_input() {
        let err = Error::InvalidUrl {
            value: "http://".to_string(),
            reason: "missing host".to_string(),
        };
        assert!(err.is_invalid_input());

        let err = Error::Validation {
            field: "origin".to_string(),
            message: "bad".to_string(),
        };
        assert!(!err.is_invalid_input());
    }
}
