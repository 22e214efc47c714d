//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::request::Origin;

/// Longest separator accepted.
const MAX_SEPARATOR_CHARS: usize = 16;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use crumbs::config::{Config, ConfigValidator};
///
/// let config = Config::default();
/// ConfigValidator::validate(&config).unwrap();
///
/// let bad = Config { origin: Some("example.com".to_string()), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns validation errors for invalid configurations.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref origin) = config.origin {
            Self::validate_origin(origin)?;
        }

        if let Some(ref separator) = config.separator {
            Self::validate_separator(separator)?;
        }

        Ok(())
    }

    fn validate_origin(origin: &str) -> Result<()> {
        Origin::try_from(origin)
            .map(|_| ())
            .map_err(|e| Error::Validation {
                field: "origin".into(),
                message: e.to_string(),
            })
    }

    /// Separators must be short, visible, single-line text.
    fn validate_separator(separator: &str) -> Result<()> {
        if separator.trim().is_empty() {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }

        if separator.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: "separator".into(),
                message: "Cannot contain control characters".into(),
            });
        }

        if separator.chars().count() > MAX_SEPARATOR_CHARS {
            return Err(Error::Validation {
                field: "separator".into(),
                message: format!("Cannot exceed {MAX_SEPARATOR_CHARS} characters"),
            });
        }

        Ok(())
    }
}
