//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `CRUMBS_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::path::RootPolicy;
use std::env;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use crumbs::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Recognized variables: `CRUMBS_ORIGIN`, `CRUMBS_SEPARATOR`,
    /// `CRUMBS_ROOT_POLICY`, `CRUMBS_OUTPUT_FORMAT`, `CRUMBS_SCRIPT_TAG`,
    /// `CRUMBS_PRETTY`.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., unknown output format, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(origin) = env::var("CRUMBS_ORIGIN") {
            config.origin = Some(origin);
        }

        if let Ok(separator) = env::var("CRUMBS_SEPARATOR") {
            config.separator = Some(separator);
        }

        if let Ok(policy) = env::var("CRUMBS_ROOT_POLICY") {
            config.root_policy = Some(RootPolicy::parse(&policy).map_err(|_| {
                Error::Validation {
                    field: "CRUMBS_ROOT_POLICY".into(),
                    message: format!("Invalid root policy: '{policy}' (expected normalized/strict)"),
                }
            })?);
        }

        if let Ok(format) = env::var("CRUMBS_OUTPUT_FORMAT") {
            config.output_format = Some(OutputFormat::parse(&format).map_err(|_| {
                Error::Validation {
                    field: "CRUMBS_OUTPUT_FORMAT".into(),
                    message: format!(
                        "Invalid output format: '{format}' (expected html/json-ld/json/human)"
                    ),
                }
            })?);
        }

        if let Ok(val) = env::var("CRUMBS_SCRIPT_TAG") {
            config.script_tag = Some(Self::parse_bool("CRUMBS_SCRIPT_TAG", &val)?);
        }

        if let Ok(val) = env::var("CRUMBS_PRETTY") {
            config.pretty = Some(Self::parse_bool("CRUMBS_PRETTY", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bool_true_variants() {
        for value in ["true", "TRUE", "1", "yes", "YES", "on", "ON"] {
            assert!(EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_false_variants() {
        for value in ["false", "FALSE", "0", "no", "NO", "off", "OFF"] {
            assert!(!EnvironmentConfig::parse_bool("test", value).unwrap());
        }
    }

    #[test]
    fn test_parse_bool_invalid() {
        let err = EnvironmentConfig::parse_bool("CRUMBS_PRETTY", "maybe").unwrap_err();
        assert!(err.to_string().contains("CRUMBS_PRETTY"));
    }
}
