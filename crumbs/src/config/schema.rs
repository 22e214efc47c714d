//! Configuration schema definitions.
//!
//! Every field is optional so that partial configs from several sources can
//! be merged; accessors fall back to the built-in defaults.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::output::{FormatOptions, OutputFormat, DEFAULT_SEPARATOR};
use crate::path::{RootPolicy, TrailResolver};
use crate::request::Origin;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use crumbs::config::Config;
/// use crumbs::output::OutputFormat;
///
/// let config = Config {
///     origin: Some("https://example.com".to_string()),
///     output_format: Some(OutputFormat::JsonLd),
///     ..Default::default()
/// };
/// assert_eq!(config.separator(), "/");
/// assert_eq!(config.output_format(), OutputFormat::JsonLd);
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Site origin used for absolute URLs in structured data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<String>,

    /// Separator shown between entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub separator: Option<String>,

    /// How the root page is detected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub root_policy: Option<RootPolicy>,

    /// Default output format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<OutputFormat>,

    /// Wrap JSON-LD output in a script element.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub script_tag: Option<bool>,

    /// Pretty-print JSON-LD output.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pretty: Option<bool>,
}

impl Config {
    /// The configured origin, parsed.
    ///
    /// # Errors
    ///
    /// Returns an error if an origin is set but invalid.
    pub fn origin(&self) -> Result<Option<Origin>> {
        self.origin
            .as_deref()
            .map(Origin::try_from)
            .transpose()
            .map_err(Into::into)
    }

    /// The separator, or `/` if unset.
    #[must_use]
    pub fn separator(&self) -> &str {
        self.separator.as_deref().unwrap_or(DEFAULT_SEPARATOR)
    }

    /// The root policy, or [`RootPolicy::Normalized`] if unset.
    #[must_use]
    pub fn root_policy(&self) -> RootPolicy {
        self.root_policy.unwrap_or_default()
    }

    /// The output format, or HTML if unset.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }

    /// A resolver honoring the configured root policy.
    #[must_use]
    pub fn resolver(&self) -> TrailResolver {
        TrailResolver::new().with_root_policy(self.root_policy())
    }

    /// Formatter settings derived from this config.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured origin is invalid.
    pub fn format_options(&self) -> Result<FormatOptions> {
        Ok(FormatOptions {
            origin: self.origin()?,
            separator: self.separator().to_string(),
            script_tag: self.script_tag.unwrap_or(false),
            pretty: self.pretty.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.separator(), "/");
        assert_eq!(config.root_policy(), RootPolicy::Normalized);
        assert_eq!(config.output_format(), OutputFormat::Html);
        assert!(config.origin().unwrap().is_none());

        let options = config.format_options().unwrap();
        assert!(!options.script_tag);
        assert!(options.pretty);
    }

    #[test]
    fn test_parse_yaml() {
        let yaml = r"
origin: https://example.com
separator: '›'
root_policy: strict
output_format: json-ld
script_tag: true
pretty: false
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.origin.as_deref(), Some("https://example.com"));
        assert_eq!(config.separator(), "›");
        assert_eq!(config.root_policy(), RootPolicy::Strict);
        assert_eq!(config.output_format(), OutputFormat::JsonLd);
        assert_eq!(config.script_tag, Some(true));
        assert_eq!(config.pretty, Some(false));
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: std::result::Result<Config, _> = serde_yaml::from_str("home_label: Start\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_origin_surfaces_on_access() {
        let config = Config {
            origin: Some("example.com".to_string()),
            ..Default::default()
        };
        assert!(config.origin().is_err());
        assert!(config.format_options().is_err());
    }

    #[test]
    fn test_resolver_uses_policy() {
        let config = Config {
            root_policy: Some(RootPolicy::Strict),
            ..Default::default()
        };
        assert_eq!(config.resolver().resolve("").len(), 1);
    }

    #[test]
    fn test_serialize_skips_unset() {
        let config = Config {
            separator: Some(">".to_string()),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("separator"));
        assert!(!yaml.contains("origin"));
        assert!(!yaml.contains("root_policy"));
    }
}
