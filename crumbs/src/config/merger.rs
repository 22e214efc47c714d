//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use crumbs::config::{Config, ConfigMerger};
///
/// let low = Config { separator: Some("/".to_string()), ..Default::default() };
/// let high = Config { separator: Some("›".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.separator(), "›");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// Every field is a plain override: a value set in `source` replaces
    /// the value in `target`, an unset one leaves it alone.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.origin.is_some() {
            target.origin.clone_from(&source.origin);
        }

        if source.separator.is_some() {
            target.separator.clone_from(&source.separator);
        }

        if source.root_policy.is_some() {
            target.root_policy = source.root_policy;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.script_tag.is_some() {
            target.script_tag = source.script_tag;
        }

        if source.pretty.is_some() {
            target.pretty = source.pretty;
        }
    }
}
