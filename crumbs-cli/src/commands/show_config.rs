//! Command to show the effective configuration.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::Args;
use crumbs::Config;

/// Print the merged configuration as YAML.
#[derive(Args)]
pub struct ShowConfigCommand {
    /// Include built-in defaults for unset fields
    #[arg(long)]
    pub with_defaults: bool,
}

impl ShowConfigCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut config = load_configuration(global, Config::default())?;

        if self.with_defaults {
            config = fill_defaults(config);
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| CliError::Library(crumbs::Error::from(e)))?;
        print!("{yaml}");
        Ok(())
    }
}

/// Materialize every defaulted field so the output shows effective values.
fn fill_defaults(config: Config) -> Config {
    Config {
        separator: Some(config.separator().to_string()),
        root_policy: Some(config.root_policy()),
        output_format: Some(config.output_format()),
        script_tag: Some(config.script_tag.unwrap_or(false)),
        pretty: Some(config.pretty.unwrap_or(true)),
        origin: config.origin,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crumbs::output::OutputFormat;
    use crumbs::RootPolicy;

    #[test]
    fn test_fill_defaults() {
        let filled = fill_defaults(Config::default());
        assert_eq!(filled.separator.as_deref(), Some("/"));
        assert_eq!(filled.root_policy, Some(RootPolicy::Normalized));
        assert_eq!(filled.output_format, Some(OutputFormat::Html));
        assert_eq!(filled.script_tag, Some(false));
        assert_eq!(filled.pretty, Some(true));
        assert!(filled.origin.is_none());
    }

    #[test]
    fn test_fill_defaults_keeps_values() {
        let config = Config {
            origin: Some("https://example.com".to_string()),
            separator: Some("›".to_string()),
            ..Default::default()
        };
        let filled = fill_defaults(config);
        assert_eq!(filled.origin.as_deref(), Some("https://example.com"));
        assert_eq!(filled.separator.as_deref(), Some("›"));
    }
}
