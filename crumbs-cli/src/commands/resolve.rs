//! Resolve command implementation.
//!
//! This module implements the `resolve` command, which turns a request path
//! or full URL into its breadcrumb trail and prints it as HTML, JSON-LD,
//! JSON or plain text.

use crate::error::CliError;
use crate::utils::{load_configuration, GlobalOptions};
use clap::{Args, ValueEnum};
use crumbs::output::OutputFormat;
use crumbs::{Config, RequestContext, RootPolicy};

/// Resolve a path or URL into a breadcrumb trail.
#[derive(Args)]
pub struct ResolveCommand {
    /// Root-relative path (e.g. /blog/post) or absolute http(s) URL
    #[arg(value_name = "PATH_OR_URL")]
    pub target: String,

    /// Site origin for absolute URLs in JSON-LD (overrides the URL's own origin)
    #[arg(long, value_name = "URL")]
    pub origin: Option<String>,

    /// Output format
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<FormatArg>,

    /// Separator between entries in HTML and human output
    #[arg(long, value_name = "TEXT")]
    pub separator: Option<String>,

    /// Wrap JSON-LD in a <script type="application/ld+json"> element
    #[arg(long)]
    pub script_tag: bool,

    /// Print compact JSON-LD instead of pretty-printed
    #[arg(long)]
    pub compact: bool,

    /// How the site root is detected (overrides config and environment)
    #[arg(long, value_enum, ignore_case = true)]
    pub root_policy: Option<RootPolicyArg>,
}

/// Root detection policy for the resolve command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RootPolicyArg {
    /// Any path without segments is the root
    Normalized,
    /// Only the literal path "/" is the root
    Strict,
}

impl From<RootPolicyArg> for RootPolicy {
    fn from(arg: RootPolicyArg) -> Self {
        match arg {
            RootPolicyArg::Normalized => RootPolicy::Normalized,
            RootPolicyArg::Strict => RootPolicy::Strict,
        }
    }
}

/// Output format for the resolve command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// HTML navigation list
    Html,
    /// BreadcrumbList JSON-LD
    JsonLd,
    /// Raw trail as JSON
    Json,
    /// Labels joined by the separator
    Human,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Html => OutputFormat::Html,
            FormatArg::JsonLd => OutputFormat::JsonLd,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Human => OutputFormat::Human,
        }
    }
}

impl ResolveCommand {
    /// Overrides contributed by command-line flags.
    ///
    /// Flags that were not given leave the lower-precedence value alone.
    fn overrides(&self) -> Config {
        Config {
            origin: self.origin.clone(),
            separator: self.separator.clone(),
            root_policy: self.root_policy.map(Into::into),
            output_format: self.format.map(Into::into),
            script_tag: self.script_tag.then_some(true),
            pretty: self.compact.then_some(false),
        }
    }

    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global, self.overrides())?;
        let context = RequestContext::parse(&self.target)?;

        let mut options = config.format_options()?;
        if self.origin.is_none() {
            if let Some(origin) = context.origin() {
                options.origin = Some(origin.clone());
            }
        }

        let trail = config.resolver().resolve(context.path());
        log::info!(
            "resolved {} into {} entries (root policy: {})",
            context.path(),
            trail.len(),
            config.root_policy()
        );

        let format = config.output_format();
        let formatter = format.create_formatter(&options)?;
        let output = formatter.format(&trail)?;

        if !output.is_empty() {
            println!("{output}");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn command(target: &str) -> ResolveCommand {
        ResolveCommand {
            target: target.to_string(),
            origin: None,
            format: None,
            separator: None,
            script_tag: false,
            compact: false,
            root_policy: None,
        }
    }

    #[test]
    fn test_no_flags_no_overrides() {
        assert_eq!(command("/a").overrides(), Config::default());
    }

    #[test]
    fn test_flags_become_overrides() {
        let cmd = ResolveCommand {
            origin: Some("https://example.com".to_string()),
            format: Some(FormatArg::JsonLd),
            separator: Some("›".to_string()),
            script_tag: true,
            compact: true,
            root_policy: Some(RootPolicyArg::Strict),
            ..command("/a")
        };
        let overrides = cmd.overrides();

        assert_eq!(overrides.origin.as_deref(), Some("https://example.com"));
        assert_eq!(overrides.output_format, Some(OutputFormat::JsonLd));
        assert_eq!(overrides.separator.as_deref(), Some("›"));
        assert_eq!(overrides.script_tag, Some(true));
        assert_eq!(overrides.pretty, Some(false));
        assert_eq!(overrides.root_policy, Some(RootPolicy::Strict));
    }

    #[test]
    fn test_root_policy_flag_can_restore_normalized() {
        let cmd = ResolveCommand {
            root_policy: Some(RootPolicyArg::Normalized),
            ..command("")
        };
        assert_eq!(cmd.overrides().root_policy, Some(RootPolicy::Normalized));
    }
}
