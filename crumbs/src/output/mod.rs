//! Output formatting module for breadcrumb trails.
//!
//! A resolved [`Trail`] is consumed by independent formatters: the visible
//! HTML navigation, the `BreadcrumbList` JSON-LD for search engines, a raw
//! JSON dump, and a one-line human summary. None of them mutate the trail.

mod formatters;
mod html;
mod structured;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::path::Trail;
use crate::request::Origin;
use crate::{Error, Result};

pub use formatters::{HumanFormatter, JsonFormatter, JsonLdFormatter};
pub use html::{HtmlFormatter, DEFAULT_SEPARATOR};
pub use structured::{BreadcrumbList, ListItem, SCHEMA_CONTEXT};

/// Trait for formatting a breadcrumb trail into different output formats.
pub trait TrailFormatter: Send + Sync {
    /// Format the given trail into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., serialization errors).
    fn format(&self, trail: &Trail) -> Result<String>;
}

/// Available output formats for breadcrumb trails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// HTML navigation list.
    #[default]
    Html,
    /// `BreadcrumbList` JSON-LD.
    JsonLd,
    /// Raw trail as JSON.
    Json,
    /// Human-readable format.
    Human,
}

impl OutputFormat {
    /// Parse an output format from a string.
    ///
    /// Recognizes "html", "json-ld" (or "jsonld"), "json" and "human",
    /// case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the format is not recognized.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json-ld" | "jsonld" => Ok(Self::JsonLd),
            "json" => Ok(Self::Json),
            "human" => Ok(Self::Human),
            _ => Err(Error::Validation {
                field: "output_format".to_string(),
                message: format!(
                    "unknown output format '{s}': supported formats are html, json-ld, json, human"
                ),
            }),
        }
    }

    /// Create a formatter for this output format.
    ///
    /// # Errors
    ///
    /// Returns a validation error if JSON-LD is requested without an origin.
    pub fn create_formatter(&self, options: &FormatOptions) -> Result<Box<dyn TrailFormatter>> {
        match self {
            Self::Html => Ok(Box::new(HtmlFormatter::new(options.separator.clone()))),
            Self::JsonLd => {
                let origin = options.origin.clone().ok_or_else(|| Error::Validation {
                    field: "origin".to_string(),
                    message: "an origin is required for JSON-LD output".to_string(),
                })?;
                Ok(Box::new(
                    JsonLdFormatter::new(origin)
                        .with_script_tag(options.script_tag)
                        .with_pretty(options.pretty),
                ))
            }
            Self::Json => Ok(Box::new(JsonFormatter)),
            Self::Human => Ok(Box::new(HumanFormatter::new(options.separator.clone()))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::JsonLd => write!(f, "json-ld"),
            Self::Json => write!(f, "json"),
            Self::Human => write!(f, "human"),
        }
    }
}

/// Settings shared by the formatters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Site origin, required for JSON-LD.
    pub origin: Option<Origin>,
    /// Separator between entries in HTML and human output.
    pub separator: String,
    /// Wrap JSON-LD in a script element.
    pub script_tag: bool,
    /// Pretty-print JSON-LD.
    pub pretty: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            origin: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            script_tag: false,
            pretty: true,
        }
    }
}
