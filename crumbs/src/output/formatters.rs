//! Output formatter implementations.

use crate::path::Trail;
use crate::request::Origin;
use crate::Result;

use super::{BreadcrumbList, TrailFormatter};

/// Formatter for `BreadcrumbList` JSON-LD.
///
/// # Examples
///
/// ```
/// use crumbs::{resolve, Origin};
/// use crumbs::output::{JsonLdFormatter, TrailFormatter};
///
/// let origin = Origin::try_from("https://example.com").unwrap();
/// let out = JsonLdFormatter::new(origin)
///     .with_script_tag(true)
///     .format(&resolve("/blog"))
///     .unwrap();
///
/// assert!(out.starts_with(r#"<script type="application/ld+json">"#));
/// assert!(out.contains(r#""@type": "BreadcrumbList""#));
/// ```
pub struct JsonLdFormatter {
    origin: Origin,
    script_tag: bool,
    pretty: bool,
}

impl JsonLdFormatter {
    /// Create a JSON-LD formatter resolving targets against `origin`.
    ///
    /// Output is pretty-printed and not wrapped in a script element.
    #[must_use]
    pub fn new(origin: Origin) -> Self {
        Self {
            origin,
            script_tag: false,
            pretty: true,
        }
    }

    /// Wrap the output in `<script type="application/ld+json">`.
    #[must_use]
    pub fn with_script_tag(mut self, script_tag: bool) -> Self {
        self.script_tag = script_tag;
        self
    }

    /// Choose between pretty and compact JSON.
    #[must_use]
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl TrailFormatter for JsonLdFormatter {
    fn format(&self, trail: &Trail) -> Result<String> {
        let list = BreadcrumbList::from_trail(trail, &self.origin);

        let json = if self.pretty {
            serde_json::to_string_pretty(&list)?
        } else {
            serde_json::to_string(&list)?
        };

        if !self.script_tag {
            return Ok(json);
        }

        // Markup inside the element must not open or close tags
        let json = json.replace('<', "\\u003c");
        let (open, close) = if self.pretty { ("\n", "\n") } else { ("", "") };
        Ok(format!(
            "<script type=\"application/ld+json\">{open}{json}{close}</script>"
        ))
    }
}

/// Formatter for the raw trail as a JSON array of `{label, target}` objects.
pub struct JsonFormatter;

impl TrailFormatter for JsonFormatter {
    fn format(&self, trail: &Trail) -> Result<String> {
        Ok(serde_json::to_string_pretty(trail)?)
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter {
    separator: String,
}

impl HumanFormatter {
    /// Create a human formatter joining labels with `separator`.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl TrailFormatter for HumanFormatter {
    fn format(&self, trail: &Trail) -> Result<String> {
        if trail.is_empty() {
            return Ok("(root page, no breadcrumbs)".to_string());
        }

        let labels: Vec<&str> = trail.iter().map(|entry| entry.label()).collect();
        Ok(labels.join(&format!(" {} ", self.separator)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::resolve;

    fn origin() -> Origin {
        Origin::try_from("https://example.com").unwrap()
    }

    #[test]
    fn test_json_ld_pretty() {
        let out = JsonLdFormatter::new(origin())
            .format(&resolve("/a/b"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["itemListElement"].as_array().unwrap().len(), 3);
        assert!(out.contains('\n'));
    }

    #[test]
    fn test_json_ld_compact() {
        let out = JsonLdFormatter::new(origin())
            .with_pretty(false)
            .format(&resolve("/a"))
            .unwrap();
        assert!(!out.contains('\n'));
        assert!(out.starts_with("{\"@context\":\"https://schema.org\""));
    }

    #[test]
    fn test_json_ld_script_tag() {
        let out = JsonLdFormatter::new(origin())
            .with_script_tag(true)
            .with_pretty(false)
            .format(&resolve("/a"))
            .unwrap();
        assert!(out.starts_with("<script type=\"application/ld+json\">{"));
        assert!(out.ends_with("}</script>"));
    }

    #[test]
    fn test_json_ld_script_tag_escapes_markup() {
        let out = JsonLdFormatter::new(origin())
            .with_script_tag(true)
            .format(&resolve("/<script>"))
            .unwrap();
        assert_eq!(out.matches("<script").count(), 1);
        assert!(out.contains("\\u003cscript>"));
    }

    #[test]
    fn test_json_output() {
        let out = JsonFormatter.format(&resolve("/docs")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value[0]["label"], "Home");
        assert_eq!(value[1]["target"], "/docs");
    }

    #[test]
    fn test_json_output_root() {
        let out = JsonFormatter.format(&resolve("/")).unwrap();
        assert_eq!(out, "[]");
    }

    #[test]
    fn test_human_output() {
        let out = HumanFormatter::new("›")
            .format(&resolve("/blog/some-post-title"))
            .unwrap();
        assert_eq!(out, "Home › Blog › Some Post Title");
    }

    #[test]
    fn test_human_output_root() {
        let out = HumanFormatter::new("/").format(&resolve("/")).unwrap();
        assert!(out.contains("root page"));
    }
}
