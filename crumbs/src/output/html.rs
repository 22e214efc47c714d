//! HTML trail rendering.
//!
//! Markup is built with `maud`, which escapes every interpolated label,
//! target and separator.

use maud::html;

use crate::path::Trail;
use crate::Result;

use super::TrailFormatter;

/// Separator shown between entries when none is configured.
pub const DEFAULT_SEPARATOR: &str = "/";

/// Formatter for the visible navigation trail.
///
/// Every entry but the current page becomes a link. The current page is
/// plain text marked with `aria-current="page"`. Separators sit between
/// entries and never after the last one.
///
/// # Examples
///
/// ```
/// use crumbs::resolve;
/// use crumbs::output::{HtmlFormatter, TrailFormatter};
///
/// let html = HtmlFormatter::new(">").format(&resolve("/blog")).unwrap();
/// assert!(html.contains(r#"<a href="/">Home</a>"#));
/// assert!(html.contains(r#"<span aria-current="page">Blog</span>"#));
/// ```
pub struct HtmlFormatter {
    separator: String,
}

impl HtmlFormatter {
    /// Create an HTML formatter using `separator` between entries.
    #[must_use]
    pub fn new(separator: impl Into<String>) -> Self {
        Self {
            separator: separator.into(),
        }
    }
}

impl Default for HtmlFormatter {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATOR)
    }
}

impl TrailFormatter for HtmlFormatter {
    fn format(&self, trail: &Trail) -> Result<String> {
        if trail.is_empty() {
            return Ok(String::new());
        }

        let markup = html! {
            nav aria-label="Breadcrumb" {
                ol {
                    @for entry in trail {
                        @if trail.is_last(entry) {
                            li { span aria-current="page" { (entry.label()) } }
                        } @else {
                            li { a href=(entry.target()) { (entry.label()) } }
                            li aria-hidden="true" { (self.separator) }
                        }
                    }
                }
            }
        };

        Ok(markup.into_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::resolve;

    #[test]
    fn test_empty_trail_renders_nothing() {
        let html = HtmlFormatter::default().format(&resolve("/")).unwrap();
        assert!(html.is_empty());
    }

    #[test]
    fn test_full_markup() {
        let html = HtmlFormatter::default()
            .format(&resolve("/blog/some-post-title"))
            .unwrap();
        let expected = concat!(
            "<nav aria-label=\"Breadcrumb\"><ol>",
            "<li><a href=\"/\">Home</a></li>",
            "<li aria-hidden=\"true\">/</li>",
            "<li><a href=\"/blog\">Blog</a></li>",
            "<li aria-hidden=\"true\">/</li>",
            "<li><span aria-current=\"page\">Some Post Title</span></li>",
            "</ol></nav>",
        );
        assert_eq!(html, expected);
    }

    #[test]
    fn test_separator_count() {
        let html = HtmlFormatter::new("›").format(&resolve("/a/b/c")).unwrap();
        // Four entries, three separators
        assert_eq!(html.matches("aria-hidden").count(), 3);
        assert!(html.ends_with("</span></li></ol></nav>"));
    }

    #[test]
    fn test_last_entry_is_not_a_link() {
        let html = HtmlFormatter::default().format(&resolve("/a")).unwrap();
        assert_eq!(html.matches("<a href").count(), 1);
        assert!(!html.contains("href=\"/a\""));
    }

    #[test]
    fn test_escapes_labels_and_targets() {
        let html = HtmlFormatter::new("<>")
            .format(&resolve("/q&a/<script>"))
            .unwrap();
        assert!(html.contains("<a href=\"/q&amp;a\">Q&amp;a</a>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("<li aria-hidden=\"true\">&lt;&gt;</li>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_escapes_quotes_in_attributes() {
        let html = HtmlFormatter::default()
            .format(&resolve("/say-\"hi\"/end"))
            .unwrap();
        assert!(html.contains("href=\"/say-&quot;hi&quot;\""));
        assert!(html.contains(">Say &quot;hi&quot;</a>"));
    }
}
