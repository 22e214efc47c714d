//! Request path normalization.
//!
//! Request paths arrive with leading, trailing, or doubled separators. This
//! module reduces them to an ordered list of non-empty segments and back.

/// The path separator.
pub const SEPARATOR: char = '/';

/// Split a path into its non-empty segments.
///
/// Segments that are empty or consist only of whitespace are dropped;
/// everything else is kept verbatim and in order.
///
/// # Examples
///
/// ```
/// use crumbs::path::normalize::segments;
///
/// assert_eq!(segments("/blog//some-post/"), vec!["blog", "some-post"]);
/// assert!(segments("/").is_empty());
/// assert!(segments("").is_empty());
/// ```
#[must_use]
pub fn segments(path: &str) -> Vec<&str> {
    path.split(SEPARATOR)
        .filter(|segment| !segment.trim().is_empty())
        .collect()
}

/// Join segments into a root-relative path with a leading separator.
///
/// An empty slice yields `/`.
///
/// # Examples
///
/// ```
/// use crumbs::path::normalize::join;
///
/// assert_eq!(join(&["blog", "post"]), "/blog/post");
/// assert_eq!(join(&[]), "/");
/// ```
#[must_use]
pub fn join(segments: &[&str]) -> String {
    if segments.is_empty() {
        return SEPARATOR.to_string();
    }

    let capacity = segments.iter().map(|s| s.len() + 1).sum();
    let mut joined = String::with_capacity(capacity);
    for segment in segments {
        joined.push(SEPARATOR);
        joined.push_str(segment);
    }
    joined
}

/// Normalize a path by dropping empty segments.
///
/// The result always starts with a separator and never ends with one,
/// except for the root itself.
///
/// # Examples
///
/// ```
/// use crumbs::path::normalize::normalize_path;
///
/// assert_eq!(normalize_path("blog//post/"), "/blog/post");
/// assert_eq!(normalize_path("//"), "/");
/// ```
#[must_use]
pub fn normalize_path(path: &str) -> String {
    join(&segments(path))
}

/// Returns `true` if the path has no segments at all.
#[must_use]
pub fn is_root(path: &str) -> bool {
    segments(path).is_empty()
}
