//! Trail resolution.
//!
//! This module provides the `TrailResolver` type, which turns the current
//! request path into the ordered breadcrumb trail for that page.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::label::format_label;
use crate::path::normalize::{join, segments};
use crate::path::types::{Trail, TrailEntry, HOME_TARGET};

/// How the resolver decides that a path is the site root.
///
/// The root page gets an empty trail; every other page gets a trail that
/// starts with the `Home` entry.
///
/// # Examples
///
/// ```
/// use crumbs::path::{RootPolicy, TrailResolver};
///
/// let normalized = TrailResolver::new();
/// assert!(normalized.resolve("").is_empty());
///
/// let strict = TrailResolver::new().with_root_policy(RootPolicy::Strict);
/// assert_eq!(strict.resolve("").len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootPolicy {
    /// Any path without segments is the root (`""`, `"/"`, `"//"`).
    #[default]
    Normalized,
    /// Only the literal string `"/"` is the root.
    Strict,
}

impl RootPolicy {
    /// Parses a root policy from a string.
    ///
    /// Recognizes "normalized" and "strict" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns a validation error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbs::path::RootPolicy;
    ///
    /// assert_eq!(RootPolicy::parse("STRICT").unwrap(), RootPolicy::Strict);
    /// assert!(RootPolicy::parse("loose").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "normalized" => Ok(Self::Normalized),
            "strict" => Ok(Self::Strict),
            _ => Err(Error::Validation {
                field: "root_policy".to_string(),
                message: format!("unknown root policy '{s}': expected normalized or strict"),
            }),
        }
    }

    fn is_root(self, path: &str, segment_count: usize) -> bool {
        match self {
            Self::Normalized => segment_count == 0,
            Self::Strict => path == HOME_TARGET,
        }
    }
}

impl fmt::Display for RootPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Normalized => write!(f, "normalized"),
            Self::Strict => write!(f, "strict"),
        }
    }
}

/// Resolves request paths into breadcrumb trails.
///
/// Resolution is pure and total: any string produces a well-defined trail,
/// and resolving the same path twice yields equal trails.
///
/// # Examples
///
/// ```
/// use crumbs::path::TrailResolver;
///
/// let trail = TrailResolver::new().resolve("/blog/some-post-title");
/// let labels: Vec<&str> = trail.iter().map(|e| e.label()).collect();
/// assert_eq!(labels, vec!["Home", "Blog", "Some Post Title"]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrailResolver {
    root_policy: RootPolicy,
}

impl TrailResolver {
    /// Create a resolver using [`RootPolicy::Normalized`].
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure how the root page is detected.
    #[must_use]
    pub fn with_root_policy(mut self, root_policy: RootPolicy) -> Self {
        self.root_policy = root_policy;
        self
    }

    /// The configured root policy.
    #[must_use]
    pub fn root_policy(&self) -> RootPolicy {
        self.root_policy
    }

    /// Resolve `current_path` into its breadcrumb trail.
    ///
    /// Empty and whitespace-only segments are dropped. Each remaining
    /// segment contributes one entry whose target is the path up to and
    /// including that segment. Unless the path is the root, the trail is
    /// prefixed with the `Home` entry.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbs::path::TrailResolver;
    ///
    /// let resolver = TrailResolver::new();
    ///
    /// assert!(resolver.resolve("/").is_empty());
    /// assert_eq!(
    ///     resolver.resolve("/blog//some-post-title/"),
    ///     resolver.resolve("/blog/some-post-title"),
    /// );
    /// ```
    #[must_use]
    pub fn resolve(&self, current_path: &str) -> Trail {
        let segments = segments(current_path);

        if self.root_policy.is_root(current_path, segments.len()) {
            log::trace!("path {current_path:?} is the root, trail is empty");
            return Trail::default();
        }

        let entries: Vec<TrailEntry> = std::iter::once(TrailEntry::home())
            .chain(segments.iter().enumerate().map(|(i, segment)| {
                TrailEntry::new(format_label(segment), join(&segments[..=i]))
            }))
            .collect();

        log::debug!(
            "resolved {current_path:?} into {} entries ({} segments)",
            entries.len(),
            segments.len()
        );

        Trail::from_entries(entries)
    }
}

/// Resolve `current_path` with the default resolver.
///
/// # Examples
///
/// ```
/// use crumbs::resolve;
///
/// let trail = resolve("/a/b");
/// let targets: Vec<&str> = trail.iter().map(|e| e.target()).collect();
/// assert_eq!(targets, vec!["/", "/a", "/a/b"]);
/// ```
#[must_use]
pub fn resolve(current_path: &str) -> Trail {
    TrailResolver::new().resolve(current_path)
}
