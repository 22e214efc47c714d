//! Trail entry and trail types.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Label of the entry that every non-root trail starts with.
pub const HOME_LABEL: &str = "Home";

/// Target of the home entry.
pub const HOME_TARGET: &str = "/";

/// One step in the navigation hierarchy from the site root to the current page.
///
/// # Examples
///
/// ```
/// use crumbs::TrailEntry;
///
/// let entry = TrailEntry::new("Blog", "/blog");
/// assert_eq!(entry.label(), "Blog");
/// assert_eq!(entry.target(), "/blog");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrailEntry {
    label: String,
    target: String,
}

impl TrailEntry {
    /// Creates a new trail entry.
    #[must_use]
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
        }
    }

    /// Creates the fixed `Home` entry pointing at `/`.
    #[must_use]
    pub fn home() -> Self {
        Self::new(HOME_LABEL, HOME_TARGET)
    }

    /// Human-readable display text.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Root-relative navigable path.
    #[must_use]
    pub fn target(&self) -> &str {
        &self.target
    }
}

impl fmt::Display for TrailEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.label, self.target)
    }
}

/// An ordered breadcrumb trail, root first and current page last.
///
/// A trail is built once by the resolver and never mutated afterwards;
/// renderers only read it.
///
/// # Examples
///
/// ```
/// use crumbs::resolve;
///
/// let trail = resolve("/blog/some-post-title");
/// assert_eq!(trail.len(), 3);
/// assert_eq!(trail.first().unwrap().label(), "Home");
/// assert_eq!(trail.last().unwrap().target(), "/blog/some-post-title");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Trail {
    entries: Vec<TrailEntry>,
}

impl Trail {
    pub(crate) fn from_entries(entries: Vec<TrailEntry>) -> Self {
        Self { entries }
    }

    /// The entries in navigation order.
    #[must_use]
    pub fn entries(&self) -> &[TrailEntry] {
        &self.entries
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` for the trail of the root page.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The first entry, `Home` for any non-root trail.
    #[must_use]
    pub fn first(&self) -> Option<&TrailEntry> {
        self.entries.first()
    }

    /// The entry for the current page.
    #[must_use]
    pub fn last(&self) -> Option<&TrailEntry> {
        self.entries.last()
    }

    /// Iterates over the entries in navigation order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrailEntry> {
        self.entries.iter()
    }

    /// Returns `true` if `entry` denotes the current page.
    ///
    /// The check compares targets with the final entry, which is sound
    /// because targets are unique within a trail.
    #[must_use]
    pub fn is_last(&self, entry: &TrailEntry) -> bool {
        self.last().is_some_and(|last| last.target == entry.target)
    }

    /// Consumes the trail, returning its entries.
    #[must_use]
    pub fn into_entries(self) -> Vec<TrailEntry> {
        self.entries
    }
}

impl Index<usize> for Trail {
    type Output = TrailEntry;

    fn index(&self, index: usize) -> &Self::Output {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a Trail {
    type Item = &'a TrailEntry;
    type IntoIter = std::slice::Iter<'a, TrailEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
