//! `BreadcrumbList` structured data.
//!
//! Search engines read breadcrumb trails from an embedded JSON-LD object
//! following the schema.org `BreadcrumbList` type. Each entry becomes a
//! ranked `ListItem`; the last one names the current page and carries no
//! `item` URL.

use serde::{Deserialize, Serialize};

use crate::path::Trail;
use crate::request::Origin;

/// Vocabulary the structured data refers to.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// A schema.org `BreadcrumbList`.
///
/// # Examples
///
/// ```
/// use crumbs::{resolve, Origin};
/// use crumbs::output::BreadcrumbList;
///
/// let origin = Origin::try_from("https://example.com").unwrap();
/// let list = BreadcrumbList::from_trail(&resolve("/a/b"), &origin);
///
/// assert_eq!(list.item_list_element.len(), 3);
/// assert_eq!(list.item_list_element[0].item.as_deref(), Some("https://example.com/"));
/// assert!(list.item_list_element[2].item.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbList {
    /// Always [`SCHEMA_CONTEXT`].
    #[serde(rename = "@context")]
    pub context: String,

    /// Always `BreadcrumbList`.
    #[serde(rename = "@type")]
    pub kind: String,

    /// The ranked items, root first.
    #[serde(rename = "itemListElement")]
    pub item_list_element: Vec<ListItem>,
}

/// One ranked item of a [`BreadcrumbList`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Always `ListItem`.
    #[serde(rename = "@type")]
    pub kind: String,

    /// 1-based rank.
    pub position: usize,

    /// Display label.
    pub name: String,

    /// Absolute URL; absent on the current page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item: Option<String>,
}

impl BreadcrumbList {
    /// Map a trail to structured data, making targets absolute against `origin`.
    #[must_use]
    pub fn from_trail(trail: &Trail, origin: &Origin) -> Self {
        let item_list_element = trail
            .iter()
            .enumerate()
            .map(|(index, entry)| ListItem {
                kind: "ListItem".to_string(),
                position: index + 1,
                name: entry.label().to_string(),
                item: (!trail.is_last(entry)).then(|| origin.absolute(entry.target())),
            })
            .collect();

        Self {
            context: SCHEMA_CONTEXT.to_string(),
            kind: "BreadcrumbList".to_string(),
            item_list_element,
        }
    }
}
