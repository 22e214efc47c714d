//! Breadcrumb trail resolution.
//!
//! This module turns the current request path into an ordered trail of
//! entries, from the site root down to the current page.
//!
//! # Key Concepts
//!
//! ## Segments
//!
//! A path is split on `/` and every empty or whitespace-only piece is
//! dropped. `"/blog//post/"` and `"blog/post"` both have the segments
//! `["blog", "post"]`.
//!
//! ## Entries
//!
//! Each segment yields one [`TrailEntry`]: its target is the path up to and
//! including the segment, its label is the segment run through
//! [`label::format_label`]. Non-root trails start with the fixed `Home`
//! entry pointing at `/`.
//!
//! ## Root detection
//!
//! The root page has an empty trail. [`RootPolicy`] decides what counts as
//! the root.
//!
//! # Examples
//!
//! ```
//! use crumbs::path::TrailResolver;
//!
//! let trail = TrailResolver::new().resolve("/blog/some-post-title");
//!
//! assert_eq!(trail.len(), 3);
//! assert_eq!(trail[2].label(), "Some Post Title");
//! assert_eq!(trail[2].target(), "/blog/some-post-title");
//! ```

pub mod label;
pub mod normalize;
pub mod resolver;
mod types;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use resolver::{resolve, RootPolicy, TrailResolver};
pub use types::{Trail, TrailEntry, HOME_LABEL, HOME_TARGET};
