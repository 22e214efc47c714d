#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # crumbs
//!
//! A library for building breadcrumb navigation trails.
//!
//! Given the path of the current page, crumbs produces the ordered trail
//! from the site root down to that page, and renders it both as visible
//! HTML navigation and as schema.org `BreadcrumbList` JSON-LD.
//!
//! ## Core Types
//!
//! - [`Trail`] and [`TrailEntry`]: The resolved breadcrumb trail
//! - [`TrailResolver`] and [`resolve`]: Path to trail resolution
//! - [`format_label`]: Segment to label conversion
//! - [`Origin`] and [`RequestContext`]: Per-request inputs
//! - [`output::TrailFormatter`]: HTML, JSON-LD, JSON and human renderers
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use crumbs::{resolve, Origin};
//! use crumbs::output::{HtmlFormatter, JsonLdFormatter, TrailFormatter};
//!
//! let trail = resolve("/blog/some-post-title");
//! assert_eq!(trail[2].label(), "Some Post Title");
//!
//! let nav = HtmlFormatter::default().format(&trail).unwrap();
//! assert!(nav.contains(r#"<a href="/blog">Blog</a>"#));
//!
//! let origin = Origin::try_from("https://example.com").unwrap();
//! let json_ld = JsonLdFormatter::new(origin).format(&trail).unwrap();
//! assert!(json_ld.contains(r#""item": "https://example.com/blog""#));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path;
pub mod request;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, TrailFormatter};
pub use path::label::format_label;
pub use path::{resolve, RootPolicy, Trail, TrailEntry, TrailResolver};
pub use request::{Origin, RequestContext};
