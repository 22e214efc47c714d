//! Request context: origin and current path.
//!
//! Renderers need the current page's root-relative path, and the JSON-LD
//! serializer also needs the site origin. Both are passed explicitly. This
//! module validates origins and, for callers holding a full URL, splits it
//! into the two parts, dropping any query string or fragment.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::{Host, ParseError, Url};

use crate::error::{Error, Result};

/// A site origin such as `https://example.com` or `http://localhost:4321`.
///
/// Origins are parsed as URLs and stored in their ASCII serialization:
/// scheme and host are lower-cased, a default port is dropped, and there is
/// never a trailing separator, so joining with a root-relative target is
/// plain concatenation.
///
/// # Examples
///
/// ```
/// use crumbs::Origin;
///
/// let origin = Origin::try_from("https://example.com/").unwrap();
/// assert_eq!(origin.as_str(), "https://example.com");
/// assert_eq!(origin.absolute("/blog"), "https://example.com/blog");
///
/// assert!(Origin::try_from("example.com").is_err());
/// assert!(Origin::try_from("https://example.com:notaport").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Origin(String);

impl Origin {
    /// Returns the origin as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the absolute URL for a root-relative `target`.
    #[must_use]
    pub fn absolute(&self, target: &str) -> String {
        format!("{}{}", self.0, target)
    }

    fn parse(value: &str) -> std::result::Result<Self, InvalidOriginError> {
        let invalid = |reason: String| InvalidOriginError {
            value: value.to_string(),
            reason,
        };

        let url = Url::parse(value.trim()).map_err(|e| match e {
            ParseError::RelativeUrlWithoutBase => {
                invalid("must start with http:// or https://".to_string())
            }
            other => invalid(other.to_string()),
        })?;

        if !is_http(&url) {
            return Err(invalid(format!(
                "scheme must be http or https, not {}",
                url.scheme()
            )));
        }
        if !url.username().is_empty() || url.password().is_some() {
            return Err(invalid("must not contain user info".to_string()));
        }
        if url.path() != "/" || url.query().is_some() || url.fragment().is_some() {
            return Err(invalid(
                "must not contain a path, query or fragment".to_string(),
            ));
        }
        check_host(&url).map_err(invalid)?;

        Ok(Self(url.origin().ascii_serialization()))
    }
}

fn is_http(url: &Url) -> bool {
    matches!(url.scheme(), "http" | "https")
}

/// Domains must be plain DNS names once IDNA-encoded.
fn check_host(url: &Url) -> std::result::Result<(), String> {
    match url.host() {
        None => Err("missing host".to_string()),
        Some(Host::Domain(domain)) => {
            let valid = domain
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'));
            if valid {
                Ok(())
            } else {
                Err(format!("invalid host '{domain}'"))
            }
        }
        Some(Host::Ipv4(_) | Host::Ipv6(_)) => Ok(()),
    }
}

impl TryFrom<&str> for Origin {
    type Error = InvalidOriginError;

    fn try_from(value: &str) -> std::result::Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Origin {
    type Error = InvalidOriginError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Origin> for String {
    fn from(origin: Origin) -> Self {
        origin.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error type for invalid origins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidOriginError {
    /// The rejected origin.
    pub value: String,
    /// The reason the origin is invalid.
    pub reason: String,
}

impl fmt::Display for InvalidOriginError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid origin '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for InvalidOriginError {}

/// The per-request inputs of a breadcrumb render.
///
/// # Examples
///
/// ```
/// use crumbs::RequestContext;
///
/// let ctx = RequestContext::parse("https://example.com/blog/post?page=2#top").unwrap();
/// assert_eq!(ctx.path(), "/blog/post");
/// assert_eq!(ctx.origin().unwrap().as_str(), "https://example.com");
///
/// let ctx = RequestContext::parse("/docs/").unwrap();
/// assert_eq!(ctx.path(), "/docs/");
/// assert!(ctx.origin().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    origin: Option<Origin>,
    path: String,
}

impl RequestContext {
    /// Build a context from an already separated origin and path.
    #[must_use]
    pub fn new(origin: Option<Origin>, path: impl Into<String>) -> Self {
        Self {
            origin,
            path: path.into(),
        }
    }

    /// Split `input` into origin and path.
    ///
    /// Absolute `http(s)` URLs provide both, with the path taken from the
    /// parsed URL (percent-encoded as the URL parser emits it). Anything
    /// else is taken as a root-relative path. Query strings and fragments
    /// are removed either way. The path is otherwise kept as given, so the
    /// resolver still sees doubled or trailing separators.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidUrl`] if `input` has an `http(s)` scheme but
    /// is not a valid URL with a host, and [`Error::InvalidOrigin`] if its
    /// origin is rejected by [`Origin`].
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();

        if !has_http_scheme(input) {
            return Ok(Self::new(None, strip_query(input)));
        }

        let invalid = |reason: String| Error::InvalidUrl {
            value: input.to_string(),
            reason,
        };

        // The URL parser skips extra slashes before a host, so an empty
        // authority has to be caught on the raw input.
        let authority = input.split_once("://").map_or("", |(_, rest)| rest);
        if authority.is_empty() || authority.starts_with(['/', '?', '#']) {
            return Err(invalid("missing host".to_string()));
        }

        let url = Url::parse(input).map_err(|e| invalid(e.to_string()))?;
        let origin = Origin::try_from(url.origin().ascii_serialization())?;

        Ok(Self::new(Some(origin), url.path()))
    }

    /// The site origin, if known.
    #[must_use]
    pub fn origin(&self) -> Option<&Origin> {
        self.origin.as_ref()
    }

    /// The root-relative path of the current page.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Replace the origin, keeping the path.
    #[must_use]
    pub fn with_origin(mut self, origin: Origin) -> Self {
        self.origin = Some(origin);
        self
    }
}

/// Whether `value` starts with `http://` or `https://`, ignoring case.
fn has_http_scheme(value: &str) -> bool {
    ["https://", "http://"].iter().any(|scheme| {
        value
            .get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

fn strip_query(path: &str) -> &str {
    path.find(['?', '#']).map_or(path, |end| &path[..end])
}
