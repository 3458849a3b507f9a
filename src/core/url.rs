//! Site origin, locale-relative page paths and the locale URL builder.
//!
//! Every absolute URL the crate emits goes through [`build_locale_url`],
//! which is what keeps URLs for different locales identical except for
//! the `/{locale}` segment.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{CoreError, Locale};

// ============================================================================
// SiteOrigin
// ============================================================================

/// Absolute site base URL: scheme + host (+ port), no path, no trailing slash.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteOrigin(Arc<str>);

impl SiteOrigin {
    /// Parse and normalize an origin with the `url` crate.
    ///
    /// Accepts `https://example.com` and `https://example.com/`; rejects
    /// non-http schemes, missing hosts, paths, queries and fragments.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let invalid = |reason: &str| CoreError::InvalidOrigin(format!("`{input}`: {reason}"));

        let parsed = url::Url::parse(input.trim()).map_err(|e| invalid(&e.to_string()))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(invalid("scheme must be http or https"));
        }
        if parsed.host_str().is_none() {
            return Err(invalid("missing host"));
        }
        if !parsed.username().is_empty() || parsed.password().is_some() {
            return Err(invalid("must not contain credentials"));
        }
        if parsed.path() != "/" {
            return Err(invalid("must not contain a path"));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(invalid("must not contain a query or fragment"));
        }

        // `ascii_serialization` never has a trailing slash and omits default ports
        Ok(Self(Arc::from(parsed.origin().ascii_serialization())))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `http` or `https`.
    pub fn scheme(&self) -> &str {
        self.0.split_once("://").map_or("https", |(scheme, _)| scheme)
    }

    /// Host part, e.g. `afrexia.com`.
    pub fn host(&self) -> &str {
        self.0
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(self.as_str())
    }

    /// Resolve an asset reference against the origin.
    ///
    /// Absolute `http(s)://` references are returned unchanged and
    /// protocol-relative `//host/..` ones take the origin's scheme. Anything
    /// else is treated as a path under the origin.
    pub fn resolve(&self, reference: &str) -> String {
        if reference.starts_with("http://") || reference.starts_with("https://") {
            reference.to_string()
        } else if reference.starts_with("//") {
            format!("{}:{}", self.scheme(), reference)
        } else if reference.starts_with('/') {
            format!("{}{}", self.0, reference)
        } else {
            format!("{}/{}", self.0, reference)
        }
    }
}

impl fmt::Display for SiteOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for SiteOrigin {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// PagePath
// ============================================================================

/// Page path after the locale segment.
///
/// Invariants:
/// - Empty (site root) or starts with `/`
/// - `"/"` and `""` are the same path: both normalize to empty
/// - Everything else is kept verbatim (no trailing-slash or encoding changes)
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PagePath(Arc<str>);

impl PagePath {
    /// Site root (`{origin}/{locale}`).
    pub fn root() -> Self {
        Self(Arc::from(""))
    }

    /// Create a page path, collapsing the bare root to empty.
    pub fn new(path: &str) -> Self {
        if path == "/" {
            Self::root()
        } else {
            Self(Arc::from(path))
        }
    }

    /// Like [`PagePath::new`], but rejects paths without a leading slash.
    pub fn parse(path: &str) -> Result<Self, CoreError> {
        if path.is_empty() || path.starts_with('/') {
            Ok(Self::new(path))
        } else {
            Err(CoreError::InvalidPath(path.to_string()))
        }
    }

    /// `/{section}/{slug}`, e.g. `/products/premium-cocoa`.
    pub fn section_item(section: &str, slug: &str) -> Self {
        Self(Arc::from(format!("/{section}/{slug}")))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PagePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PagePath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PagePath {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl Serialize for PagePath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for PagePath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// URL builder
// ============================================================================

/// Build `{origin}/{locale}{path}`.
///
/// The locale is not checked against any registry here; callers decide
/// which locales are valid for them.
pub fn build_locale_url(origin: &SiteOrigin, locale: Locale, path: &PagePath) -> String {
    let mut url = String::with_capacity(origin.as_str().len() + 3 + path.as_str().len());
    url.push_str(origin.as_str());
    url.push('/');
    url.push_str(locale.code());
    url.push_str(path.as_str());
    url
}
