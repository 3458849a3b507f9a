//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A dotted path to a config field, e.g. `site.url`.
///
/// Sections expose their paths as a `FIELDS` constant so diagnostics never
/// spell field names by hand:
///
/// ```ignore
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    /// TOML table the field lives in: `site` for `site.url`.
    pub fn section(&self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(section, _)| section)
    }

    /// Key inside its table: `url` for `site.url`.
    pub fn key(&self) -> &'static str {
        self.0.split_once('.').map_or(self.0, |(_, key)| key)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
