//! `[site]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://afrexia.com"
//! name = "Afrexia"
//! default_image = "/og-image.jpg"
//! logo = "/logo.png"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::SiteOrigin;
use serde::{Deserialize, Serialize};

/// Site identity shared by every page and schema object.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Site origin (e.g., "https://afrexia.com"). No path component.
    pub url: Option<String>,

    /// Display name, used for `og:site_name`, brand and publisher fallbacks.
    pub name: String,

    /// Fallback share image when a page has none: a path under the origin
    /// or an absolute URL.
    pub default_image: String,

    /// Organization logo: a path under the origin or an absolute URL.
    pub logo: Option<String>,
}

pub struct SiteInfoFields {
    pub url: FieldPath,
    pub name: FieldPath,
    pub default_image: FieldPath,
    pub logo: FieldPath,
}

impl SiteInfoConfig {
    pub const FIELDS: SiteInfoFields = SiteInfoFields {
        url: FieldPath::new("site.url"),
        name: FieldPath::new("site.name"),
        default_image: FieldPath::new("site.default_image"),
        logo: FieldPath::new("site.logo"),
    };

    /// Validate site configuration, returning the parsed origin when valid.
    ///
    /// # Checks
    /// - `url` is set and parses as an http(s) origin
    /// - `name` is not blank
    /// - `default_image` and `logo` are paths or absolute http(s) URLs
    pub fn validate(&self, diag: &mut ConfigDiagnostics) -> Option<SiteOrigin> {
        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name is empty",
                format!("set {} or SEO_SITE_NAME, e.g.: \"Afrexia\"", Self::FIELDS.name),
            );
        }

        check_asset_reference(self.default_image.as_str(), Self::FIELDS.default_image, diag);
        if let Some(logo) = &self.logo {
            check_asset_reference(logo, Self::FIELDS.logo, diag);
        }

        let Some(url) = &self.url else {
            diag.error_with_hint(
                Self::FIELDS.url,
                "site url is not configured",
                format!(
                    "set {} or SEO_SITE_URL, e.g.: \"https://example.com\"",
                    Self::FIELDS.url
                ),
            );
            return None;
        };

        match SiteOrigin::parse(url) {
            Ok(origin) => Some(origin),
            Err(e) => {
                diag.error_with_hint(
                    Self::FIELDS.url,
                    e.to_string(),
                    "use format like https://example.com",
                );
                None
            }
        }
    }
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: None,
            name: String::new(),
            default_image: "/og-image.jpg".into(),
            logo: None,
        }
    }
}

fn check_asset_reference(reference: &str, field: FieldPath, diag: &mut ConfigDiagnostics) {
    if reference.starts_with("//") {
        diag.error_with_hint(
            field,
            format!("`{reference}` is a protocol-relative URL"),
            "spell out the scheme, e.g. https://cdn.example.com/og.png",
        );
        return;
    }
    if reference.starts_with('/') {
        return;
    }
    match url::Url::parse(reference) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
        _ => diag.error_with_hint(
            field,
            format!("`{reference}` is neither a site path nor an http(s) URL"),
            "use a path like /og-image.jpg or a full URL",
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SiteInfoConfig {
        SiteInfoConfig {
            url: Some("https://afrexia.com/".into()),
            name: "Afrexia".into(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_ok() {
        let mut diag = ConfigDiagnostics::new();
        let origin = valid().validate(&mut diag).unwrap();
        assert!(diag.is_empty());
        assert_eq!(origin.as_str(), "https://afrexia.com");
    }

    #[test]
    fn test_validate_missing_url() {
        let mut diag = ConfigDiagnostics::new();
        let config = SiteInfoConfig {
            url: None,
            ..valid()
        };
        assert!(config.validate(&mut diag).is_none());
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.url));
    }

    #[test]
    fn test_validate_bad_scheme() {
        let mut diag = ConfigDiagnostics::new();
        let config = SiteInfoConfig {
            url: Some("ftp://afrexia.com".into()),
            ..valid()
        };
        assert!(config.validate(&mut diag).is_none());
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.url));
    }

    #[test]
    fn test_validate_blank_name() {
        let mut diag = ConfigDiagnostics::new();
        let config = SiteInfoConfig {
            name: "  ".into(),
            ..valid()
        };
        config.validate(&mut diag);
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.name));
    }

    #[test]
    fn test_validate_asset_references() {
        let mut diag = ConfigDiagnostics::new();
        let config = SiteInfoConfig {
            default_image: "og-image.jpg".into(),
            logo: Some("https://cdn.example.com/logo.png".into()),
            ..valid()
        };
        config.validate(&mut diag);
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.default_image));
        assert!(!diag.has_error_for(SiteInfoConfig::FIELDS.logo));
    }

    #[test]
    fn test_validate_rejects_protocol_relative_image() {
        let mut diag = ConfigDiagnostics::new();
        let config = SiteInfoConfig {
            default_image: "//cdn.example.com/og.png".into(),
            ..valid()
        };
        config.validate(&mut diag);
        assert!(diag.has_error_for(SiteInfoConfig::FIELDS.default_image));
        assert_eq!(diag.len(), 1);
    }
}
