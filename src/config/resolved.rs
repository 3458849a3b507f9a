//! Validated, immutable site configuration handed to the synthesizers.

use crate::core::{Locale, LocaleRegistry, PagePath, SiteOrigin, build_locale_url};

/// Site-wide values every synthesizer reads.
///
/// Built once at startup (see [`SiteConfig::load`](super::SiteConfig::load))
/// and passed by reference; it is never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Site {
    origin: SiteOrigin,
    name: String,
    registry: LocaleRegistry,
    default_image: String,
    logo: Option<String>,
}

impl Site {
    pub const DEFAULT_IMAGE_PATH: &'static str = "/og-image.jpg";

    pub fn new(origin: SiteOrigin, name: impl Into<String>, registry: LocaleRegistry) -> Self {
        let default_image = origin.resolve(Self::DEFAULT_IMAGE_PATH);
        Self {
            origin,
            name: name.into(),
            registry,
            default_image,
            logo: None,
        }
    }

    /// Replace the fallback share image (site path or absolute URL).
    pub fn with_default_image(mut self, reference: &str) -> Self {
        self.default_image = self.origin.resolve(reference);
        self
    }

    /// Set the organization logo (site path or absolute URL).
    pub fn with_logo(mut self, reference: &str) -> Self {
        self.logo = Some(self.origin.resolve(reference));
        self
    }

    #[inline]
    pub fn origin(&self) -> &SiteOrigin {
        &self.origin
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn registry(&self) -> &LocaleRegistry {
        &self.registry
    }

    /// Absolute URL of the fallback share image.
    #[inline]
    pub fn default_image(&self) -> &str {
        &self.default_image
    }

    /// Absolute URL of the organization logo, if configured.
    #[inline]
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref()
    }

    /// `{origin}/{locale}{path}` for this site.
    #[inline]
    pub fn locale_url(&self, locale: Locale, path: &PagePath) -> String {
        build_locale_url(&self.origin, locale, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site() -> Site {
        Site::new(
            SiteOrigin::parse("https://afrexia.com").unwrap(),
            "Afrexia",
            LocaleRegistry::default(),
        )
    }

    #[test]
    fn test_default_image_under_origin() {
        assert_eq!(site().default_image(), "https://afrexia.com/og-image.jpg");
    }

    #[test]
    fn test_overrides() {
        let site = site()
            .with_default_image("https://cdn.example.com/share.png")
            .with_logo("/logo.png");
        assert_eq!(site.default_image(), "https://cdn.example.com/share.png");
        assert_eq!(site.logo(), Some("https://afrexia.com/logo.png"));
    }

    #[test]
    fn test_locale_url() {
        assert_eq!(
            site().locale_url(Locale::Ru, &PagePath::new("/about")),
            "https://afrexia.com/ru/about"
        );
    }
}
