//! Environment and command-line overrides for the `[site]` section.

/// Values that take precedence over `seo.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub site_url: Option<String>,
    pub site_name: Option<String>,
}

impl ConfigOverrides {
    pub const ENV_SITE_URL: &'static str = "SEO_SITE_URL";
    pub const ENV_SITE_NAME: &'static str = "SEO_SITE_NAME";

    /// Read overrides from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`; blank values are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |key: &str| lookup(key).filter(|v: &String| !v.trim().is_empty());
        Self {
            site_url: read(Self::ENV_SITE_URL),
            site_name: read(Self::ENV_SITE_NAME),
        }
    }

    /// Field-wise merge where `self` wins.
    pub fn or(self, fallback: Self) -> Self {
        Self {
            site_url: self.site_url.or(fallback.site_url),
            site_name: self.site_name.or(fallback.site_name),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.site_url.is_none() && self.site_name.is_none()
    }
}
