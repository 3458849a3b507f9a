//! Locale-aware page metadata and Schema.org structured data.
//!
//! Given a validated [`Site`] (origin, display name, locale registry), the
//! crate produces:
//!
//! - hreflang alternates for a page path ([`seo::generate_hreflang_tags`])
//! - a complete page metadata record ([`seo::generate_meta_tags`])
//! - JSON-LD objects for Organization, Product, Article, BreadcrumbList
//!   and WebSite ([`seo::schema`])
//!
//! Every URL is built by [`build_locale_url`] as `{origin}/{locale}{path}`,
//! so URLs for different locales differ only in the locale segment.
//!
//! ```
//! use locale_seo::{Locale, LocaleRegistry, PagePath, Site, SiteOrigin};
//! use locale_seo::seo::generate_hreflang_tags;
//!
//! let site = Site::new(
//!     SiteOrigin::parse("https://afrexia.com").unwrap(),
//!     "Afrexia",
//!     LocaleRegistry::default(),
//! );
//! let tags = generate_hreflang_tags(&site, &PagePath::new("/products"));
//! assert_eq!(tags.len(), 6);
//! assert_eq!(tags[5].href, "https://afrexia.com/fr/products");
//! # let _ = Locale::Fr;
//! ```

pub mod config;
pub mod core;
pub mod logger;
pub mod seo;

pub use config::{ConfigError, ConfigOverrides, Site, SiteConfig};
pub use crate::core::{CoreError, Locale, LocaleRegistry, PagePath, SiteOrigin, build_locale_url};
pub use seo::SeoError;
