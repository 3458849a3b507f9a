//! Hreflang alternates.
//!
//! For a page path, one entry per registered locale (registry order) plus
//! a trailing `x-default` entry pointing at the default locale's URL.
//!
//! ```text
//! /products  ->  fr        https://afrexia.com/fr/products
//!                en        https://afrexia.com/en/products
//!                ...
//!                x-default https://afrexia.com/fr/products
//! ```

use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::config::Site;
use crate::core::{Locale, PagePath};

/// Value of an `hreflang` attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hreflang {
    Locale(Locale),
    XDefault,
}

impl Hreflang {
    pub const X_DEFAULT: &'static str = "x-default";

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Locale(locale) => locale.code(),
            Self::XDefault => Self::X_DEFAULT,
        }
    }
}

impl From<Locale> for Hreflang {
    fn from(locale: Locale) -> Self {
        Self::Locale(locale)
    }
}

impl fmt::Display for Hreflang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Hreflang {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

/// One `<link rel="alternate" hreflang=".." href="..">`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangTag {
    pub hreflang: Hreflang,
    pub href: String,
}

/// Build the alternates for `path`: N registry entries, then `x-default`.
pub fn generate_hreflang_tags(site: &Site, path: &PagePath) -> Vec<HreflangTag> {
    let registry = site.registry();
    let mut tags = Vec::with_capacity(registry.len() + 1);

    for &locale in registry.locales() {
        tags.push(HreflangTag {
            hreflang: Hreflang::Locale(locale),
            href: site.locale_url(locale, path),
        });
    }
    tags.push(HreflangTag {
        hreflang: Hreflang::XDefault,
        href: site.locale_url(registry.default_locale(), path),
    });

    tags
}

// ============================================================================
// Languages
// ============================================================================

/// Hreflang alternates keyed by tag, serialized as an ordered JSON object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Languages(Vec<HreflangTag>);

impl Languages {
    pub fn for_path(site: &Site, path: &PagePath) -> Self {
        Self(generate_hreflang_tags(site, path))
    }

    pub fn get(&self, hreflang: impl Into<Hreflang>) -> Option<&str> {
        let hreflang = hreflang.into();
        self.0
            .iter()
            .find(|tag| tag.hreflang == hreflang)
            .map(|tag| tag.href.as_str())
    }

    pub fn x_default(&self) -> Option<&str> {
        self.get(Hreflang::XDefault)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HreflangTag> {
        self.0.iter()
    }
}

impl Serialize for Languages {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for tag in &self.0 {
            map.serialize_entry(tag.hreflang.as_str(), &tag.href)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LocaleRegistry, SiteOrigin};
    use proptest::prelude::*;
    use rustc_hash::FxHashSet;

    fn site() -> Site {
        Site::new(
            SiteOrigin::parse("https://afrexia.com").unwrap(),
            "Afrexia",
            LocaleRegistry::default(),
        )
    }

    #[test]
    fn test_products_scenario() {
        let tags = generate_hreflang_tags(&site(), &PagePath::new("/products"));
        assert_eq!(tags.len(), 6);
        assert_eq!(
            tags[0],
            HreflangTag {
                hreflang: Hreflang::Locale(Locale::Fr),
                href: "https://afrexia.com/fr/products".into(),
            }
        );
        assert_eq!(
            tags[5],
            HreflangTag {
                hreflang: Hreflang::XDefault,
                href: "https://afrexia.com/fr/products".into(),
            }
        );
    }

    #[test]
    fn test_registry_order() {
        let tags = generate_hreflang_tags(&site(), &PagePath::new("/about"));
        let order: Vec<_> = tags.iter().map(|t| t.hreflang.as_str()).collect();
        assert_eq!(order, ["fr", "en", "es", "de", "ru", "x-default"]);
    }

    #[test]
    fn test_root_path() {
        let tags = generate_hreflang_tags(&site(), &PagePath::new("/"));
        assert_eq!(tags[1].href, "https://afrexia.com/en");
        assert_eq!(tags[5].href, "https://afrexia.com/fr");
    }

    #[test]
    fn test_custom_default_locale() {
        let registry = LocaleRegistry::new(vec![Locale::En, Locale::De], Locale::De).unwrap();
        let site = Site::new(site().origin().clone(), "Afrexia", registry);
        let tags = generate_hreflang_tags(&site, &PagePath::new("/contact"));
        assert_eq!(tags.len(), 3);
        assert_eq!(tags[2].href, "https://afrexia.com/de/contact");
    }

    #[test]
    fn test_serialize_tag() {
        let tags = generate_hreflang_tags(&site(), &PagePath::new("/blog"));
        let json = serde_json::to_value(&tags[5]).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"hreflang": "x-default", "href": "https://afrexia.com/fr/blog"})
        );
    }

    #[test]
    fn test_languages_serialize_as_ordered_map() {
        let languages = Languages::for_path(&site(), &PagePath::new("/blog"));
        let json = serde_json::to_string(&languages).unwrap();
        assert!(json.starts_with(r#"{"fr":"https://afrexia.com/fr/blog","en":"#));
        assert!(json.ends_with(r#""x-default":"https://afrexia.com/fr/blog"}"#));
    }

    #[test]
    fn test_languages_get() {
        let languages = Languages::for_path(&site(), &PagePath::new("/blog"));
        assert_eq!(languages.get(Locale::Es), Some("https://afrexia.com/es/blog"));
        assert_eq!(languages.x_default(), languages.get(Locale::Fr));
    }

    fn arb_path() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), Just("/".to_string()), "(/[a-z0-9-]{1,12}){1,4}"]
    }

    proptest! {
        #[test]
        fn tags_cover_every_locale_once(path in arb_path()) {
            let site = site();
            let tags = generate_hreflang_tags(&site, &PagePath::new(&path));
            prop_assert_eq!(tags.len(), site.registry().len() + 1);

            let unique: FxHashSet<_> = tags.iter().map(|t| t.hreflang).collect();
            prop_assert_eq!(unique.len(), tags.len());
            for &locale in site.registry().locales() {
                prop_assert!(unique.contains(&Hreflang::Locale(locale)));
            }
            prop_assert!(unique.contains(&Hreflang::XDefault));
        }

        #[test]
        fn x_default_matches_default_locale(path in arb_path()) {
            let site = site();
            let languages = Languages::for_path(&site, &PagePath::new(&path));
            prop_assert_eq!(languages.x_default(), languages.get(site.registry().default_locale()));
        }

        #[test]
        fn hrefs_follow_locale_pattern(path in arb_path()) {
            let site = site();
            let page = PagePath::new(&path);
            for tag in generate_hreflang_tags(&site, &page) {
                let locale = match tag.hreflang {
                    Hreflang::Locale(locale) => locale,
                    Hreflang::XDefault => site.registry().default_locale(),
                };
                prop_assert!(tag.href.starts_with("https://"));
                prop_assert_eq!(tag.href, format!("https://afrexia.com/{}{}", locale.code(), page));
            }
        }
    }
}
