//! Page metadata synthesis.
//!
//! [`generate_meta_tags`] turns a [`MetaTagsConfig`] into the full record
//! the page layer injects into `<head>`:
//!
//! | Field        | Source                                                  |
//! |--------------|---------------------------------------------------------|
//! | `robots`     | `noIndex` switch, `index` and `follow` always equal     |
//! | `alternates` | canonical URL plus hreflang map (N locales + x-default) |
//! | `openGraph`  | title, description, canonical URL, OG locale, image     |
//! | `twitter`    | large-image summary card sharing the OG image           |

use serde::{Deserialize, Serialize};

use super::SeoError;
use super::hreflang::Languages;
use super::og::{OpenGraph, ShareContent, TwitterCard};
use crate::config::Site;
use crate::core::{Locale, PagePath};

const KEYWORD_SEPARATOR: &str = ", ";

/// Per-page input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaTagsConfig {
    pub title: String,
    pub description: String,
    pub locale: Locale,
    /// Path after the locale segment; defaults to the site root.
    #[serde(default)]
    pub path: PagePath,
    /// Share image; the site default is used when absent or empty.
    #[serde(default)]
    pub og_image: Option<String>,
    #[serde(default)]
    pub no_index: bool,
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl MetaTagsConfig {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        locale: Locale,
        path: impl Into<PagePath>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            locale,
            path: path.into(),
            og_image: None,
            no_index: false,
            keywords: Vec::new(),
        }
    }

    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.og_image = Some(image.into());
        self
    }

    pub fn with_no_index(mut self, no_index: bool) -> Self {
        self.no_index = no_index;
        self
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }
}

/// Metadata record consumed by the page layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
    pub robots: Robots,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
}

/// Crawler directive. Only two states exist: indexable or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Robots {
    pub index: bool,
    pub follow: bool,
}

impl Robots {
    pub const INDEX: Self = Self {
        index: true,
        follow: true,
    };
    pub const NO_INDEX: Self = Self {
        index: false,
        follow: false,
    };

    pub const fn from_no_index(no_index: bool) -> Self {
        if no_index { Self::NO_INDEX } else { Self::INDEX }
    }
}

/// Canonical URL and its per-locale alternates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    pub canonical: String,
    pub languages: Languages,
}

/// Build the metadata record for one page.
///
/// Fails only on caller misuse: a blank title or a locale the site does
/// not publish.
pub fn generate_meta_tags(site: &Site, config: &MetaTagsConfig) -> Result<Metadata, SeoError> {
    if config.title.trim().is_empty() {
        return Err(SeoError::MissingField("title"));
    }
    if !site.registry().contains(config.locale) {
        return Err(SeoError::UnregisteredLocale(config.locale));
    }

    let canonical = site.locale_url(config.locale, &config.path);
    let languages = Languages::for_path(site, &config.path);

    let image = config
        .og_image
        .as_deref()
        .filter(|image| !image.is_empty())
        .unwrap_or_else(|| site.default_image());

    let keywords =
        (!config.keywords.is_empty()).then(|| config.keywords.join(KEYWORD_SEPARATOR));

    let share = ShareContent {
        title: &config.title,
        description: &config.description,
        url: &canonical,
        image,
        locale: config.locale,
    };
    let open_graph = OpenGraph::new(site, &share);
    let twitter = TwitterCard::new(&share);

    Ok(Metadata {
        title: config.title.clone(),
        description: config.description.clone(),
        keywords,
        robots: Robots::from_no_index(config.no_index),
        alternates: Alternates {
            canonical,
            languages,
        },
        open_graph,
        twitter,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{LocaleRegistry, SiteOrigin};
    use proptest::prelude::*;

    fn site() -> Site {
        Site::new(
            SiteOrigin::parse("https://afrexia.com").unwrap(),
            "Afrexia",
            LocaleRegistry::default(),
        )
    }

    #[test]
    fn test_contact_scenario() {
        let config = MetaTagsConfig::new("T", "D", Locale::De, "/contact");
        let meta = generate_meta_tags(&site(), &config).unwrap();

        assert_eq!(meta.alternates.canonical, "https://afrexia.com/de/contact");
        assert_eq!(meta.open_graph.locale, "de_DE");
        assert_eq!(meta.open_graph.url, meta.alternates.canonical);
        assert_eq!(meta.title, "T");
        assert_eq!(meta.description, "D");
    }

    #[test]
    fn test_default_image() {
        let meta = generate_meta_tags(&site(), &MetaTagsConfig::new("T", "D", Locale::Fr, "")).unwrap();
        assert!(meta.open_graph.images[0].url.contains("og-image"));
        assert_eq!(meta.open_graph.images[0].url, meta.twitter.images[0]);
    }

    #[test]
    fn test_empty_image_falls_back() {
        let config = MetaTagsConfig::new("T", "D", Locale::Fr, "").with_image("");
        let meta = generate_meta_tags(&site(), &config).unwrap();
        assert_eq!(meta.twitter.images[0], "https://afrexia.com/og-image.jpg");
    }

    #[test]
    fn test_provided_image() {
        let image = "https://cdn.example.com/cocoa.jpg";
        let config = MetaTagsConfig::new("T", "D", Locale::Fr, "").with_image(image);
        let meta = generate_meta_tags(&site(), &config).unwrap();
        assert_eq!(meta.open_graph.images[0].url, image);
        assert_eq!(meta.twitter.images[0], image);
        assert_eq!(meta.open_graph.images[0].alt, "T");
    }

    #[test]
    fn test_robots() {
        let base = MetaTagsConfig::new("T", "D", Locale::En, "/");
        let indexed = generate_meta_tags(&site(), &base).unwrap();
        assert_eq!(indexed.robots, Robots { index: true, follow: true });

        let hidden = generate_meta_tags(&site(), &base.with_no_index(true)).unwrap();
        assert_eq!(hidden.robots, Robots { index: false, follow: false });
    }

    #[test]
    fn test_keywords() {
        let config = MetaTagsConfig::new("T", "D", Locale::En, "")
            .with_keywords(["cocoa", "coffee", "export"]);
        let meta = generate_meta_tags(&site(), &config).unwrap();
        assert_eq!(meta.keywords.as_deref(), Some("cocoa, coffee, export"));

        let meta = generate_meta_tags(&site(), &MetaTagsConfig::new("T", "D", Locale::En, "")).unwrap();
        assert_eq!(meta.keywords, None);
    }

    #[test]
    fn test_og_locale_for_every_locale() {
        let expected = [
            (Locale::Fr, "fr_FR"),
            (Locale::En, "en_US"),
            (Locale::Es, "es_ES"),
            (Locale::De, "de_DE"),
            (Locale::Ru, "ru_RU"),
        ];
        for (locale, tag) in expected {
            let meta = generate_meta_tags(&site(), &MetaTagsConfig::new("T", "D", locale, "")).unwrap();
            assert_eq!(meta.open_graph.locale, tag);
            assert_eq!(meta.open_graph.alternate_locale.len(), 4);
        }
    }

    #[test]
    fn test_rejects_blank_title() {
        let config = MetaTagsConfig::new("  ", "D", Locale::En, "");
        assert_eq!(
            generate_meta_tags(&site(), &config),
            Err(SeoError::MissingField("title"))
        );
    }

    #[test]
    fn test_rejects_unregistered_locale() {
        let registry = LocaleRegistry::new(vec![Locale::Fr, Locale::En], Locale::Fr).unwrap();
        let site = Site::new(site().origin().clone(), "Afrexia", registry);
        let config = MetaTagsConfig::new("T", "D", Locale::Ru, "");
        assert_eq!(
            generate_meta_tags(&site, &config),
            Err(SeoError::UnregisteredLocale(Locale::Ru))
        );
    }

    #[test]
    fn test_serialized_shape() {
        let config = MetaTagsConfig::new("T", "D", Locale::Fr, "/products");
        let json = serde_json::to_value(generate_meta_tags(&site(), &config).unwrap()).unwrap();

        assert!(json.get("keywords").is_none());
        assert_eq!(json["robots"], serde_json::json!({"index": true, "follow": true}));
        assert_eq!(json["alternates"]["canonical"], "https://afrexia.com/fr/products");
        assert_eq!(
            json["alternates"]["languages"]["x-default"],
            "https://afrexia.com/fr/products"
        );
        assert_eq!(json["openGraph"]["images"][0]["width"], 1200);
        assert_eq!(json["twitter"]["card"], "summary_large_image");
    }

    #[test]
    fn test_deserialize_config() {
        let config: MetaTagsConfig = serde_json::from_str(
            r#"{"title": "T", "description": "D", "locale": "es", "path": "/blog", "noIndex": true}"#,
        )
        .unwrap();
        assert_eq!(config.locale, Locale::Es);
        assert_eq!(config.path, PagePath::new("/blog"));
        assert!(config.no_index);
        assert_eq!(config.og_image, None);
    }

    fn arb_locale() -> impl Strategy<Value = Locale> {
        prop::sample::select(Locale::ALL.to_vec())
    }

    fn arb_path() -> impl Strategy<Value = String> {
        prop_oneof![Just(String::new()), Just("/".to_string()), "(/[a-z0-9-]{1,12}){1,4}"]
    }

    proptest! {
        #[test]
        fn canonical_matches_own_alternate(
            locale in arb_locale(),
            path in arb_path(),
            title in "[A-Za-z][A-Za-z ]{0,30}",
            no_index in any::<bool>(),
        ) {
            let site = site();
            let config = MetaTagsConfig::new(title, "D", locale, path).with_no_index(no_index);
            let meta = generate_meta_tags(&site, &config).unwrap();

            prop_assert_eq!(meta.alternates.languages.len(), site.registry().len() + 1);
            prop_assert_eq!(
                Some(meta.alternates.canonical.as_str()),
                meta.alternates.languages.get(locale)
            );
            prop_assert_eq!(
                meta.alternates.languages.x_default(),
                meta.alternates.languages.get(site.registry().default_locale())
            );
            prop_assert_eq!(meta.robots.index, !no_index);
            prop_assert_eq!(meta.robots.index, meta.robots.follow);
            for tag in meta.alternates.languages.iter() {
                prop_assert!(tag.href.starts_with("https://"));
            }
        }

        #[test]
        fn generation_is_deterministic(locale in arb_locale(), path in arb_path()) {
            let site = site();
            let config = MetaTagsConfig::new("T", "D", locale, path);
            prop_assert_eq!(
                generate_meta_tags(&site, &config).unwrap(),
                generate_meta_tags(&site, &config).unwrap()
            );
        }
    }
}
