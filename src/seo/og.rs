//! Open Graph and Twitter Card blocks.
//!
//! Pure data; rendering into `<meta property="og:*">` tags is up to the
//! page layer.

use serde::Serialize;

use crate::config::Site;
use crate::core::Locale;

/// Share-image dimensions advertised for every page.
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;

const OG_TYPE: &str = "website";
const TWITTER_CARD: &str = "summary_large_image";

/// `og:*` properties for one page.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    pub title: String,
    pub description: String,
    pub url: String,
    pub site_name: String,
    /// `og:locale`, e.g. `fr_FR`
    pub locale: &'static str,
    /// `og:locale:alternate`: the other registered locales
    pub alternate_locale: Vec<&'static str>,
    #[serde(rename = "type")]
    pub og_type: &'static str,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// `twitter:*` properties for one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: &'static str,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

/// The page-level values both blocks are derived from.
pub struct ShareContent<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub url: &'a str,
    pub image: &'a str,
    pub locale: Locale,
}

impl OpenGraph {
    pub fn new(site: &Site, content: &ShareContent<'_>) -> Self {
        let alternate_locale = site
            .registry()
            .locales()
            .iter()
            .filter(|&&locale| locale != content.locale)
            .map(|locale| locale.og_tag())
            .collect();

        Self {
            title: content.title.to_string(),
            description: content.description.to_string(),
            url: content.url.to_string(),
            site_name: site.name().to_string(),
            locale: content.locale.og_tag(),
            alternate_locale,
            og_type: OG_TYPE,
            images: vec![OgImage {
                url: content.image.to_string(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: content.title.to_string(),
            }],
        }
    }
}

impl TwitterCard {
    pub fn new(content: &ShareContent<'_>) -> Self {
        Self {
            card: TWITTER_CARD,
            title: content.title.to_string(),
            description: content.description.to_string(),
            images: vec![content.image.to_string()],
        }
    }
}
