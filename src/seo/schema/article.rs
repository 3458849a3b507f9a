//! `Article` JSON-LD for blog posts.

use serde::{Deserialize, Serialize};

use super::{ImageObject, OrganizationRef, SCHEMA_CONTEXT};
use crate::config::Site;
use crate::core::{Locale, PagePath};

/// URL section articles live under.
pub const BLOG_SECTION: &str = "blog";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleData {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub image: Vec<String>,
    /// ISO 8601, passed through unchanged.
    pub date_published: String,
    /// Falls back to `date_published` when absent.
    #[serde(default)]
    pub date_modified: Option<String>,
    pub author: AuthorData,
    #[serde(default)]
    pub publisher: Option<PublisherData>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AuthorData {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Publisher overrides; each field falls back to the site's own value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PublisherData {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub logo: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub headline: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub image: Vec<String>,
    pub date_published: String,
    pub date_modified: String,
    pub author: Person,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<OrganizationRef>,
    pub url: String,
    pub main_entity_of_page: WebPageRef,
    pub in_language: Locale,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Person {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WebPageRef {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(rename = "@id")]
    pub id: String,
}

pub fn generate_article_schema(
    site: &Site,
    data: &ArticleData,
    locale: Locale,
    slug: &str,
) -> Article {
    let url = site.locale_url(locale, &PagePath::section_item(BLOG_SECTION, slug));

    let publisher = data.publisher.as_ref().map(|publisher| {
        let logo = match &publisher.logo {
            Some(logo) => Some(site.origin().resolve(logo)),
            None => site.logo().map(str::to_string),
        };
        OrganizationRef::new(
            publisher.name.as_deref().unwrap_or(site.name()),
            logo.map(ImageObject::new),
        )
    });

    Article {
        context: SCHEMA_CONTEXT,
        schema_type: "Article",
        headline: data.title.clone(),
        description: data.description.clone(),
        image: data.image.clone(),
        date_published: data.date_published.clone(),
        date_modified: data
            .date_modified
            .clone()
            .unwrap_or_else(|| data.date_published.clone()),
        author: Person {
            schema_type: "Person",
            name: data.author.name.clone(),
            url: data.author.url.clone(),
        },
        publisher,
        main_entity_of_page: WebPageRef {
            schema_type: "WebPage",
            id: url.clone(),
        },
        url,
        in_language: locale,
    }
}
