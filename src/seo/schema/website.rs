//! `WebSite` JSON-LD with a sitelinks search box.

use serde::{Deserialize, Serialize};

use super::SCHEMA_CONTEXT;
use crate::config::Site;
use crate::core::{Locale, PagePath};

const SEARCH_PATH: &str = "/search";
const SEARCH_TERM: &str = "search_term_string";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct WebsiteData {
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebSite {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub in_language: Locale,
    pub potential_action: SearchAction,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchAction {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub target: EntryPoint,
    #[serde(rename = "query-input")]
    pub query_input: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryPoint {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub url_template: String,
}

pub fn generate_website_schema(site: &Site, data: &WebsiteData, locale: Locale) -> WebSite {
    let search_url = site.locale_url(locale, &PagePath::new(SEARCH_PATH));

    WebSite {
        context: SCHEMA_CONTEXT,
        schema_type: "WebSite",
        name: site.name().to_string(),
        url: site.locale_url(locale, &PagePath::root()),
        description: data.description.clone(),
        in_language: locale,
        potential_action: SearchAction {
            schema_type: "SearchAction",
            target: EntryPoint {
                schema_type: "EntryPoint",
                url_template: format!("{search_url}?q={{{SEARCH_TERM}}}"),
            },
            query_input: format!("required name={SEARCH_TERM}"),
        },
    }
}
