//! `BreadcrumbList` JSON-LD.
//!
//! Items map 1:1 to `ListItem`s with positions `1..=n` in input order.
//! Nothing is validated or filtered.

use serde::{Deserialize, Serialize};

use super::SCHEMA_CONTEXT;
use crate::config::Site;
use crate::core::{Locale, PagePath};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    /// Path after the locale segment, e.g. `/products`.
    pub path: String,
}

impl BreadcrumbItem {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreadcrumbList {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub item_list_element: Vec<ListItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListItem {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub position: usize,
    pub name: String,
    pub item: String,
}

pub fn generate_breadcrumb_schema(
    site: &Site,
    items: &[BreadcrumbItem],
    locale: Locale,
) -> BreadcrumbList {
    let item_list_element = items
        .iter()
        .enumerate()
        .map(|(i, crumb)| ListItem {
            schema_type: "ListItem",
            position: i + 1,
            name: crumb.name.clone(),
            item: site.locale_url(locale, &PagePath::new(&crumb.path)),
        })
        .collect();

    BreadcrumbList {
        context: SCHEMA_CONTEXT,
        schema_type: "BreadcrumbList",
        item_list_element,
    }
}
