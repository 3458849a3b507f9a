//! Schema.org JSON-LD objects.
//!
//! One module per object type. Each generator is a pure function of typed
//! input, a locale and the shared [`Site`](crate::config::Site); optional
//! sub-objects appear in the output only when their input is present.
//!
//! | Type             | URL                          |
//! |------------------|------------------------------|
//! | `Organization`   | `/{locale}`                  |
//! | `Product`        | `/{locale}/products/{slug}`  |
//! | `Article`        | `/{locale}/blog/{slug}`      |
//! | `BreadcrumbList` | `/{locale}{item.path}`       |
//! | `WebSite`        | `/{locale}`                  |

mod article;
mod breadcrumb;
mod organization;
mod product;
mod website;

pub use article::{
    Article, ArticleData, AuthorData, Person, PublisherData, WebPageRef, generate_article_schema,
};
pub use breadcrumb::{BreadcrumbItem, BreadcrumbList, ListItem, generate_breadcrumb_schema};
pub use organization::{
    AddressData, ContactData, ContactPoint, Organization, OrganizationData, PostalAddress,
    generate_organization_schema,
};
pub use product::{
    AggregateRating, Availability, Brand, Offer, OfferData, Product, ProductData, RatingData,
    generate_product_schema,
};
pub use website::{EntryPoint, SearchAction, WebSite, WebsiteData, generate_website_schema};

use serde::Serialize;

/// Value of every `@context`.
pub const SCHEMA_CONTEXT: &str = "https://schema.org";

/// Any of the generated objects, for callers that handle them uniformly.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum JsonLd {
    Organization(Organization),
    Product(Product),
    Article(Article),
    BreadcrumbList(BreadcrumbList),
    WebSite(WebSite),
}

impl JsonLd {
    /// The `@type` discriminant.
    pub fn schema_type(&self) -> &'static str {
        match self {
            Self::Organization(_) => "Organization",
            Self::Product(_) => "Product",
            Self::Article(_) => "Article",
            Self::BreadcrumbList(_) => "BreadcrumbList",
            Self::WebSite(_) => "WebSite",
        }
    }

    /// Compact payload for a `<script type="application/ld+json">` body.
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

macro_rules! impl_from_schema {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for JsonLd {
                fn from(value: $variant) -> Self {
                    Self::$variant(value)
                }
            }
        )*
    };
}

impl_from_schema!(Organization, Product, Article, BreadcrumbList, WebSite);

// ============================================================================
// Shared nodes
// ============================================================================

/// `{"@type": "ImageObject", "url": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageObject {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub url: String,
}

impl ImageObject {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            schema_type: "ImageObject",
            url: url.into(),
        }
    }
}

/// Nested organization reference (seller, publisher).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrganizationRef {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<ImageObject>,
}

impl OrganizationRef {
    pub fn new(name: impl Into<String>, logo: Option<ImageObject>) -> Self {
        Self {
            schema_type: "Organization",
            name: name.into(),
            logo,
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::site;
    use super::*;
    use crate::core::Locale;

    #[test]
    fn test_json_ld_untagged() {
        let website = generate_website_schema(&site(), &WebsiteData::default(), Locale::En);
        let ld = JsonLd::from(website);
        assert_eq!(ld.schema_type(), "WebSite");

        let json: serde_json::Value = serde_json::from_str(&ld.to_json_string().unwrap()).unwrap();
        assert_eq!(json["@context"], SCHEMA_CONTEXT);
        assert_eq!(json["@type"], "WebSite");
    }

    #[test]
    fn test_json_ld_starts_with_context() {
        let crumbs = generate_breadcrumb_schema(&site(), &[], Locale::Fr);
        let payload = JsonLd::from(crumbs).to_json_string().unwrap();
        assert!(payload.starts_with(r#"{"@context":"https://schema.org","@type":"BreadcrumbList""#));
    }

    #[test]
    fn test_organization_ref_omits_missing_logo() {
        let json = serde_json::to_value(OrganizationRef::new("Afrexia", None)).unwrap();
        assert_eq!(json, serde_json::json!({"@type": "Organization", "name": "Afrexia"}));
    }
}
