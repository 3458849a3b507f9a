//! `Product` JSON-LD.
//!
//! `offers` and `aggregateRating` are emitted only when their input is
//! present. Presence is decided by `Option`, so a rating of `0` or a price
//! of `0.0` is still emitted.

use serde::{Deserialize, Serialize};

use super::{OrganizationRef, SCHEMA_CONTEXT};
use crate::config::Site;
use crate::core::{Locale, PagePath};

/// URL section products live under.
pub const PRODUCTS_SECTION: &str = "products";

const BEST_RATING: u8 = 5;
const WORST_RATING: u8 = 1;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub image: Vec<String>,
    pub category: String,
    #[serde(default)]
    pub sku: Option<String>,
    /// Brand name; the site name is used when absent.
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub offers: Option<OfferData>,
    #[serde(default)]
    pub aggregate_rating: Option<RatingData>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OfferData {
    pub price: f64,
    pub price_currency: String,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub price_valid_until: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingData {
    pub rating_value: f64,
    pub review_count: u32,
}

/// schema.org `ItemAvailability` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub enum Availability {
    #[default]
    InStock,
    OutOfStock,
    PreOrder,
    LimitedAvailability,
    Discontinued,
}

impl Availability {
    pub const fn url(self) -> &'static str {
        match self {
            Self::InStock => "https://schema.org/InStock",
            Self::OutOfStock => "https://schema.org/OutOfStock",
            Self::PreOrder => "https://schema.org/PreOrder",
            Self::LimitedAvailability => "https://schema.org/LimitedAvailability",
            Self::Discontinued => "https://schema.org/Discontinued",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub description: String,
    pub image: Vec<String>,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    pub url: String,
    pub brand: Brand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offers: Option<Offer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_rating: Option<AggregateRating>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Brand {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Offer {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub price: f64,
    pub price_currency: String,
    pub availability: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price_valid_until: Option<String>,
    pub url: String,
    pub seller: OrganizationRef,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregateRating {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub rating_value: f64,
    pub review_count: u32,
    pub best_rating: u8,
    pub worst_rating: u8,
}

pub fn generate_product_schema(
    site: &Site,
    data: &ProductData,
    locale: Locale,
    slug: &str,
) -> Product {
    let url = site.locale_url(locale, &PagePath::section_item(PRODUCTS_SECTION, slug));

    let offers = data.offers.as_ref().map(|offer| Offer {
        schema_type: "Offer",
        price: offer.price,
        price_currency: offer.price_currency.clone(),
        availability: offer.availability.url(),
        price_valid_until: offer.price_valid_until.clone(),
        url: url.clone(),
        seller: OrganizationRef::new(site.name(), None),
    });

    let aggregate_rating = data.aggregate_rating.map(|rating| AggregateRating {
        schema_type: "AggregateRating",
        rating_value: rating.rating_value,
        review_count: rating.review_count,
        best_rating: BEST_RATING,
        worst_rating: WORST_RATING,
    });

    Product {
        context: SCHEMA_CONTEXT,
        schema_type: "Product",
        name: data.name.clone(),
        description: data.description.clone(),
        image: data.image.clone(),
        category: data.category.clone(),
        sku: data.sku.clone(),
        url,
        brand: Brand {
            schema_type: "Brand",
            name: data.brand.clone().unwrap_or_else(|| site.name().to_string()),
        },
        offers,
        aggregate_rating,
    }
}
