//! `Organization` JSON-LD.

use serde::{Deserialize, Serialize};

use super::SCHEMA_CONTEXT;
use crate::config::Site;
use crate::core::{Locale, PagePath};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationData {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Site path or absolute URL; falls back to the configured site logo.
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub contact: Option<ContactData>,
    #[serde(default)]
    pub address: Option<AddressData>,
    /// Social profile URLs.
    #[serde(default)]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactData {
    #[serde(default)]
    pub telephone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default = "default_contact_type")]
    pub contact_type: String,
}

fn default_contact_type() -> String {
    "customer service".into()
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressData {
    #[serde(default)]
    pub street_address: Option<String>,
    #[serde(default)]
    pub address_locality: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub address_country: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Organization {
    #[serde(rename = "@context")]
    pub context: &'static str,
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_point: Option<ContactPoint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<PostalAddress>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPoint {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telephone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub contact_type: String,
    /// Native names of the site's locales.
    pub available_language: Vec<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostalAddress {
    #[serde(rename = "@type")]
    pub schema_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    pub address_country: String,
}

pub fn generate_organization_schema(
    site: &Site,
    data: &OrganizationData,
    locale: Locale,
) -> Organization {
    let logo = match &data.logo {
        Some(logo) => Some(site.origin().resolve(logo)),
        None => site.logo().map(str::to_string),
    };

    let contact_point = data.contact.as_ref().map(|contact| ContactPoint {
        schema_type: "ContactPoint",
        telephone: contact.telephone.clone(),
        email: contact.email.clone(),
        contact_type: contact.contact_type.clone(),
        available_language: site.registry().locales().iter().map(|l| l.label()).collect(),
    });

    let address = data.address.as_ref().map(|address| PostalAddress {
        schema_type: "PostalAddress",
        street_address: address.street_address.clone(),
        address_locality: address.address_locality.clone(),
        postal_code: address.postal_code.clone(),
        address_country: address.address_country.clone(),
    });

    Organization {
        context: SCHEMA_CONTEXT,
        schema_type: "Organization",
        name: data.name.clone(),
        url: site.locale_url(locale, &PagePath::root()),
        logo,
        description: data.description.clone(),
        contact_point,
        address,
        same_as: data.same_as.clone(),
    }
}
