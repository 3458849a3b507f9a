//! `schema` command: typed JSON input -> JSON-LD.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result, bail};
use locale_seo::Site;
use locale_seo::debug;
use locale_seo::seo::schema::{
    self, ArticleData, BreadcrumbItem, JsonLd, OrganizationData, ProductData, WebsiteData,
};
use serde::de::DeserializeOwned;

use super::args::{SchemaArgs, SchemaKind};

pub fn generate(site: &Site, args: &SchemaArgs) -> Result<JsonLd> {
    let slug = match (&args.slug, args.kind.needs_slug()) {
        (Some(slug), true) => slug.as_str(),
        (None, true) => bail!("`--slug` is required for {:?} schema", args.kind),
        (_, false) => "",
    };

    let input = match &args.input {
        Some(path) => Some(read_input(path)?),
        None => None,
    };
    let locale = args.locale;

    let ld: JsonLd = match args.kind {
        SchemaKind::Organization => {
            let data: OrganizationData = parse(required(input, args.kind)?)?;
            schema::generate_organization_schema(site, &data, locale).into()
        }
        SchemaKind::Product => {
            let data: ProductData = parse(required(input, args.kind)?)?;
            schema::generate_product_schema(site, &data, locale, slug).into()
        }
        SchemaKind::Article => {
            let data: ArticleData = parse(required(input, args.kind)?)?;
            schema::generate_article_schema(site, &data, locale, slug).into()
        }
        SchemaKind::Breadcrumb => {
            let items: Vec<BreadcrumbItem> = parse(required(input, args.kind)?)?;
            schema::generate_breadcrumb_schema(site, &items, locale).into()
        }
        SchemaKind::Website => {
            let data: WebsiteData = match input {
                Some(content) => parse(content)?,
                None => WebsiteData::default(),
            };
            schema::generate_website_schema(site, &data, locale).into()
        }
    };

    debug!("schema"; "generated {} for {}", ld.schema_type(), locale);
    Ok(ld)
}

/// Read JSON from a file, or from stdin for `-`.
fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("failed to read schema input from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
    }
}

fn required(input: Option<String>, kind: SchemaKind) -> Result<String> {
    match input {
        Some(content) => Ok(content),
        None => bail!("`--input` is required for {:?} schema", kind),
    }
}

fn parse<T: DeserializeOwned>(content: String) -> Result<T> {
    serde_json::from_str(&content).context("invalid schema input")
}

#[cfg(test)]
mod tests {
    use super::*;
    use locale_seo::{Locale, LocaleRegistry, SiteOrigin};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn site() -> Site {
        Site::new(
            SiteOrigin::parse("https://afrexia.com").unwrap(),
            "Afrexia",
            LocaleRegistry::default(),
        )
    }

    fn args(kind: SchemaKind, slug: Option<&str>, input: Option<PathBuf>) -> SchemaArgs {
        SchemaArgs {
            kind,
            locale: Locale::En,
            slug: slug.map(str::to_string),
            input,
        }
    }

    #[test]
    fn test_product_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("product.json");
        fs::write(
            &path,
            r#"{"name": "Cocoa", "description": "...", "image": ["https://x/1.jpg"], "category": "Cocoa"}"#,
        )
        .unwrap();

        let ld = generate(&site(), &args(SchemaKind::Product, Some("premium-cocoa"), Some(path))).unwrap();
        let JsonLd::Product(product) = ld else {
            panic!("expected product");
        };
        assert_eq!(product.url, "https://afrexia.com/en/products/premium-cocoa");
        assert!(product.offers.is_none());
    }

    #[test]
    fn test_slug_required() {
        let err = generate(&site(), &args(SchemaKind::Article, None, None)).unwrap_err();
        assert!(err.to_string().contains("--slug"));
    }

    #[test]
    fn test_input_required() {
        let err = generate(&site(), &args(SchemaKind::Breadcrumb, None, None)).unwrap_err();
        assert!(err.to_string().contains("--input"));
    }

    #[test]
    fn test_website_without_input() {
        let ld = generate(&site(), &args(SchemaKind::Website, None, None)).unwrap();
        assert_eq!(ld.schema_type(), "WebSite");
    }

    #[test]
    fn test_missing_required_field() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("org.json");
        fs::write(&path, r#"{"description": "no name"}"#).unwrap();
        assert!(generate(&site(), &args(SchemaKind::Organization, None, Some(path))).is_err());
    }
}
