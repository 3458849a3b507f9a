//! Command-line interface module.

mod args;
mod output;
mod schema;

pub use args::{Cli, Commands, MetaArgs};

use anyhow::Result;
use locale_seo::seo::{MetaTagsConfig, generate_hreflang_tags, generate_meta_tags};
use locale_seo::{PagePath, Site, log};

/// Run the parsed command against a validated site.
pub fn run(cli: &Cli, site: &Site) -> Result<()> {
    let output = cli.output.as_deref();

    match &cli.command {
        Commands::Check => {
            check(site);
            Ok(())
        }
        Commands::Hreflang { path } => {
            let tags = generate_hreflang_tags(site, &PagePath::parse(path)?);
            output::write_json(&tags, cli.pretty, output)
        }
        Commands::Meta { args } => {
            let metadata = generate_meta_tags(site, &meta_config(args)?)?;
            output::write_json(&metadata, cli.pretty, output)
        }
        Commands::Schema { args } => {
            let ld = schema::generate(site, args)?;
            output::write_json(&ld, cli.pretty, output)
        }
    }
}

fn meta_config(args: &MetaArgs) -> Result<MetaTagsConfig> {
    let mut config = MetaTagsConfig::new(
        args.title.as_str(),
        args.description.as_str(),
        args.locale,
        PagePath::parse(&args.path)?,
    )
    .with_no_index(args.no_index)
    .with_keywords(args.keywords.iter().map(|k| k.trim()).filter(|k| !k.is_empty()));

    if let Some(image) = &args.image {
        config = config.with_image(image.as_str());
    }
    Ok(config)
}

fn check(site: &Site) {
    let registry = site.registry();
    let locales: Vec<_> = registry.locales().iter().map(|l| l.code()).collect();

    log!("check"; "site `{}` at {}", site.name(), site.origin());
    log!("check"; "locales: {} (default: {})", locales.join(", "), registry.default_locale());
    log!("check"; "default image: {}", site.default_image());
    if let Some(logo) = site.logo() {
        log!("check"; "logo: {}", logo);
    }
}
