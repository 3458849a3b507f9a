//! locale-seo - page metadata and JSON-LD from the command line.

mod cli;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::Cli;
use locale_seo::{ConfigOverrides, SiteConfig, logger};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let overrides = ConfigOverrides {
        site_url: cli.site_url.clone(),
        site_name: cli.site_name.clone(),
    }
    .or(ConfigOverrides::from_env());

    let site = SiteConfig::load(&cli.config, &overrides)?;
    cli::run(&cli, &site)
}
