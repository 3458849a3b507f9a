//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand, ValueEnum};
use locale_seo::{Locale, SiteConfig};
use std::path::PathBuf;

/// Locale-aware page metadata and Schema.org JSON-LD generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: seo.toml)
    #[arg(short = 'C', long, global = true, default_value = SiteConfig::DEFAULT_FILE, value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override site origin (takes precedence over SEO_SITE_URL and the config file)
    ///
    /// Example: preview deployments
    ///   locale-seo --site-url "https://staging.example.com" meta ...
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Override site display name (takes precedence over SEO_SITE_NAME)
    #[arg(long = "site-name", global = true)]
    pub site_name: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Pretty-print JSON output
    #[arg(short, long, global = true)]
    pub pretty: bool,

    /// Write output to file instead of stdout
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Validate configuration and print a summary
    #[command(visible_alias = "c")]
    Check,

    /// Print hreflang alternates for a page path
    #[command(visible_alias = "h")]
    Hreflang {
        /// Page path after the locale segment (e.g. /products, or / for the root)
        #[arg(default_value = "")]
        path: String,
    },

    /// Print the metadata record for a page
    #[command(visible_alias = "m")]
    Meta {
        #[command(flatten)]
        args: MetaArgs,
    },

    /// Print a Schema.org JSON-LD object
    #[command(visible_alias = "s")]
    Schema {
        #[command(flatten)]
        args: SchemaArgs,
    },
}

/// Meta command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct MetaArgs {
    /// Page title
    #[arg(short, long)]
    pub title: String,

    /// Page description
    #[arg(short, long)]
    pub description: String,

    /// Page locale (fr, en, es, de, ru)
    #[arg(short, long)]
    pub locale: Locale,

    /// Page path after the locale segment
    #[arg(long, default_value = "")]
    pub path: String,

    /// Share image URL (defaults to the site image)
    #[arg(short, long)]
    pub image: Option<String>,

    /// Mark the page as not indexable
    #[arg(long)]
    pub no_index: bool,

    /// Keywords (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    pub keywords: Vec<String>,
}

/// Schema command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SchemaArgs {
    /// Schema.org object type
    #[arg(value_enum)]
    pub kind: SchemaKind,

    /// Locale of the page embedding the object
    #[arg(short, long)]
    pub locale: Locale,

    /// Product or article slug
    #[arg(short, long)]
    pub slug: Option<String>,

    /// JSON input data. Use `-` to read from stdin.
    #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
    pub input: Option<PathBuf>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    Organization,
    Product,
    Article,
    Breadcrumb,
    Website,
}

impl SchemaKind {
    /// Whether the object URL is built from a slug.
    pub const fn needs_slug(self) -> bool {
        matches!(self, Self::Product | Self::Article)
    }
}
