//! Site configuration management for `seo.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   └── locales    # [locales]
//! ├── types/         # ConfigError, diagnostics, FieldPath
//! ├── overrides      # SEO_SITE_URL / SEO_SITE_NAME and CLI overrides
//! ├── resolved       # Site (validated, read-only)
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Loading is a one-shot startup step: parse, apply overrides, validate
//! every field, then hand out an immutable [`Site`]. Any error here is
//! fatal for the process.

pub mod section;
pub mod types;
mod overrides;
mod resolved;
mod util;

pub use overrides::ConfigOverrides;
pub use resolved::Site;
pub use section::{LocalesConfig, SiteInfoConfig};
pub use types::{ConfigDiagnostic, ConfigDiagnostics, ConfigError, FieldPath};
pub use util::{find_config_file, find_config_file_from};

use crate::{debug, log};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing seo.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site identity (origin, name, images)
    #[serde(default)]
    pub site: SiteInfoConfig,

    /// Locale registry
    #[serde(default)]
    pub locales: LocalesConfig,
}

impl SiteConfig {
    /// Config file looked up when `--config` is not given.
    pub const DEFAULT_FILE: &'static str = "seo.toml";

    /// Load, override and validate configuration.
    ///
    /// `config_name` is searched upward from the current directory. A
    /// missing [`DEFAULT_FILE`](Self::DEFAULT_FILE) is not an error:
    /// defaults are used and the site identity must then come from
    /// `overrides`. Any other missing file is [`ConfigError::NotFound`].
    pub fn load(config_name: &Path, overrides: &ConfigOverrides) -> Result<Site, ConfigError> {
        let mut config = match find_config_file(config_name) {
            Some(path) => {
                debug!("config"; "loading {}", path.display());
                Self::from_path(&path)?
            }
            None if config_name == Path::new(Self::DEFAULT_FILE) => {
                debug!("config"; "{} not found, using defaults", config_name.display());
                Self::default()
            }
            None => return Err(ConfigError::NotFound(config_name.to_path_buf())),
        };

        config.apply_overrides(overrides);
        config.validate()
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;

        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Apply environment/CLI overrides on top of the parsed file.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(url) = &overrides.site_url {
            debug!("config"; "{} overridden: {}", SiteInfoConfig::FIELDS.url.as_str(), url);
            self.site.url = Some(url.clone());
        }
        if let Some(name) = &overrides.site_name {
            debug!("config"; "{} overridden: {}", SiteInfoConfig::FIELDS.name.as_str(), name);
            self.site.name = name.clone();
        }
    }

    /// Validate every section and build the read-only [`Site`].
    pub fn validate(&self) -> Result<Site, ConfigError> {
        let mut diag = ConfigDiagnostics::new();

        let origin = self.site.validate(&mut diag);
        let registry = self.locales.validate(&mut diag);

        match (origin, registry) {
            (Some(origin), Some(registry)) if !diag.has_errors() => {
                let mut site = Site::new(origin, self.site.name.trim(), registry)
                    .with_default_image(&self.site.default_image);
                if let Some(logo) = &self.site.logo {
                    site = site.with_logo(logo);
                }
                Ok(site)
            }
            _ => Err(ConfigError::Diagnostics(diag)),
        }
    }
}

// ============================================================================
// tests
// ============================================================================
