//! Errors raised while loading `seo.toml`.
//!
//! Validation never stops at the first problem: every section reports into
//! one [`ConfigDiagnostics`], which renders grouped by TOML table:
//!
//! ```text
//! seo.toml is invalid:
//!
//! [site]
//!   url     site url is not configured
//!           hint: set `site.url` or SEO_SITE_URL
//! [locales]
//!   default `it` is not a supported locale
//!
//! 2 problems
//! ```

use super::FieldPath;
use owo_colors::OwoColorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Anything that stops the site configuration from loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("`{0}` not found")]
    NotFound(PathBuf),

    #[error("seo.toml is not valid TOML")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Diagnostics(ConfigDiagnostics),
}

/// One rejected field.
#[derive(Debug, Clone)]
pub struct ConfigDiagnostic {
    pub field: FieldPath,
    pub message: String,
    pub hint: Option<String>,
}

/// Every rejected field found in one validation pass, in report order.
#[derive(Debug, Default)]
pub struct ConfigDiagnostics {
    errors: Vec<ConfigDiagnostic>,
}

impl ConfigDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn error(&mut self, field: FieldPath, message: impl Into<String>) {
        self.push(field, message.into(), None);
    }

    pub fn error_with_hint(
        &mut self,
        field: FieldPath,
        message: impl Into<String>,
        hint: impl Into<String>,
    ) {
        self.push(field, message.into(), Some(hint.into()));
    }

    fn push(&mut self, field: FieldPath, message: String, hint: Option<String>) {
        self.errors.push(ConfigDiagnostic { field, message, hint });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn has_error_for(&self, field: FieldPath) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Tables with at least one problem, in first-reported order.
    fn sections(&self) -> Vec<&'static str> {
        let mut sections = Vec::new();
        for diagnostic in &self.errors {
            let section = diagnostic.field.section();
            if !sections.contains(&section) {
                sections.push(section);
            }
        }
        sections
    }
}

impl fmt::Display for ConfigDiagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "seo.toml is invalid:".red().bold())?;

        let width = self
            .errors
            .iter()
            .map(|e| e.field.key().len())
            .max()
            .unwrap_or(0);

        for section in self.sections() {
            write!(f, "\n{}", format_args!("[{section}]").cyan())?;
            for diagnostic in self.errors.iter().filter(|e| e.field.section() == section) {
                let key = diagnostic.field.key();
                write!(f, "\n  {:<width$} {}", key.bold(), diagnostic.message)?;
                if let Some(hint) = &diagnostic.hint {
                    write!(f, "\n  {:<width$} {} {}", "", "hint:".yellow(), hint)?;
                }
            }
        }

        let noun = if self.errors.len() == 1 { "problem" } else { "problems" };
        write!(f, "\n\n{} {}", self.errors.len().to_string().red().bold(), noun)
    }
}

impl std::error::Error for ConfigDiagnostics {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    #[test]
    fn test_io_error_names_file() {
        let err = ConfigError::Io(
            PathBuf::from("seo.toml"),
            Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("seo.toml"));
    }

    #[test]
    fn test_not_found_names_file() {
        let err = ConfigError::NotFound(PathBuf::from("custom.toml"));
        assert_eq!(err.to_string(), "`custom.toml` not found");
    }

    #[test]
    fn test_diagnostics_grouped_by_section() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.url"), "site url is not configured");
        diag.error_with_hint(
            FieldPath::new("locales.default"),
            "`it` is not a supported locale",
            "use one of: fr, en",
        );
        diag.error(FieldPath::new("site.name"), "site name is empty");

        assert_eq!(diag.sections(), ["site", "locales"]);

        let display = diag.to_string();
        assert!(display.contains("seo.toml is invalid"));
        assert!(display.contains("[site]"));
        assert!(display.contains("[locales]"));
        assert!(display.contains("site url is not configured"));
        assert!(display.contains("use one of: fr, en"));
        assert!(display.contains("problems"));

        // both [site] entries are listed before [locales]
        let name_at = display.find("site name is empty").unwrap();
        let locales_at = display.find("[locales]").unwrap();
        assert!(name_at < locales_at);
    }

    #[test]
    fn test_single_problem_wording() {
        let mut diag = ConfigDiagnostics::new();
        diag.error(FieldPath::new("site.name"), "site name is empty");
        assert!(diag.has_error_for(FieldPath::new("site.name")));
        assert!(!diag.has_error_for(FieldPath::new("site.url")));
        assert!(diag.to_string().contains("problem"));
        assert!(!diag.to_string().contains("problems"));
    }
}
