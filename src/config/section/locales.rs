//! `[locales]` section configuration.
//!
//! ```toml
//! [locales]
//! supported = ["fr", "en", "es", "de", "ru"]
//! default = "fr"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath};
use crate::core::{Locale, LocaleRegistry};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalesConfig {
    /// Published locales, in the order alternates are emitted.
    pub supported: Vec<String>,

    /// Locale used for `x-default` and schema fallbacks.
    pub default: String,
}

pub struct LocalesFields {
    pub supported: FieldPath,
    pub default: FieldPath,
}

impl LocalesConfig {
    pub const FIELDS: LocalesFields = LocalesFields {
        supported: FieldPath::new("locales.supported"),
        default: FieldPath::new("locales.default"),
    };

    /// Validate and build the registry.
    ///
    /// # Checks
    /// - `supported` is non-empty, every code is known, no duplicates
    /// - `default` is known and listed in `supported`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) -> Option<LocaleRegistry> {
        let errors_before = diag.len();

        if self.supported.is_empty() {
            diag.error(Self::FIELDS.supported, "at least one locale is required");
        }

        let mut locales = Vec::with_capacity(self.supported.len());
        for code in &self.supported {
            match code.parse::<Locale>() {
                Ok(locale) if locales.contains(&locale) => {
                    diag.error(Self::FIELDS.supported, format!("`{code}` is listed twice"));
                }
                Ok(locale) => locales.push(locale),
                Err(e) => diag.error_with_hint(Self::FIELDS.supported, e.to_string(), known_hint()),
            }
        }

        let default = match self.default.parse::<Locale>() {
            Ok(locale) => Some(locale),
            Err(e) => {
                diag.error_with_hint(Self::FIELDS.default, e.to_string(), known_hint());
                None
            }
        };
        if let Some(default) = default
            && !self.supported.iter().any(|code| code == default.code())
        {
            diag.error_with_hint(
                Self::FIELDS.default,
                format!("default locale `{default}` is not in {}", Self::FIELDS.supported),
                format!("add \"{default}\" to {}", Self::FIELDS.supported),
            );
        }

        if diag.len() > errors_before {
            return None;
        }
        LocaleRegistry::new(locales, default?).ok()
    }
}

impl Default for LocalesConfig {
    fn default() -> Self {
        let registry = LocaleRegistry::default();
        Self {
            supported: registry.locales().iter().map(|l| l.code().to_string()).collect(),
            default: registry.default_locale().code().to_string(),
        }
    }
}

fn known_hint() -> String {
    let known: Vec<_> = Locale::ALL.iter().map(|l| l.code()).collect();
    format!("use one of: {}", known.join(", "))
}
