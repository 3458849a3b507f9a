//! Ordered set of supported locales with a designated default.

use super::{CoreError, Locale};

/// The locales a site publishes, in presentation order.
///
/// Invariants (checked in [`LocaleRegistry::new`]):
/// - Non-empty, no duplicates
/// - `default` is a member
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    locales: Vec<Locale>,
    default: Locale,
}

impl LocaleRegistry {
    pub fn new(locales: Vec<Locale>, default: Locale) -> Result<Self, CoreError> {
        if locales.is_empty() {
            return Err(CoreError::EmptyRegistry);
        }
        for (i, locale) in locales.iter().enumerate() {
            if locales[..i].contains(locale) {
                return Err(CoreError::DuplicateLocale(*locale));
            }
        }
        if !locales.contains(&default) {
            return Err(CoreError::DefaultNotRegistered(default));
        }
        Ok(Self { locales, default })
    }

    /// Registered locales in registry order.
    #[inline]
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// Locale behind `x-default` and schema fallbacks.
    #[inline]
    pub fn default_locale(&self) -> Locale {
        self.default
    }

    #[inline]
    pub fn contains(&self, locale: Locale) -> bool {
        self.locales.contains(&locale)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.locales.len()
    }

    /// Always false for a constructed registry; kept for the `len` pairing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl Default for LocaleRegistry {
    /// `fr, en, es, de, ru` with `fr` as default.
    fn default() -> Self {
        Self {
            locales: Locale::ALL.to_vec(),
            default: Locale::Fr,
        }
    }
}
