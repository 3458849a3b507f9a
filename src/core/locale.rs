//! Supported locales and their fixed lookup tables.
//!
//! `Locale` is a closed enum: every variant has an Open Graph tag and a
//! display label, so an unmapped locale cannot exist at runtime. Unknown
//! codes are rejected when parsed (config load or caller input).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::CoreError;

/// A supported site locale, used as the URL segment `/{code}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Locale {
    Fr,
    En,
    Es,
    De,
    Ru,
}

impl Locale {
    /// Every locale the tables know about, in declaration order.
    pub const ALL: [Locale; 5] = [Self::Fr, Self::En, Self::Es, Self::De, Self::Ru];

    /// Short code used in URLs and hreflang values.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Es => "es",
            Self::De => "de",
            Self::Ru => "ru",
        }
    }

    /// Open Graph `og:locale` tag (`language_TERRITORY`).
    pub const fn og_tag(self) -> &'static str {
        match self {
            Self::Fr => "fr_FR",
            Self::En => "en_US",
            Self::Es => "es_ES",
            Self::De => "de_DE",
            Self::Ru => "ru_RU",
        }
    }

    /// Native display name, used for `availableLanguage` lists.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fr => "Français",
            Self::En => "English",
            Self::Es => "Español",
            Self::De => "Deutsch",
            Self::Ru => "Русский",
        }
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    /// Exact, lowercase match on the short code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|locale| locale.code() == s)
            .ok_or_else(|| CoreError::UnknownLocale(s.to_string()))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
