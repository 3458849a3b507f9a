//! Core types - pure abstractions shared across the codebase.

mod error;
mod locale;
mod registry;
mod url;

pub use error::CoreError;
pub use locale::Locale;
pub use registry::LocaleRegistry;
pub use url::{PagePath, SiteOrigin, build_locale_url};
