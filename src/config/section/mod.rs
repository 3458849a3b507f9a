//! Configuration section definitions.
//!
//! | Section     | Purpose                                        |
//! |-------------|------------------------------------------------|
//! | `[site]`    | Origin, display name, fallback image and logo  |
//! | `[locales]` | Supported locales and the default locale       |

mod locales;
mod site;

pub use locales::LocalesConfig;
pub use site::SiteInfoConfig;
