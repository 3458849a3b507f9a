//! Errors raised while constructing core values.

use thiserror::Error;

use super::Locale;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown locale `{0}`")]
    UnknownLocale(String),

    #[error("locale registry is empty")]
    EmptyRegistry,

    #[error("locale `{0}` is registered more than once")]
    DuplicateLocale(Locale),

    #[error("default locale `{0}` is not in the locale registry")]
    DefaultNotRegistered(Locale),

    #[error("invalid site origin {0}")]
    InvalidOrigin(String),

    #[error("page path `{0}` must be empty or start with `/`")]
    InvalidPath(String),
}
