//! Caller-contract violations raised by the synthesizers.

use thiserror::Error;

use crate::core::Locale;

/// Errors returned when a synthesizer is called with input it does not accept.
///
/// Absent *optional* data is never an error; it is handled by fallbacks.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SeoError {
    #[error("locale `{0}` is not in the site's locale registry")]
    UnregisteredLocale(Locale),

    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
}
