//! Page metadata and structured data.
//!
//! | Module     | Purpose                                               |
//! |------------|-------------------------------------------------------|
//! | `hreflang` | Per-locale alternates plus `x-default`                |
//! | `meta`     | Page metadata record (robots, canonical, OG, Twitter) |
//! | `og`       | Open Graph and Twitter Card blocks                    |
//! | `schema`   | Schema.org JSON-LD objects                            |
//!
//! Everything here is a pure function of its arguments and a shared
//! read-only [`Site`](crate::config::Site).

mod error;
pub mod hreflang;
pub mod meta;
pub mod og;
pub mod schema;

pub use error::SeoError;
pub use hreflang::{Hreflang, HreflangTag, Languages, generate_hreflang_tags};
pub use meta::{Alternates, MetaTagsConfig, Metadata, Robots, generate_meta_tags};
pub use og::{OgImage, OpenGraph, TwitterCard};
