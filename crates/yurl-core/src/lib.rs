//! URL value type with RFC 3986 splitting, serialization, validation and
//! reference resolution, plus the config, logging and parse cache used by
//! the `yurl` command-line tool.

pub mod cache;
pub mod config;
pub mod logging;
pub mod url;

pub use cache::UrlCache;
pub use url::{remove_dot_segments, Replace, ReplaceError, Url, UrlParts, ValidationError};
