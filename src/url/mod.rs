//! URL parsing for the fetch loop.
//!
//! This module implements the restricted URL grammar the client acts on:
//! an optional `http` scheme, an authority with optional userinfo and port,
//! and an optional path/query (fragments are dropped). Percent-encoding and
//! charset normalization live here too.

mod error;
pub mod percent;
mod parser;

pub use error::UrlError;
pub use parser::{Scheme, Url};
