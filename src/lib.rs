//! httpget core library
//!
//! A minimal HTTP/1.1 GET client: parse a URL, connect, send one request,
//! interpret the response, follow redirects, retry with Basic credentials
//! when challenged, and stream the body to a local file.
//!
//! # Architecture
//!
//! - [`url`] - restricted-grammar URL parsing and percent-encoding
//! - [`http`] - the wire protocol: request serialization, response head
//!   parsing, body framing
//! - [`client`] - the session state machine, transport and output files
//! - [`config`] - locale-derived input encoding

// Clippy lints - strict for library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod client;
pub mod config;
pub mod http;
pub mod url;
mod user_agent;

// Re-export commonly used types
pub use client::{FetchError, Session};
pub use url::{Scheme, Url, UrlError};
