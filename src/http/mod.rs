//! Client side of the HTTP/1.1 wire protocol.
//!
//! Request serialization, status/header parsing, and body framing. The
//! modules here are transport-agnostic: they work against any async stream,
//! which is what makes them testable without sockets.

pub mod body;
pub mod request;
pub mod response;

pub use response::HeaderState;
