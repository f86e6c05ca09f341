//! Error types for the fetch session.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::url::UrlError;

/// Fatal errors of a fetch session.
///
/// Protocol-level trouble (unsupported status, missing `Location`, a second
/// 401) is not an error here: the session warns and stops, and the process
/// still exits 0. These variants are the cases that end the run with a
/// non-zero exit.
#[derive(Debug, Error)]
pub enum FetchError {
    /// A URL (initial or redirect target) failed to parse.
    #[error("url parse failed for '{input}': {source}")]
    Url {
        /// The text that failed to parse.
        input: String,
        /// The parser's diagnosis.
        #[source]
        source: UrlError,
    },

    /// The TCP connect failed.
    #[error("connect {host}:{port} failed: {source}")]
    Connect {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The TCP connect did not finish within the timeout.
    #[error("connect {host}:{port} timed out")]
    ConnectTimeout {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Reading from or writing to the connection failed.
    #[error("stream error: {source}")]
    Stream {
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// Creating or writing the output file failed.
    #[error("output file {path}: {source}", path = .path.display())]
    Output {
        /// The file being written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },
}

impl FetchError {
    /// Creates a URL error.
    pub fn url(input: impl Into<String>, source: UrlError) -> Self {
        Self::Url {
            input: input.into(),
            source,
        }
    }

    /// Creates a connect error.
    pub fn connect(host: impl Into<String>, port: u16, source: io::Error) -> Self {
        Self::Connect {
            host: host.into(),
            port,
            source,
        }
    }

    /// Creates a connect-timeout error.
    pub fn connect_timeout(host: impl Into<String>, port: u16) -> Self {
        Self::ConnectTimeout {
            host: host.into(),
            port,
        }
    }

    /// Creates a stream error.
    pub fn stream(source: io::Error) -> Self {
        Self::Stream { source }
    }

    /// Creates an output-file error.
    pub fn output(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Output {
            path: path.into(),
            source,
        }
    }
}
