//! Error taxonomy for URL parsing.

use thiserror::Error;

/// Errors that can occur while parsing a URL.
///
/// Each variant maps to a stable numeric code (see [`UrlError::code`]) so
/// diagnostics stay comparable across versions; code 0 is reserved for
/// success and never appears here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UrlError {
    /// The URL names a scheme other than `http`.
    #[error("unknown scheme '{scheme}'")]
    UnknownScheme {
        /// The scheme as written (lower-cased).
        scheme: String,
    },

    /// The URL is structurally malformed (empty input, empty authority,
    /// userinfo with nothing after the `@`, ...).
    #[error("invalid url")]
    InvalidUrl,

    /// The userinfo part carries an empty username.
    #[error("invalid username")]
    InvalidUsername,

    /// The authority carries an empty host.
    #[error("invalid host")]
    InvalidHost,

    /// The port is empty, not a number, or outside 1-65535.
    #[error("invalid port")]
    InvalidPort,

    /// The input could not be converted from the configured source encoding.
    #[error("encoding failed: {reason}")]
    EncodingFailed {
        /// Why the conversion failed.
        reason: String,
    },
}

impl UrlError {
    /// Creates an `UnknownScheme` error.
    #[must_use]
    pub fn unknown_scheme(scheme: impl Into<String>) -> Self {
        Self::UnknownScheme {
            scheme: scheme.into(),
        }
    }

    /// Creates an `EncodingFailed` error.
    #[must_use]
    pub fn encoding_failed(reason: impl Into<String>) -> Self {
        Self::EncodingFailed {
            reason: reason.into(),
        }
    }

    /// Stable numeric code for this error (1-6; 0 would mean success).
    #[must_use]
    pub fn code(&self) -> u8 {
        match self {
            Self::UnknownScheme { .. } => 1,
            Self::InvalidUrl => 2,
            Self::InvalidUsername => 3,
            Self::InvalidHost => 4,
            Self::InvalidPort => 5,
            Self::EncodingFailed { .. } => 6,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(UrlError::unknown_scheme("ftp").code(), 1);
        assert_eq!(UrlError::InvalidUrl.code(), 2);
        assert_eq!(UrlError::InvalidUsername.code(), 3);
        assert_eq!(UrlError::InvalidHost.code(), 4);
        assert_eq!(UrlError::InvalidPort.code(), 5);
        assert_eq!(UrlError::encoding_failed("bad input").code(), 6);
    }

    #[test]
    fn test_display_carries_context() {
        let msg = UrlError::unknown_scheme("ftp").to_string();
        assert!(msg.contains("ftp"), "should name the scheme: {msg}");

        let msg = UrlError::encoding_failed("unknown encoding label 'x'").to_string();
        assert!(msg.contains("label 'x'"), "should carry the reason: {msg}");
    }
}
