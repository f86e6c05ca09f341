//! The User-Agent string sent with every request.

/// Default User-Agent (tool name plus crate version).
#[must_use]
pub(crate) fn default_user_agent() -> String {
    format!("httpget/{}", env!("CARGO_PKG_VERSION"))
}
