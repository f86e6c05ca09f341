//! Status-line and header parsing.
//!
//! Headers are consumed incrementally: each parsed pair is dispatched into
//! [`HeaderState`] as soon as it is read, and never retained as a
//! collection.

use std::io;

use tokio::io::AsyncBufRead;
use tracing::{debug, info, warn};

/// The response facts the fetch loop acts on, collected while reading the
/// header block. Reset wholesale at the start of every attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderState {
    /// The server asked to keep the connection open.
    pub keep_alive: bool,
    /// The body uses chunked transfer encoding.
    pub chunked: bool,
    /// The server offered authentication (only Basic is ever attempted).
    pub basic_auth_offered: bool,
    /// Redirect target from the last `Location` header seen.
    pub location: Option<String>,
    /// Declared body length; meaningful only when `chunked` is false.
    pub content_length: u64,
}

impl HeaderState {
    /// A fresh, all-clear state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Dispatches one header pair into the state. Unrecognized names are
    /// ignored.
    fn collect(&mut self, name: &str, value: &str) {
        match KnownHeader::from_name(name) {
            Some(KnownHeader::Connection) => {
                self.keep_alive = value.eq_ignore_ascii_case("keep-alive");
            }
            Some(KnownHeader::ContentLength) => {
                // Unparsable lengths leave the previous value in place.
                if let Ok(length) = value.parse::<u64>() {
                    self.content_length = length;
                }
            }
            Some(KnownHeader::TransferEncoding) => {
                self.chunked = value.eq_ignore_ascii_case("chunked");
            }
            Some(KnownHeader::Location) => {
                // Last occurrence wins.
                self.location = Some(value.to_string());
            }
            Some(KnownHeader::WwwAuthenticate) => {
                let scheme = value.split(' ').next().unwrap_or(value);
                if !scheme.eq_ignore_ascii_case("basic") {
                    warn!(scheme, "authentication scheme not supported");
                }
                self.basic_auth_offered = true;
            }
            None => {}
        }
    }
}

/// The closed set of response headers the client recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnownHeader {
    Connection,
    ContentLength,
    TransferEncoding,
    Location,
    WwwAuthenticate,
}

impl KnownHeader {
    fn from_name(name: &str) -> Option<Self> {
        const TABLE: [(&str, KnownHeader); 5] = [
            ("connection", KnownHeader::Connection),
            ("content-length", KnownHeader::ContentLength),
            ("transfer-encoding", KnownHeader::TransferEncoding),
            ("location", KnownHeader::Location),
            ("www-authenticate", KnownHeader::WwwAuthenticate),
        ];

        TABLE
            .iter()
            .find(|(known, _)| name.eq_ignore_ascii_case(known))
            .map(|&(_, header)| header)
    }
}

/// Reads one line, accepting CRLF or bare LF endings, without requiring the
/// stream to be valid UTF-8. Returns `None` at end of stream.
pub(crate) async fn read_trimmed_line<R>(reader: &mut R) -> io::Result<Option<String>>
where
    R: AsyncBufRead + Unpin,
{
    use tokio::io::AsyncBufReadExt;

    let mut raw = Vec::new();
    if reader.read_until(b'\n', &mut raw).await? == 0 {
        return Ok(None);
    }
    if raw.last() == Some(&b'\n') {
        raw.pop();
    }
    if raw.last() == Some(&b'\r') {
        raw.pop();
    }

    Ok(Some(String::from_utf8_lossy(&raw).into_owned()))
}

/// Reads the status line and header block from `reader`, dispatching
/// recognized headers into `state`.
///
/// Returns the status code, or 0 when no usable status line arrived (the
/// caller treats 0 like any other unsupported status). Malformed header
/// lines are skipped with a warning.
///
/// # Errors
///
/// Returns the underlying IO error when reading from the stream fails.
pub async fn read_response<R>(reader: &mut R, state: &mut HeaderState) -> io::Result<u16>
where
    R: AsyncBufRead + Unpin,
{
    let mut status: u16 = 0;

    while let Some(line) = read_trimmed_line(reader).await? {
        if status == 0 {
            let Some((code, description)) = parse_status_line(&line) else {
                warn!(line, "invalid status line received");
                break;
            };
            status = code;
            info!(status, description, "response");
        } else if line.is_empty() {
            break;
        } else {
            match parse_header_line(&line) {
                Some((name, value)) => {
                    debug!(name, value, "header");
                    state.collect(name, value);
                }
                None => warn!(line, "skipping invalid header line"),
            }
        }
    }

    Ok(status)
}

/// Parses `HTTP/x.y <status> [description]`. Anything without a decimal
/// status of at least 100 after the first space run is invalid.
fn parse_status_line(line: &str) -> Option<(u16, Option<&str>)> {
    let after_version = &line[line.find(' ')?..];
    let rest = after_version.trim_start_matches(' ');
    if rest.is_empty() {
        return None;
    }

    let (token, remainder) = match rest.find(' ') {
        Some(at) => rest.split_at(at),
        None => (rest, ""),
    };
    let status = token.parse::<u16>().ok().filter(|&code| code >= 100)?;

    let description = remainder.trim_matches(' ');
    Some((status, (!description.is_empty()).then_some(description)))
}

/// Splits a header line at the first `:`. The name must be non-empty; the
/// value has surrounding spaces stripped and must be non-empty too.
fn parse_header_line(line: &str) -> Option<(&str, &str)> {
    let (name, value) = line.split_once(':')?;
    if name.is_empty() {
        return None;
    }

    let value = value.trim_matches(' ');
    (!value.is_empty()).then_some((name, value))
}
