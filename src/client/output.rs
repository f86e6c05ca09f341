//! Output file naming and collision avoidance.
//!
//! The body of a successful fetch lands in a file named after the last
//! segment of the URL path, decoded and with any query stripped. Existing
//! files are never clobbered: collisions get a `.1`, `.2`, ... suffix.

use std::path::{Path, PathBuf};

use tokio::fs::{File, OpenOptions};
use tracing::warn;

use super::error::FetchError;
use crate::url::{Url, percent};

/// Name used when the URL yields no usable file name.
const FALLBACK_NAME: &str = "index.html";

/// Collision suffixes tried before giving up.
const MAX_SUFFIX: u32 = 1000;

/// Derives the output file name for `url`: the percent-decoded final path
/// segment with the query stripped, or `index.html` when that leaves
/// nothing.
#[must_use]
pub(crate) fn candidate_name(url: &Url) -> String {
    let Some(path) = url.path.as_deref() else {
        return FALLBACK_NAME.to_string();
    };

    let decoded = percent::unescape(path);
    let segment = match decoded.rfind('/') {
        Some(at) => &decoded[at + 1..],
        None => &decoded,
    };
    let name = match segment.find('?') {
        Some(at) => &segment[..at],
        None => segment,
    };

    if name.is_empty() {
        FALLBACK_NAME.to_string()
    } else {
        name.to_string()
    }
}

/// Creates the output file for `name` under `dir` without overwriting
/// anything: on collision, `name.1`, `name.2`, ... are tried in order.
///
/// Returns the open file and its path, or `None` when every suffix up to
/// the limit is taken (the store is skipped with a warning).
///
/// # Errors
///
/// Returns [`FetchError::Output`] for any create failure other than the
/// file already existing.
pub(crate) async fn create_output_file(
    dir: &Path,
    name: &str,
) -> Result<Option<(File, PathBuf)>, FetchError> {
    for n in 0..MAX_SUFFIX {
        let candidate = if n == 0 {
            name.to_string()
        } else {
            format!("{name}.{n}")
        };
        let path = dir.join(candidate);

        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await
        {
            Ok(file) => return Ok(Some((file, path))),
            Err(source) if source.kind() == std::io::ErrorKind::AlreadyExists => {}
            Err(source) => return Err(FetchError::output(path, source)),
        }
    }

    warn!(name, "no free file name after {MAX_SUFFIX} attempts, skipping store");
    Ok(None)
}
