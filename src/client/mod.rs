//! The fetch session: one GET end to end, plus the redirect and
//! authentication retry loop.
//!
//! A session owns the current [`Url`] and drives attempts against it. Each
//! attempt connects, sends the request, reads the response head and then
//! decides: store the body (200), reconnect against a new URL (redirect),
//! retry with credentials (401 with Basic offered), or stop. The connection
//! of an attempt is always closed before the next one opens.

mod error;
pub mod output;
pub mod transport;

use std::path::PathBuf;

use tokio::io::{AsyncBufRead, AsyncWriteExt, BufStream, BufWriter};
use tracing::{info, warn};

pub use error::FetchError;

use crate::http::response::HeaderState;
use crate::http::{body, request, response};
use crate::url::Url;

/// What an attempt decided the session should do next.
#[derive(Debug)]
enum Outcome {
    /// Terminal: stored the body, or warned and stopped.
    Done,
    /// Reconnect with the redirect target as the new URL.
    Redirect(String),
    /// Reconnect to the same URL with Basic credentials attached.
    RetryWithAuth,
}

/// A fetch session for a single target URL.
#[derive(Debug)]
pub struct Session {
    url: Url,
    output_dir: PathBuf,
}

impl Session {
    /// Creates a session that saves its output under `output_dir`.
    #[must_use]
    pub fn new(url: Url, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            url,
            output_dir: output_dir.into(),
        }
    }

    /// Runs the session to completion.
    ///
    /// Protocol-level dead ends (unsupported status, redirect without a
    /// `Location`, failed authentication) warn and return `Ok(())`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] for connect failures, stream or output IO
    /// failures, and redirect targets that do not parse.
    pub async fn run(mut self) -> Result<(), FetchError> {
        let mut auth_required = false;

        loop {
            match self.attempt(auth_required).await? {
                Outcome::Done => return Ok(()),
                Outcome::Redirect(location) => {
                    info!(location, "redirect");
                    // The URL is replaced wholesale, never patched in place.
                    self.url = Url::parse(&location, None)
                        .map_err(|source| FetchError::url(&location, source))?;
                }
                Outcome::RetryWithAuth => auth_required = true,
            }
        }
    }

    /// Drives one connect/request/response cycle and maps the received
    /// status onto the next [`Outcome`]. The connection is dropped before
    /// returning.
    async fn attempt(&self, auth: bool) -> Result<Outcome, FetchError> {
        let mut state = HeaderState::new();

        let stream = transport::connect(&self.url.host, self.url.port).await?;
        let mut stream = BufStream::new(stream);

        info!(host = %self.url.host, port = self.url.port, "sending request");
        request::write_request(&mut stream, &self.url, auth)
            .await
            .map_err(FetchError::stream)?;

        let status = response::read_response(&mut stream, &mut state)
            .await
            .map_err(FetchError::stream)?;

        let outcome = match status {
            200 => {
                self.store(&mut stream, &state).await?;
                Outcome::Done
            }
            301 | 302 | 303 | 307 => match state.location {
                Some(location) => Outcome::Redirect(location),
                None => {
                    warn!("location header is missing, stopping");
                    Outcome::Done
                }
            },
            401 => {
                if auth {
                    warn!("authentication failed");
                    Outcome::Done
                } else {
                    warn!("authentication required");
                    if state.basic_auth_offered && self.url.user.is_some() {
                        Outcome::RetryWithAuth
                    } else {
                        Outcome::Done
                    }
                }
            }
            other => {
                warn!(status = other, "skipping status code");
                Outcome::Done
            }
        };

        Ok(outcome)
    }

    /// Streams the response body into a freshly created output file.
    async fn store<R>(&self, reader: &mut R, state: &HeaderState) -> Result<(), FetchError>
    where
        R: AsyncBufRead + Unpin,
    {
        let name = output::candidate_name(&self.url);
        let Some((file, path)) = output::create_output_file(&self.output_dir, &name).await? else {
            return Ok(());
        };

        info!(path = %path.display(), "save to");

        let mut sink = BufWriter::new(file);
        let stored = if state.chunked {
            body::store_chunked(reader, &mut sink).await
        } else {
            body::store_simple(reader, state.content_length, &mut sink).await
        };
        let written = stored.map_err(|source| FetchError::output(path.clone(), source))?;
        sink.flush()
            .await
            .map_err(|source| FetchError::output(path.clone(), source))?;

        info!(path = %path.display(), bytes = written, "saved");
        Ok(())
    }
}
