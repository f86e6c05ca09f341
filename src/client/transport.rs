//! TCP transport for one fetch attempt.
//!
//! Name resolution and connection setup are the runtime's business; this
//! module only bounds the attempt and maps failures into [`FetchError`].

use std::time::Duration;

use tokio::net::TcpStream;
use tracing::debug;

use super::error::FetchError;

/// How long a connect attempt may take before it is abandoned.
pub(crate) const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);

/// Opens a TCP connection to `host:port`.
///
/// # Errors
///
/// Returns [`FetchError::Connect`] when the connection cannot be
/// established and [`FetchError::ConnectTimeout`] when it takes longer than
/// [`CONNECT_TIMEOUT`]. Both are fatal to the run.
pub async fn connect(host: &str, port: u16) -> Result<TcpStream, FetchError> {
    debug!(host, port, "connecting");

    match tokio::time::timeout(CONNECT_TIMEOUT, TcpStream::connect((host, port))).await {
        Ok(Ok(stream)) => Ok(stream),
        Ok(Err(source)) => Err(FetchError::connect(host, port, source)),
        Err(_elapsed) => Err(FetchError::connect_timeout(host, port)),
    }
}
