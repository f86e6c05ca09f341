//! Raw TCP fixtures for wire-level cases the HTTP mock cannot express
//! (chunked framing, malformed status lines, scripted multi-attempt
//! sequences).

use std::net::SocketAddr;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// A scripted HTTP server over a raw socket.
///
/// Serves one canned response per accepted connection, in order, and
/// records the request bytes each connection delivered.
pub struct RawServer {
    addr: SocketAddr,
    handle: JoinHandle<Vec<Vec<u8>>>,
}

impl RawServer {
    /// Binds a listener and serves `responses.len()` connections.
    pub async fn spawn(responses: Vec<Vec<u8>>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind listener");
        let addr = listener.local_addr().expect("local addr");

        let handle = tokio::spawn(async move {
            let mut requests = Vec::new();
            for response in responses {
                let (mut socket, _) = listener.accept().await.expect("accept");

                let mut request = Vec::new();
                let mut buf = [0u8; 1024];
                while !contains(&request, b"\r\n\r\n") {
                    let n = socket.read(&mut buf).await.expect("read request");
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                }

                socket.write_all(&response).await.expect("write response");
                socket.shutdown().await.expect("shutdown");
                requests.push(request);
            }
            requests
        });

        Self { addr, handle }
    }

    /// `host:port` of the listener.
    pub fn authority(&self) -> String {
        self.addr.to_string()
    }

    /// Full URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{path}", self.addr)
    }

    /// Waits for all scripted connections and returns the recorded
    /// requests.
    pub async fn finish(self) -> Vec<Vec<u8>> {
        self.handle.await.expect("server task")
    }
}

/// Byte-level substring search, for asserting on recorded requests.
pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    haystack.windows(needle.len()).any(|window| window == needle)
}
