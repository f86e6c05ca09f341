//! Response body framing: fixed-length and chunked decoding.

use std::io;

use tokio::io::{AsyncBufRead, AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::warn;

use super::response::read_trimmed_line;

/// Copy buffer size for body transfers.
const COPY_BUF_SIZE: usize = 8 * 1024;

/// Copies a fixed-length body from `reader` to `sink`.
///
/// A `total` of 0 means the length is unknown: copy until end of stream.
/// Otherwise exactly `total` bytes are copied; a zero-byte read before that
/// is a premature close and ends the copy without error. Returns the number
/// of bytes written.
///
/// # Errors
///
/// Returns the underlying IO error when a read or a sink write fails.
pub async fn store_simple<R, W>(reader: &mut R, total: u64, sink: &mut W) -> io::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = [0u8; COPY_BUF_SIZE];
    let mut written: u64 = 0;

    loop {
        let want = if total == 0 {
            buf.len()
        } else {
            let remaining = total - written;
            usize::try_from(remaining.min(buf.len() as u64)).unwrap_or(buf.len())
        };

        let n = reader.read(&mut buf[..want]).await?;
        if n == 0 {
            break;
        }

        sink.write_all(&buf[..n]).await?;
        written += n as u64;

        if total > 0 && written >= total {
            break;
        }
    }

    Ok(written)
}

/// Decodes a chunked body from `reader` into `sink`.
///
/// Chunk-size lines are parsed strictly: anything after the hex digits
/// (chunk extensions included) makes the line invalid, which stops the body
/// with a warning rather than failing the whole fetch. A size of 0 ends the
/// body; trailing headers are not processed. Returns the number of body
/// bytes written.
///
/// # Errors
///
/// Returns the underlying IO error when a read or a sink write fails.
pub async fn store_chunked<R, W>(reader: &mut R, sink: &mut W) -> io::Result<u64>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut written: u64 = 0;

    while let Some(line) = read_trimmed_line(reader).await? {
        // Chunk data is followed by its own CRLF, which shows up here as an
        // empty line.
        if line.is_empty() {
            continue;
        }

        let Some(size) = parse_chunk_size(&line) else {
            warn!(line, "invalid chunk size, stopping body");
            break;
        };
        if size == 0 {
            break;
        }

        written += store_simple(reader, size, sink).await?;
    }

    Ok(written)
}

/// Parses a chunk-size line as plain hex. Trailing text is invalid.
fn parse_chunk_size(line: &str) -> Option<u64> {
    u64::from_str_radix(line, 16).ok()
}
