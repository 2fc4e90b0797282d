//! Per-stream log reader

use super::ansi::strip_ansi;
use super::LogLine;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, trace};

/// Decode one raw output line, dropping the line terminator
pub(crate) fn decode_line(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text = text.strip_suffix('\n').unwrap_or(&text);
    let text = text.strip_suffix('\r').unwrap_or(text);
    strip_ansi(text).into_owned()
}

/// Forward every line of `reader` into `tx` until EOF, a read error, a closed
/// channel or cancellation.
///
/// A full channel blocks the reader. Once `cancel` fires, no further line is
/// delivered and a pending send is abandoned.
pub(crate) async fn forward_lines<R>(
    reader: R,
    source: String,
    is_error: bool,
    tx: mpsc::Sender<LogLine>,
    cancel: CancellationToken,
) where
    R: AsyncRead + Unpin,
{
    let mut segments = BufReader::new(reader).split(b'\n');
    let stream = if is_error { "stderr" } else { "stdout" };

    loop {
        let next = tokio::select! {
            _ = cancel.cancelled() => break,
            next = segments.next_segment() => next,
        };

        let bytes = match next {
            Ok(Some(bytes)) => bytes,
            Ok(None) => break,
            Err(e) => {
                debug!(source = %source, stream, error = %e, "Output stream read failed");
                break;
            }
        };

        if cancel.is_cancelled() {
            break;
        }

        let line = LogLine::new(source.clone(), decode_line(&bytes), is_error);
        tokio::select! {
            _ = cancel.cancelled() => break,
            sent = tx.send(line) => {
                if sent.is_err() {
                    break;
                }
            }
        }
    }

    trace!(source = %source, stream, "Log reader finished");
}
