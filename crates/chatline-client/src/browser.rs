//! The browser client: receive-only consumer of the relay's stream.

use std::io::Write;

use chatline_protocol::{FrameDecoder, ROLE_SENTINEL};
use chatline_transport::{Connection, TcpConnection};

use crate::{render, ClientError};

/// A browser-role client.
///
/// Sends the role sentinel as its first (and only) frame, then renders
/// everything the relay pushes: the history snapshot on connect, live
/// broadcasts afterwards. It never reads local input.
pub struct BrowserClient {
    conn: TcpConnection,
    decoder: FrameDecoder,
}

impl BrowserClient {
    /// Connects to the relay and performs the browser handshake.
    pub async fn connect(
        host: &str,
        service: &str,
    ) -> Result<Self, ClientError> {
        let conn = TcpConnection::connect(host, service).await?;
        conn.send(ROLE_SENTINEL).await?;
        tracing::debug!(id = %conn.id(), "browser handshake sent");
        Ok(Self {
            conn,
            decoder: FrameDecoder::new(),
        })
    }

    /// Consumes the frame stream until the relay closes it, writing each
    /// rendered event to `out`.
    ///
    /// Chunk boundaries are arbitrary — a read may carry a fragment or
    /// several packed frames — so decoding goes through the incremental
    /// [`FrameDecoder`].
    pub async fn run(
        &mut self,
        out: &mut impl Write,
    ) -> Result<(), ClientError> {
        loop {
            let Some(bytes) = self.conn.recv().await? else {
                tracing::debug!(id = %self.conn.id(), "relay closed stream");
                return Ok(());
            };
            for event in self.decoder.feed(&bytes) {
                out.write_all(render(&event).as_bytes())?;
            }
            out.flush()?;
        }
    }
}
