//! The writer client: submits chat lines to the relay.

use chatline_protocol::{encode_join, encode_message};
use chatline_transport::{Connection, TcpConnection};

use crate::ClientError;

/// A writer-role client.
///
/// Its first frame is the join announcement `[nickname]`; every chat line
/// after that goes out as `{nickname> line}`. The relay synthesizes the
/// leave frame when this client disconnects — it is never sent from here.
pub struct WriterClient {
    conn: TcpConnection,
    nickname: String,
}

impl WriterClient {
    /// Connects to the relay and announces `nickname`.
    pub async fn connect(
        host: &str,
        service: &str,
        nickname: &str,
    ) -> Result<Self, ClientError> {
        let conn = TcpConnection::connect(host, service).await?;
        conn.send(&encode_join(nickname)).await?;
        tracing::debug!(id = %conn.id(), nickname, "writer joined");
        Ok(Self {
            conn,
            nickname: nickname.to_string(),
        })
    }

    /// Sends one chat line, framed as `{nickname> body}`.
    pub async fn send_line(&self, body: &str) -> Result<(), ClientError> {
        self.conn
            .send(&encode_message(&self.nickname, body))
            .await?;
        Ok(())
    }

    /// Returns the nickname announced at connect time.
    pub fn nickname(&self) -> &str {
        &self.nickname
    }

    /// Closes the connection, which makes the relay broadcast the leave.
    pub async fn close(&self) -> Result<(), ClientError> {
        self.conn.close().await?;
        Ok(())
    }
}
