//! Per-connection session: role classification and the relay loop.
//!
//! Each accepted connection gets its own Tokio task running one
//! [`Session`]. The flow is a small state machine:
//!
//! ```text
//! Unclassified ──(first frame = sentinel)──→ BrowserActive
//!      │
//!      └───────(first frame = [nickname])──→ WriterActive ──→ Closed
//! ```
//!
//! - A **browser** is handed to the hub (snapshot, then subscribe) and
//!   its task ends — the registry owns the channel from then on, and the
//!   session performs no further reads.
//! - A **writer** loops: reassemble the next frame, publish it. When its
//!   stream closes, the session synthesizes the `nickname@` leave frame,
//!   publishes it, and closes.
//!
//! Role is assigned exactly once, from the very first frame, and never
//! changes. A first frame that classifies as neither role is a protocol
//! error: the connection is dropped, the relay is unaffected.

use chatline_hub::Hub;
use chatline_protocol::{classify, encode_leave, FrameAssembler, Handshake};
use chatline_transport::Connection;

use crate::ChatlineError;

/// The role assigned to a connection by its first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Role {
    Unclassified,
    Writer,
    Browser,
}

/// What one reassembly step produced.
enum ReadOutcome {
    /// One complete frame, raw bytes including its delimiters.
    Frame(Vec<u8>),
    /// The stream closed (orderly or abrupt); no more frames will come.
    Closed,
}

/// State for one accepted connection.
pub(crate) struct Session<C: Connection> {
    conn: C,
    role: Role,
    nickname: Option<String>,
    assembler: FrameAssembler,
}

impl<C: Connection> Session<C> {
    pub(crate) fn new(conn: C) -> Self {
        Self {
            conn,
            role: Role::Unclassified,
            nickname: None,
            assembler: FrameAssembler::new(),
        }
    }

    /// Reads until the assembler yields one complete frame.
    ///
    /// A single `recv` may carry a fragment or several packed frames;
    /// the assembler retains whatever belongs to the next frame. A recv
    /// error is treated the same as orderly closure — either way this
    /// connection is done.
    async fn read_frame(&mut self) -> ReadOutcome {
        loop {
            if let Some(frame) = self.assembler.next_frame() {
                return ReadOutcome::Frame(frame);
            }
            match self.conn.recv().await {
                Ok(Some(bytes)) => self.assembler.push(&bytes),
                Ok(None) => {
                    if !self.assembler.is_empty() {
                        tracing::debug!(
                            id = %self.conn.id(),
                            "discarding partial frame at stream close"
                        );
                    }
                    return ReadOutcome::Closed;
                }
                Err(e) => {
                    tracing::debug!(
                        id = %self.conn.id(),
                        error = %e,
                        "recv failed, treating as closed"
                    );
                    return ReadOutcome::Closed;
                }
            }
        }
    }

    /// Runs the session to completion.
    ///
    /// Every failure here is local to this connection; the caller logs
    /// the error and moves on.
    pub(crate) async fn run(
        mut self,
        hub: &Hub<C>,
    ) -> Result<(), ChatlineError> {
        let first = match self.read_frame().await {
            ReadOutcome::Frame(frame) => frame,
            ReadOutcome::Closed => {
                tracing::debug!(
                    id = %self.conn.id(),
                    "connection closed before handshake"
                );
                return Ok(());
            }
        };

        match classify(&first)? {
            Handshake::Browser => {
                self.role = Role::Browser;
                tracing::info!(
                    id = %self.conn.id(),
                    role = ?self.role,
                    "connection classified"
                );
                // Snapshot-then-subscribe happens inside the hub, under
                // its registry lock. The registry owns the channel now;
                // this task is done.
                hub.register_browser(self.conn).await;
                Ok(())
            }
            Handshake::Writer { nickname } => {
                self.role = Role::Writer;
                self.nickname = Some(nickname);
                tracing::info!(
                    id = %self.conn.id(),
                    role = ?self.role,
                    nickname = self.nickname.as_deref().unwrap_or(""),
                    "connection classified"
                );

                // Publish the join frame first so browsers already in the
                // room see the arrival, then relay frames until the
                // stream ends.
                hub.publish(&first).await;
                loop {
                    match self.read_frame().await {
                        ReadOutcome::Frame(frame) => {
                            hub.publish(&frame).await;
                        }
                        ReadOutcome::Closed => break,
                    }
                }

                if let Some(nickname) = &self.nickname {
                    hub.publish(&encode_leave(nickname)).await;
                    tracing::info!(
                        id = %self.conn.id(),
                        %nickname,
                        "writer left"
                    );
                }
                Ok(())
            }
        }
    }
}
