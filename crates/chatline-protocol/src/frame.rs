//! Frame types, encoding, and the first-frame role handshake.

use crate::ProtocolError;

/// The literal a browser sends as its very first frame.
///
/// Role classification is an exact byte match against this constant —
/// anything else must parse as a join frame or the connection is rejected.
pub const ROLE_SENTINEL: &[u8] = b"{Browser}";

// ---------------------------------------------------------------------------
// Frame
// ---------------------------------------------------------------------------

/// One delimited protocol unit.
///
/// The wire form of each variant is the payload wrapped by its delimiter
/// pair (see the crate docs). `Leave` frames are synthesized by the relay
/// when a writer disconnects; clients never send them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// A chat line. By convention the body starts with `nickname> `,
    /// but the relay treats it as opaque text.
    Message { body: String },
    /// A writer announcing itself. Always a writer's first frame.
    Join { nickname: String },
    /// A writer has disconnected.
    Leave { nickname: String },
}

impl Frame {
    /// Encodes this frame into its wire form.
    ///
    /// Payload text containing `{`, `}`, `[`, `]`, or `@` will corrupt
    /// framing on the receiving side; the format has no escaping.
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::Message { body } => format!("{{{body}}}").into_bytes(),
            Self::Join { nickname } => format!("[{nickname}]").into_bytes(),
            Self::Leave { nickname } => format!("{nickname}@").into_bytes(),
        }
    }
}

/// Encodes a chat line as `{nickname> body}`.
pub fn encode_message(nickname: &str, body: &str) -> Vec<u8> {
    format!("{{{nickname}> {body}}}").into_bytes()
}

/// Encodes a join announcement as `[nickname]`.
pub fn encode_join(nickname: &str) -> Vec<u8> {
    format!("[{nickname}]").into_bytes()
}

/// Encodes a leave notice as `nickname@`.
pub fn encode_leave(nickname: &str) -> Vec<u8> {
    format!("{nickname}@").into_bytes()
}

// ---------------------------------------------------------------------------
// Role handshake
// ---------------------------------------------------------------------------

/// The outcome of classifying a connection's first frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handshake {
    /// The first frame was the role sentinel: a receive-only browser.
    Browser,
    /// The first frame was a join announcement: a writer.
    Writer { nickname: String },
}

/// Classifies a connection's first frame.
///
/// This is the decision that gates role assignment, made exactly once per
/// connection. An exact match against [`ROLE_SENTINEL`] yields
/// [`Handshake::Browser`]; otherwise the bytes must be a complete join
/// frame (`[nickname]`).
///
/// # Errors
///
/// Returns [`ProtocolError::UnrecognizedHandshake`] if the bytes are
/// neither the sentinel nor a join frame. The caller drops the connection;
/// the error is never fatal to the relay.
pub fn classify(first_frame: &[u8]) -> Result<Handshake, ProtocolError> {
    if first_frame == ROLE_SENTINEL {
        return Ok(Handshake::Browser);
    }

    let inner = first_frame
        .strip_prefix(b"[")
        .and_then(|rest| rest.strip_suffix(b"]"))
        .ok_or_else(|| {
            ProtocolError::UnrecognizedHandshake(
                String::from_utf8_lossy(first_frame).into_owned(),
            )
        })?;

    let nickname = String::from_utf8(inner.to_vec())?;
    Ok(Handshake::Writer { nickname })
}
