//! Error types for the protocol layer.

/// Errors that can occur while classifying or parsing frames.
///
/// These are always local to one connection: the relay logs them and drops
/// the offending connection, never the process.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The first frame was neither the role sentinel nor a join frame.
    ///
    /// Carries a lossy-decoded preview of the offending bytes for logs.
    #[error("unrecognized first frame: {0:?}")]
    UnrecognizedHandshake(String),

    /// A frame payload that must be text (a nickname) was not valid UTF-8.
    #[error("frame payload is not valid UTF-8: {0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
}
