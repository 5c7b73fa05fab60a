//! Unified error type for the Chatline relay.

use chatline_client::ClientError;
use chatline_protocol::ProtocolError;
use chatline_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attributes auto-generate `From` impls so `?` converts
/// sub-crate errors automatically. Note what is *not* here: per-connection
/// failures (a dead subscriber, a malformed handshake) are handled and
/// logged inside the session that hit them and never crash the relay.
#[derive(Debug, thiserror::Error)]
pub enum ChatlineError {
    /// A transport-level error (bind, connect, accept, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (unrecognized handshake, bad payload).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A client-level error (browser/writer driver failure).
    #[error(transparent)]
    Client(#[from] ClientError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_transport_error() {
        let err = TransportError::BindFailed(std::io::Error::new(
            std::io::ErrorKind::AddrInUse,
            "taken",
        ));
        let top: ChatlineError = err.into();
        assert!(matches!(top, ChatlineError::Transport(_)));
        assert!(top.to_string().contains("taken"));
    }

    #[test]
    fn test_from_protocol_error() {
        let err = ProtocolError::UnrecognizedHandshake("oops".into());
        let top: ChatlineError = err.into();
        assert!(matches!(top, ChatlineError::Protocol(_)));
    }

    #[test]
    fn test_from_client_error() {
        let err = ClientError::Output(std::io::Error::new(
            std::io::ErrorKind::BrokenPipe,
            "gone",
        ));
        let top: ChatlineError = err.into();
        assert!(matches!(top, ChatlineError::Client(_)));
    }
}
