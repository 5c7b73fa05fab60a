//! Error types for the client layer.

use chatline_transport::TransportError;

/// Errors that can occur while running a client.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Connecting, sending, or receiving on the channel failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Writing rendered output to the local sink failed.
    #[error("output write failed: {0}")]
    Output(#[from] std::io::Error),
}
