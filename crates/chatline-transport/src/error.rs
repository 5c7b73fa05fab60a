/// Errors that can occur in the transport layer.
///
/// The setup variants (`BindFailed`, `ConnectFailed`) are fatal to the
/// process that hit them; `AcceptFailed`, `SendFailed`, and
/// `ReceiveFailed` are local to one connection. Orderly stream closure is
/// not an error — `Connection::recv` reports it as `Ok(None)`.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Binding the listening socket failed.
    #[error("bind failed: {0}")]
    BindFailed(#[source] std::io::Error),

    /// Resolving or connecting to the remote address failed.
    #[error("connect failed: {0}")]
    ConnectFailed(#[source] std::io::Error),

    /// Accepting an incoming connection failed.
    #[error("accept failed: {0}")]
    AcceptFailed(#[source] std::io::Error),

    /// Sending data failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),
}
