/// Errors that can occur in the transport layer.
///
/// All of these are socket-level failures. None of them is fatal to the
/// process — the link layer reacts by scheduling a reconnect.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Dialing or upgrading the connection failed.
    #[error("connect failed: {0}")]
    ConnectFailed(#[source] std::io::Error),

    /// Sending data failed.
    #[error("send failed: {0}")]
    SendFailed(#[source] std::io::Error),

    /// Receiving data failed.
    #[error("receive failed: {0}")]
    ReceiveFailed(#[source] std::io::Error),
}
