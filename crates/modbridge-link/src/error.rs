//! Error types for the link layer.

use modbridge_protocol::ProtocolError;
use modbridge_transport::TransportError;

/// Errors surfaced by [`BridgeLink`] operations.
///
/// [`BridgeLink`]: crate::BridgeLink
#[derive(Debug, thiserror::Error)]
pub enum LinkError {
    /// A send was attempted while the link is not established.
    ///
    /// The link does not buffer for later retry — the caller decides
    /// whether to drop, queue, or surface the failure.
    #[error("not connected to the relay")]
    NotConnected,

    /// A socket-level failure.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Encoding the outgoing frame failed.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),
}
