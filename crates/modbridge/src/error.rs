//! Unified error type for the Modbridge meta-crate.

use modbridge_link::LinkError;
use modbridge_protocol::ProtocolError;
use modbridge_transport::TransportError;

/// Top-level error that wraps all crate-specific errors.
///
/// When embedding the `modbridge` meta-crate, you deal with this single
/// error type instead of importing errors from each sub-crate. The
/// `#[from]` attribute on each variant auto-generates `From` impls, so
/// the `?` operator converts sub-crate errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    /// A transport-level error (connect, send, recv).
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// A protocol-level error (encode, decode).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A link-level error (send while disconnected).
    #[error(transparent)]
    Link(#[from] LinkError),

    /// The bridge event loop is no longer running.
    #[error("bridge is shut down")]
    Closed,
}
