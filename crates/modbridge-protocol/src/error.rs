//! Error types for the protocol layer.
//!
//! Encoding failures are caller errors — the frame itself exceeds what the
//! wire format can describe, so retrying never helps. Decoding failures mean
//! the peer (or the stream) handed us bytes that don't satisfy the layout.

/// Errors that can occur while encoding or decoding a [`Frame`].
///
/// [`Frame`]: crate::Frame
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// The frame has more fields than the u16 count prefix can describe.
    #[error("too many fields")]
    TooManyFields,

    /// A field's byte length exceeds the u16 length prefix.
    #[error("field too large")]
    FieldTooLarge,

    /// The buffer ended before a declared length was satisfied.
    ///
    /// Carries the byte offset at which the read ran out. The stream is
    /// truncated or corrupt; the partial data cannot be recovered.
    #[error("malformed frame: truncated at byte {0}")]
    Truncated(usize),
}
