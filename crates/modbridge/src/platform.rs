//! The boundary to the external chat platform.
//!
//! Modbridge doesn't implement a platform client — authentication,
//! channel lookup, and message delivery are the embedder's job. The
//! bridge only needs two operations, defined by [`PlatformAdapter`]:
//! post a relayed chat message, and post a human-readable status line.
//!
//! Adapter failures never stop the bridge: a failed post is logged and
//! the message dropped.

use std::fmt;

/// An error reported by a platform adapter.
///
/// Opaque to the bridge — it carries a message for logging and nothing
/// the bridge would act on.
#[derive(Debug, thiserror::Error)]
#[error("platform error: {0}")]
pub struct PlatformError(String);

impl PlatformError {
    /// Creates an error from any displayable cause.
    pub fn new(cause: impl fmt::Display) -> Self {
        Self(cause.to_string())
    }
}

/// Receives bridge output on behalf of the external chat platform.
///
/// Implementations post into whatever channel the platform side is
/// configured for. Both methods are called from the bridge's single
/// event loop, strictly in order, never overlapping.
pub trait PlatformAdapter: Send + 'static {
    /// Posts a chat message relayed from the game network.
    ///
    /// `display_name` has already been sanitized for display.
    fn post_chat(
        &mut self,
        display_name: &str,
        content: &str,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;

    /// Posts a human-readable status line ("Connected to ...", etc.).
    fn post_status(
        &mut self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<(), PlatformError>> + Send;
}
