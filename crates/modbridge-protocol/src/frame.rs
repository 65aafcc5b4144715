//! The [`Frame`] value type — one message unit on the relay socket.

use std::fmt;

/// Tag for a frame carrying a chat message from the relay to the bridge.
///
/// Fields by convention: `[display_name, content]`.
pub const TAG_CHAT: u8 = 0;

/// Tag for a frame carrying a message from the bridge to the relay.
///
/// Fields by convention: `[content]`.
pub const TAG_OUTGOING: u8 = 1;

/// One typed, multi-field binary message exchanged over the relay socket.
///
/// A frame is an immutable value object: created whole by [`Frame::decode`]
/// or by a constructor, compared by value, never shared. The `tag` is a
/// small unsigned integer; tags other than [`TAG_CHAT`] and [`TAG_OUTGOING`]
/// are carried through both codec directions untouched — interpreting them
/// is the caller's responsibility.
///
/// Fields are UTF-8 text but travel as raw bytes: every length on the wire
/// is a byte length, not a character count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Message type tag (first byte on the wire).
    pub tag: u8,
    /// Ordered field payloads.
    pub fields: Vec<String>,
}

impl Frame {
    /// Creates a frame with an arbitrary tag and fields.
    pub fn new(tag: u8, fields: Vec<String>) -> Self {
        Self { tag, fields }
    }

    /// Creates a relay-bound chat frame carrying platform-originated text.
    pub fn outgoing(content: impl Into<String>) -> Self {
        Self {
            tag: TAG_OUTGOING,
            fields: vec![content.into()],
        }
    }

    /// Creates a chat frame as the relay would send it.
    pub fn chat(display_name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            tag: TAG_CHAT,
            fields: vec![display_name.into(), content.into()],
        }
    }

    /// Whether this frame carries a relayed chat message.
    pub fn is_chat(&self) -> bool {
        self.tag == TAG_CHAT
    }

    /// Splits a chat frame into `(display_name, content)`.
    ///
    /// Returns `None` if the tag is not [`TAG_CHAT`] or the frame doesn't
    /// carry the two expected fields.
    pub fn chat_parts(&self) -> Option<(&str, &str)> {
        if self.tag != TAG_CHAT {
            return None;
        }
        match self.fields.as_slice() {
            [display_name, content, ..] => Some((display_name, content)),
            _ => None,
        }
    }
}

impl fmt::Display for Frame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame(tag={}, fields={})", self.tag, self.fields.len())
    }
}
