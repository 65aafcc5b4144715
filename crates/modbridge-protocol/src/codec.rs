//! Binary codec for [`Frame`].
//!
//! Layout, all integers big-endian:
//!
//! ```text
//! [tag: u8] [field count: u16] ( [byte length: u16] [bytes...] )*
//! ```
//!
//! Every length prefix self-describes the next read, so a frame can be
//! parsed sequentially from a byte slice with no delimiter scanning and
//! no escaping scheme. Fixed-width big-endian prefixes keep both
//! directions trivial and stable across implementations.

use crate::{Frame, ProtocolError};

/// Maximum number of fields a frame can carry (u16 count prefix).
pub const MAX_FIELDS: usize = u16::MAX as usize;

/// Maximum encoded byte length of a single field (u16 length prefix).
pub const MAX_FIELD_BYTES: usize = u16::MAX as usize;

impl Frame {
    /// Encodes the frame into its wire representation.
    ///
    /// The tag is written as given, even if unrecognized — the codec does
    /// no semantic validation beyond the length limits.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::TooManyFields`] if the frame has more than
    ///   [`MAX_FIELDS`] fields.
    /// - [`ProtocolError::FieldTooLarge`] if any field's UTF-8 byte length
    ///   exceeds [`MAX_FIELD_BYTES`].
    pub fn encode(&self) -> Result<Vec<u8>, ProtocolError> {
        if self.fields.len() > MAX_FIELDS {
            return Err(ProtocolError::TooManyFields);
        }
        // Size the buffer up front: tag + count, then prefix + bytes per field.
        let mut total = 1 + 2;
        for field in &self.fields {
            if field.len() > MAX_FIELD_BYTES {
                return Err(ProtocolError::FieldTooLarge);
            }
            total += 2 + field.len();
        }

        let mut buf = Vec::with_capacity(total);
        buf.push(self.tag);
        buf.extend_from_slice(&(self.fields.len() as u16).to_be_bytes());
        for field in &self.fields {
            buf.extend_from_slice(&(field.len() as u16).to_be_bytes());
            buf.extend_from_slice(field.as_bytes());
        }
        Ok(buf)
    }

    /// Decodes a frame from its wire representation.
    ///
    /// Reads exactly the bytes the length prefixes declare; trailing bytes
    /// beyond the declared fields are ignored. Field payloads that are not
    /// valid UTF-8 are converted lossily (invalid sequences become U+FFFD),
    /// matching how the relay treats them.
    ///
    /// # Errors
    ///
    /// [`ProtocolError::Truncated`] if the buffer ends before a declared
    /// length is satisfied.
    pub fn decode(data: &[u8]) -> Result<Frame, ProtocolError> {
        let mut reader = Reader::new(data);
        let tag = reader.read_u8()?;
        let count = reader.read_u16()?;
        let mut fields = Vec::with_capacity(count as usize);
        for _ in 0..count {
            let len = reader.read_u16()? as usize;
            let bytes = reader.take(len)?;
            fields.push(String::from_utf8_lossy(bytes).into_owned());
        }
        Ok(Frame { tag, fields })
    }
}

/// Sequential reader over a byte slice, tracking the current offset for
/// truncation diagnostics.
struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    fn read_u8(&mut self) -> Result<u8, ProtocolError> {
        Ok(self.take(1)?[0])
    }

    fn read_u16(&mut self) -> Result<u16, ProtocolError> {
        let bytes = self.take(2)?;
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], ProtocolError> {
        let end = self
            .pos
            .checked_add(n)
            .filter(|&end| end <= self.data.len())
            .ok_or(ProtocolError::Truncated(self.pos))?;
        let slice = &self.data[self.pos..end];
        self.pos = end;
        Ok(slice)
    }
}
