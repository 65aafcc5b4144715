//! Wire protocol for the Modbridge relay socket.
//!
//! This crate defines the "language" spoken over the persistent socket to
//! the game-mod relay:
//!
//! - **[`Frame`]** — one typed, multi-field binary message unit.
//! - **Codec** ([`Frame::encode`], [`Frame::decode`]) — the fixed-width,
//!   big-endian byte layout frames travel in.
//! - **Errors** ([`ProtocolError`]) — what can go wrong while encoding
//!   or decoding.
//!
//! # Architecture
//!
//! The protocol layer sits between transport (raw bytes) and the link
//! state machine. It doesn't know about connections or retries — it only
//! knows how to turn frames into bytes and back.
//!
//! ```text
//! Transport (bytes) → Protocol (Frame) → Link (events)
//! ```

mod codec;
mod error;
mod frame;

pub use codec::{MAX_FIELD_BYTES, MAX_FIELDS};
pub use error::ProtocolError;
pub use frame::{Frame, TAG_CHAT, TAG_OUTGOING};
