//! Transport abstraction layer for Modbridge.
//!
//! Provides the [`Connector`] and [`Connection`] traits that abstract over
//! the byte-stream link to the relay. The link state machine only sees
//! these traits, so it can be exercised against in-process servers and
//! mock transports in tests.
//!
//! # Feature Flags
//!
//! - `websocket` (default) — WebSocket client via `tokio-tungstenite`

#![allow(async_fn_in_trait)]

mod error;
#[cfg(feature = "websocket")]
mod websocket;

pub use error::TransportError;
#[cfg(feature = "websocket")]
pub use websocket::{WebSocketConnection, WebSocketConnector};

use std::fmt;

/// Opaque identifier for a connection.
///
/// A reconnecting link opens many connections over its lifetime; the id
/// correlates log lines with the connection they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Creates a new `ConnectionId` from a raw `u64`.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the underlying `u64` value.
    pub fn into_inner(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

/// Dials the remote peer and produces connections.
///
/// One connector outlives many connections: every retry asks the connector
/// for a fresh [`Connection`], and the previous one is fully dropped first.
pub trait Connector: Send + Sync + 'static {
    /// The connection type produced by this connector.
    type Connection: Connection;

    /// Opens a new connection to the peer.
    async fn connect(&self) -> Result<Self::Connection, TransportError>;
}

/// A single established connection that can send and receive byte messages.
pub trait Connection: Send + Sync + 'static {
    /// Sends one message to the remote peer.
    async fn send(&self, data: &[u8]) -> Result<(), TransportError>;

    /// Receives the next message from the remote peer.
    ///
    /// Returns `Ok(None)` when the connection is cleanly closed.
    async fn recv(&self) -> Result<Option<Vec<u8>>, TransportError>;

    /// Closes the connection.
    async fn close(&self) -> Result<(), TransportError>;

    /// Returns the unique identifier for this connection.
    fn id(&self) -> ConnectionId;
}
