//! The [`BridgeLink`] connection + retry state machine.

use std::fmt;

use modbridge_protocol::Frame;
use modbridge_transport::{Connection, Connector};
use tokio::time::Instant;

use crate::{Backoff, LinkError};

/// The connection state of the link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkState {
    /// No socket; a retry may be scheduled.
    Disconnected,
    /// A connection attempt is in flight.
    Connecting,
    /// An established socket is being read.
    Connected,
}

impl fmt::Display for LinkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Disconnected => write!(f, "Disconnected"),
            Self::Connecting => write!(f, "Connecting"),
            Self::Connected => write!(f, "Connected"),
        }
    }
}

/// Notifications the link emits to its owner.
///
/// Delivery is strictly in-order and non-overlapping: the owner pulls
/// events one at a time from [`BridgeLink::next_event`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkEvent {
    /// The link came up. Edge-triggered: fires once per achieved
    /// connection, never on a connection that was already announced.
    Up,
    /// The link went down. Edge-triggered: fires only when a previously
    /// announced connection is lost, so repeated failed retries after the
    /// first loss stay silent.
    Down,
    /// A full frame arrived from the relay.
    Frame(Frame),
}

/// Owns the socket to the relay and drives
/// connect → receive → disconnect → scheduled-retry.
///
/// Exactly one socket exists per link; a reconnect fully discards the
/// previous connection before dialing a new one. All mutation happens
/// through `&mut self` on the owner's task, so the state machine needs
/// no locking.
pub struct BridgeLink<C: Connector> {
    connector: C,
    state: LinkState,
    conn: Option<C::Connection>,
    backoff: Backoff,
    /// Whether a "connected" notification is currently outstanding, i.e.
    /// the previous stable state the owner saw was Connected. Gates the
    /// edge-triggered [`LinkEvent::Up`] / [`LinkEvent::Down`] pair.
    announced: bool,
    /// Deadline of the scheduled retry, if one is pending.
    retry_at: Option<Instant>,
    closed: bool,
}

impl<C: Connector> BridgeLink<C> {
    /// Creates a link that will dial through `connector`. Nothing happens
    /// until [`next_event`](Self::next_event) is first polled.
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            state: LinkState::Disconnected,
            conn: None,
            backoff: Backoff::new(),
            announced: false,
            retry_at: None,
            closed: false,
        }
    }

    /// Current connection state.
    pub fn state(&self) -> LinkState {
        self.state
    }

    /// Whether a retry is currently scheduled.
    pub fn retry_scheduled(&self) -> bool {
        self.retry_at.is_some()
    }

    /// Drives the link and returns the next notification.
    ///
    /// Connect attempts, the retry timer, and the receive loop all run
    /// inside this future; it resolves only when something the owner
    /// cares about happened. Returns `None` after [`close`](Self::close).
    ///
    /// Cancellation-safe: the retry deadline is stored as an instant, so
    /// a cancelled poll neither loses nor stretches the scheduled delay.
    pub async fn next_event(&mut self) -> Option<LinkEvent> {
        loop {
            if self.closed {
                return None;
            }
            if self.state == LinkState::Connected {
                if let Some(event) = self.pump_connection().await {
                    return Some(event);
                }
            } else if let Some(event) = self.try_connect().await {
                return Some(event);
            }
        }
    }

    /// Encodes `frame` and writes it to the socket.
    ///
    /// # Errors
    ///
    /// [`LinkError::NotConnected`] if the link is not established. The
    /// link never buffers: a failed send is the caller's to handle.
    pub async fn send(&mut self, frame: &Frame) -> Result<(), LinkError> {
        let Some(conn) = &self.conn else {
            return Err(LinkError::NotConnected);
        };
        let bytes = frame.encode()?;
        conn.send(&bytes).await?;
        Ok(())
    }

    /// Shuts the link down: closes the socket if one is open and cancels
    /// any scheduled retry. Subsequent [`next_event`](Self::next_event)
    /// calls return `None`.
    pub async fn close(&mut self) {
        self.closed = true;
        self.retry_at = None;
        self.state = LinkState::Disconnected;
        if let Some(conn) = self.conn.take() {
            if let Err(e) = conn.close().await {
                tracing::debug!(error = %e, "error closing relay connection");
            }
        }
        tracing::info!("link closed");
    }

    /// Waits out a scheduled retry (if any), then attempts one connect.
    /// Returns the event to surface, or `None` to keep driving.
    async fn try_connect(&mut self) -> Option<LinkEvent> {
        if let Some(deadline) = self.retry_at {
            tokio::time::sleep_until(deadline).await;
            self.retry_at = None;
        }

        self.state = LinkState::Connecting;
        match self.connector.connect().await {
            Ok(conn) => {
                tracing::info!(id = %conn.id(), "connected to relay");
                self.conn = Some(conn);
                self.state = LinkState::Connected;
                // Cursor reset is unconditional on every successful open;
                // the notification is edge-triggered on `announced`.
                self.backoff.reset();
                if !self.announced {
                    self.announced = true;
                    return Some(LinkEvent::Up);
                }
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "connect attempt failed");
                self.schedule_retry()
            }
        }
    }

    /// Reads from the established connection. Returns the event to
    /// surface, or `None` to keep driving.
    async fn pump_connection(&mut self) -> Option<LinkEvent> {
        let Some(conn) = &self.conn else {
            self.state = LinkState::Disconnected;
            return None;
        };

        match conn.recv().await {
            Ok(Some(bytes)) => match Frame::decode(&bytes) {
                Ok(frame) => Some(LinkEvent::Frame(frame)),
                Err(e) => {
                    // Malformed inbound bytes don't drop the link — the
                    // stream delivers subsequent messages independently.
                    tracing::warn!(
                        error = %e,
                        len = bytes.len(),
                        "discarding malformed inbound frame"
                    );
                    None
                }
            },
            Ok(None) => {
                tracing::info!("relay closed the connection");
                self.schedule_retry()
            }
            Err(e) => {
                tracing::warn!(error = %e, "receive failed");
                self.schedule_retry()
            }
        }
    }

    /// Transitions to Disconnected and schedules the next attempt.
    ///
    /// Order matters: the delay is read at the current cursor, then the
    /// cursor advances (saturating), then the edge-triggered Down fires.
    fn schedule_retry(&mut self) -> Option<LinkEvent> {
        self.conn = None;
        self.state = LinkState::Disconnected;

        let delay = self.backoff.next_delay();
        self.retry_at = Some(Instant::now() + delay);
        tracing::info!(
            retry_in_secs = delay.as_secs(),
            "link down, retry scheduled"
        );

        if self.announced {
            self.announced = false;
            Some(LinkEvent::Down)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use modbridge_transport::{ConnectionId, TransportError};

    /// Connector whose attempts always fail. Enough for exercising the
    /// state accessors; full scripted scenarios live in `tests/`.
    struct RefusingConnector;

    struct NeverConnection;

    impl Connection for NeverConnection {
        async fn send(&self, _data: &[u8]) -> Result<(), TransportError> {
            unimplemented!()
        }
        async fn recv(&self) -> Result<Option<Vec<u8>>, TransportError> {
            unimplemented!()
        }
        async fn close(&self) -> Result<(), TransportError> {
            Ok(())
        }
        fn id(&self) -> ConnectionId {
            ConnectionId::new(0)
        }
    }

    impl Connector for RefusingConnector {
        type Connection = NeverConnection;

        async fn connect(&self) -> Result<NeverConnection, TransportError> {
            Err(TransportError::ConnectFailed(std::io::Error::new(
                std::io::ErrorKind::ConnectionRefused,
                "test",
            )))
        }
    }

    #[test]
    fn test_initial_state() {
        let link = BridgeLink::new(RefusingConnector);
        assert_eq!(link.state(), LinkState::Disconnected);
        assert!(!link.retry_scheduled());
    }

    #[tokio::test]
    async fn test_send_before_connect_is_not_connected() {
        let mut link = BridgeLink::new(RefusingConnector);
        let result = link.send(&Frame::outgoing("hello")).await;
        assert!(matches!(result, Err(LinkError::NotConnected)));
    }

    #[tokio::test]
    async fn test_next_event_after_close_returns_none() {
        let mut link = BridgeLink::new(RefusingConnector);
        link.close().await;
        assert_eq!(link.next_event().await, None);
    }

    #[test]
    fn test_link_state_display() {
        assert_eq!(LinkState::Disconnected.to_string(), "Disconnected");
        assert_eq!(LinkState::Connecting.to_string(), "Connecting");
        assert_eq!(LinkState::Connected.to_string(), "Connected");
    }
}
