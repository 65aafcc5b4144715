//! The bridge event loop: platform ↔ link pass-through glue.
//!
//! Everything here is direct forwarding. The flow per direction:
//!
//! - outbound: platform message → record in [`EchoGuard`] → encode as an
//!   `Outgoing` frame → send over the link.
//! - inbound: link frame → if it's a `Chat` frame, check the echo guard;
//!   consumed means it was our own echo and is dropped, otherwise the
//!   message is posted to the platform.
//!
//! Link state changes surface as status lines on the platform.

use modbridge_link::{BridgeLink, EchoGuard, LinkEvent};
use modbridge_protocol::Frame;
use modbridge_transport::Connector;
use tokio::sync::mpsc;

use crate::{BridgeConfig, BridgeError, PlatformAdapter};

enum BridgeCommand {
    Relay(String),
    Shutdown,
}

/// Handle for feeding the bridge from the platform side.
///
/// Cheap to clone; all clones feed the same bridge.
#[derive(Clone)]
pub struct BridgeHandle {
    tx: mpsc::Sender<BridgeCommand>,
}

impl BridgeHandle {
    /// Relays a platform-originated message to the game network.
    ///
    /// Platform-side filtering (ignoring the bridge's own bot posts,
    /// wrong-channel messages) is the adapter's job — everything sent
    /// here goes to the relay.
    ///
    /// # Errors
    ///
    /// [`BridgeError::Closed`] if the bridge event loop has exited.
    pub async fn relay(
        &self,
        content: impl Into<String>,
    ) -> Result<(), BridgeError> {
        self.tx
            .send(BridgeCommand::Relay(content.into()))
            .await
            .map_err(|_| BridgeError::Closed)
    }

    /// Requests bridge shutdown. Idempotent; a no-op if the bridge has
    /// already exited.
    pub async fn shutdown(&self) {
        let _ = self.tx.send(BridgeCommand::Shutdown).await;
    }
}

/// The assembled bridge: owns the relay link, the echo guard, and the
/// platform adapter, and runs them on one event loop.
pub struct Bridge<C: Connector, P: PlatformAdapter> {
    config: BridgeConfig,
    link: BridgeLink<C>,
    platform: P,
    echo: EchoGuard,
    commands: mpsc::Receiver<BridgeCommand>,
    /// Whether anything was ever posted to the platform. Gates the
    /// shutdown status line — a bridge that never spoke stays silent.
    posted_anything: bool,
}

impl<C: Connector, P: PlatformAdapter> Bridge<C, P> {
    /// Assembles a bridge and the handle that feeds it.
    pub fn new(
        config: BridgeConfig,
        connector: C,
        platform: P,
    ) -> (Self, BridgeHandle) {
        let (tx, rx) = mpsc::channel(64);
        (
            Self {
                config,
                link: BridgeLink::new(connector),
                platform,
                echo: EchoGuard::new(),
                commands: rx,
                posted_anything: false,
            },
            BridgeHandle { tx },
        )
    }

    /// Runs the bridge until shutdown is requested or every handle is
    /// dropped.
    ///
    /// The link, the retry timer, and platform commands are all driven
    /// from this single loop, so link state and the echo queue need no
    /// locking.
    pub async fn run(mut self) -> Result<(), BridgeError> {
        tracing::info!(relay_url = %self.config.relay_url, "bridge running");

        enum Step {
            Link(Option<LinkEvent>),
            Command(Option<BridgeCommand>),
        }

        loop {
            let step = tokio::select! {
                event = self.link.next_event() => Step::Link(event),
                cmd = self.commands.recv() => Step::Command(cmd),
            };

            match step {
                Step::Link(Some(LinkEvent::Up)) => {
                    let text = self.config.connected_status();
                    self.post_status(&text).await;
                }
                Step::Link(Some(LinkEvent::Down)) => {
                    let text = self.config.disconnected_status();
                    self.post_status(&text).await;
                }
                Step::Link(Some(LinkEvent::Frame(frame))) => {
                    self.handle_frame(frame).await;
                }
                Step::Link(None) => break,
                Step::Command(Some(BridgeCommand::Relay(content))) => {
                    self.relay_outbound(content).await;
                }
                Step::Command(Some(BridgeCommand::Shutdown))
                | Step::Command(None) => {
                    self.link.close().await;
                    if self.posted_anything {
                        let text = self.config.shutdown_status();
                        self.post_status(&text).await;
                    }
                    break;
                }
            }
        }

        tracing::info!("bridge stopped");
        Ok(())
    }

    /// Dispatches one inbound frame from the relay.
    async fn handle_frame(&mut self, frame: Frame) {
        let Some((display_name, content)) = frame.chat_parts() else {
            if frame.is_chat() {
                tracing::warn!(%frame, "chat frame is missing its fields");
            } else {
                tracing::debug!(%frame, "ignoring frame with unhandled tag");
            }
            return;
        };

        if self.echo.try_consume_echo(content) {
            tracing::trace!("suppressed echo of our own message");
            return;
        }

        let display_name = sanitize_display_name(display_name);
        let content = content.to_string();
        if let Err(e) = self.platform.post_chat(&display_name, &content).await
        {
            tracing::warn!(error = %e, "failed to post chat to platform");
            return;
        }
        self.posted_anything = true;
    }

    /// Sends one platform-originated message to the relay.
    async fn relay_outbound(&mut self, content: String) {
        // Recorded before the send, matching one expected echo per
        // message handed to the relay. A failed send leaves the entry
        // queued; head-only matching absorbs the skew once traffic
        // resumes.
        self.echo.record_sent(&content);
        if let Err(e) = self.link.send(&Frame::outgoing(content)).await {
            tracing::warn!(error = %e, "dropping outbound message");
        }
    }

    async fn post_status(&mut self, text: &str) {
        if let Err(e) = self.platform.post_status(text).await {
            tracing::warn!(error = %e, "failed to post status to platform");
            return;
        }
        self.posted_anything = true;
    }
}

/// Strips `:emote:` spans from a relayed display name and trims the
/// result. An unpaired `:` is kept as-is.
fn sanitize_display_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    while let Some(start) = rest.find(':') {
        match rest[start + 1..].find(':') {
            Some(len) => {
                out.push_str(&rest[..start]);
                rest = &rest[start + len + 2..];
            }
            None => break,
        }
    }
    out.push_str(rest);
    out.trim().to_string()
}
