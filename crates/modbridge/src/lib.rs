//! # Modbridge
//!
//! Bridges chat between a locally-hosted game-mod relay and an external
//! chat platform. Messages typed on either side are relayed to the other;
//! the bridge suppresses its own echoes and keeps the relay link alive
//! across drops with scheduled, backed-off reconnects.
//!
//! This meta-crate ties the layers together: transport → protocol → link
//! → platform. Implement [`PlatformAdapter`] for your chat platform, hand
//! it to [`Bridge`], and drive messages in through the [`BridgeHandle`].
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use modbridge::{Bridge, BridgeConfig, WebSocketConnector};
//!
//! # async fn run(platform: impl modbridge::PlatformAdapter) {
//! let config = BridgeConfig::default();
//! let connector = WebSocketConnector::new(&config.relay_url);
//! let (bridge, handle) = Bridge::new(config, connector, platform);
//!
//! tokio::spawn(bridge.run());
//! handle.relay("hello from the platform").await.unwrap();
//! # }
//! ```

mod bridge;
mod config;
mod error;
mod platform;

pub use bridge::{Bridge, BridgeHandle};
pub use config::BridgeConfig;
pub use error::BridgeError;
pub use platform::{PlatformAdapter, PlatformError};

// Re-export the pieces adapter implementors and embedders need.
pub use modbridge_link::{LinkError, LinkEvent};
pub use modbridge_protocol::{Frame, ProtocolError};
pub use modbridge_transport::{TransportError, WebSocketConnector};
