//! Bridge configuration.

/// Configuration for a [`Bridge`](crate::Bridge) instance.
///
/// Credentials and channel identity belong to the platform adapter, not
/// here — this only configures the relay side and the wording of status
/// messages.
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// WebSocket URL of the local relay.
    pub relay_url: String,

    /// Human-readable name of the relay network, used in the status
    /// messages posted to the platform.
    pub relay_name: String,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            relay_url: "ws://127.0.0.1:4422/".to_string(),
            relay_name: "the relay".to_string(),
        }
    }
}

impl BridgeConfig {
    /// Status line posted when the relay link comes up.
    pub fn connected_status(&self) -> String {
        format!("Connected to {}.", self.relay_name)
    }

    /// Status line posted when an announced relay link is lost.
    pub fn disconnected_status(&self) -> String {
        format!("Disconnected from {}.", self.relay_name)
    }

    /// Status line posted on explicit bridge shutdown.
    pub fn shutdown_status(&self) -> String {
        format!("{} bridge is shutting down.", self.relay_name)
    }
}
