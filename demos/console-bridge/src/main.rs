//! Console demo for Modbridge.
//!
//! Bridges a local game-mod relay to your terminal: relayed chat is
//! printed to stdout, and lines typed on stdin are relayed to the mod.
//! Stands in for a real platform adapter (Discord, Matrix, ...) so the
//! whole stack can be exercised without platform credentials.
//!
//! Configuration comes from the environment:
//! - `MODBRIDGE_RELAY_URL`  — relay endpoint (default `ws://127.0.0.1:4422/`)
//! - `MODBRIDGE_RELAY_NAME` — name used in status lines (default `the relay`)
//!
//! Ctrl-C shuts the bridge down cleanly.

use modbridge::{
    Bridge, BridgeConfig, PlatformAdapter, PlatformError, WebSocketConnector,
};
use tokio::io::{AsyncBufReadExt, BufReader};

/// Platform adapter that writes to the terminal.
struct ConsolePlatform;

impl PlatformAdapter for ConsolePlatform {
    async fn post_chat(
        &mut self,
        display_name: &str,
        content: &str,
    ) -> Result<(), PlatformError> {
        println!("<{display_name}> {content}");
        Ok(())
    }

    async fn post_status(&mut self, text: &str) -> Result<(), PlatformError> {
        println!("* {text}");
        Ok(())
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let config = BridgeConfig {
        relay_url: env_or("MODBRIDGE_RELAY_URL", "ws://127.0.0.1:4422/"),
        relay_name: env_or("MODBRIDGE_RELAY_NAME", "the relay"),
    };

    let connector = WebSocketConnector::new(&config.relay_url);
    let (bridge, handle) = Bridge::new(config, connector, ConsolePlatform);

    let bridge_task = tokio::spawn(bridge.run());

    // Feed stdin lines into the bridge's outbound path.
    let stdin_handle = handle.clone();
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if line.is_empty() {
                continue;
            }
            if stdin_handle.relay(line).await.is_err() {
                break;
            }
        }
    });

    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
    tracing::info!("shutting down");
    handle.shutdown().await;

    match bridge_task.await {
        Ok(Ok(())) => {}
        Ok(Err(e)) => tracing::error!(error = %e, "bridge exited with error"),
        Err(e) => tracing::error!(error = %e, "bridge task panicked"),
    }
}
