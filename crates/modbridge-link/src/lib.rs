//! Resilient relay link for Modbridge.
//!
//! This crate owns the one piece of the bridge with real state: the
//! connection to the game-mod relay. [`BridgeLink`] drives
//! connect → receive → disconnect → scheduled-retry as a single-owner
//! state machine, [`Backoff`] produces the retry delays, and
//! [`EchoGuard`] suppresses the relay's echo of messages the bridge
//! itself just sent.
//!
//! # Integration
//!
//! The link is designed to sit inside the owner's `tokio::select!` loop:
//!
//! ```ignore
//! loop {
//!     tokio::select! {
//!         event = link.next_event() => match event {
//!             Some(LinkEvent::Frame(frame)) => { /* forward to platform */ }
//!             Some(LinkEvent::Up) | Some(LinkEvent::Down) => { /* status */ }
//!             None => break, // link was closed
//!         },
//!         Some(text) = outbound.recv() => {
//!             link.send(&Frame::outgoing(text)).await?;
//!         }
//!     }
//! }
//! ```
//!
//! All state transitions happen on that single logical sequence of events,
//! so nothing here needs a lock.

mod backoff;
mod echo;
mod error;
mod link;

pub use backoff::{Backoff, RETRY_SCHEDULE};
pub use echo::EchoGuard;
pub use error::LinkError;
pub use link::{BridgeLink, LinkEvent, LinkState};
