//! FIFO echo suppression for locally-originated messages.

use std::collections::VecDeque;

/// Tracks messages the bridge sent to the relay and suppresses exactly
/// one matching inbound echo per send.
///
/// The relay re-delivers every message it accepts, including the ones the
/// bridge itself just sent. Without suppression each platform message
/// would bounce straight back into the platform as a duplicate.
///
/// Matching is strict FIFO against the queue head only, byte-for-byte.
/// This assumes echoes come back in send order with exactly one echo per
/// send; out-of-order echoes or identical messages sent in quick
/// succession can desynchronize the queue. That is deliberate — the
/// guard is best-effort loop prevention, not deduplication.
#[derive(Debug, Default)]
pub struct EchoGuard {
    pending: VecDeque<String>,
}

impl EchoGuard {
    /// Creates an empty guard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a locally-originated message about to be sent to the relay.
    ///
    /// Call exactly once per outgoing message.
    pub fn record_sent(&mut self, content: impl Into<String>) {
        self.pending.push_back(content.into());
    }

    /// Checks an inbound chat message against the queue head.
    ///
    /// Returns `true` if it matched and was consumed — the frame is our
    /// own echo and must be dropped. Returns `false` otherwise — the
    /// frame is a genuine inbound message to forward.
    pub fn try_consume_echo(&mut self, content: &str) -> bool {
        if self.pending.front().is_some_and(|head| head == content) {
            self.pending.pop_front();
            true
        } else {
            false
        }
    }

    /// Number of sends still awaiting their echo.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recorded_message_consumes_its_echo() {
        let mut guard = EchoGuard::new();
        guard.record_sent("hi");
        assert!(guard.try_consume_echo("hi"));
        assert_eq!(guard.pending(), 0);
    }

    #[test]
    fn test_unrelated_message_is_not_consumed() {
        let mut guard = EchoGuard::new();
        assert!(!guard.try_consume_echo("bye"));

        guard.record_sent("hi");
        assert!(!guard.try_consume_echo("bye"));
        assert_eq!(guard.pending(), 1);
    }

    #[test]
    fn test_one_echo_consumed_per_send() {
        // Send "hello" once, then receive "hello" twice: the first is our
        // echo, the second is a genuine duplicate typed by someone else.
        let mut guard = EchoGuard::new();
        guard.record_sent("hello");
        assert!(guard.try_consume_echo("hello"));
        assert!(!guard.try_consume_echo("hello"));
    }

    #[test]
    fn test_head_only_matching_is_strict_fifo() {
        let mut guard = EchoGuard::new();
        guard.record_sent("first");
        guard.record_sent("second");

        // "second" is queued but not at the head, so it is not consumed.
        assert!(!guard.try_consume_echo("second"));
        assert!(guard.try_consume_echo("first"));
        assert!(guard.try_consume_echo("second"));
        assert_eq!(guard.pending(), 0);
    }

    #[test]
    fn test_equality_is_exact() {
        let mut guard = EchoGuard::new();
        guard.record_sent("hi ");
        assert!(!guard.try_consume_echo("hi"));
        assert!(guard.try_consume_echo("hi "));
    }
}
