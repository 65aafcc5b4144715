//! Saturating retry-delay sequencer.

use std::time::Duration;

/// The fixed reconnect schedule, in seconds.
///
/// The cursor saturates at the last entry — repeated failures keep
/// retrying once a minute, never faster and never slower.
pub const RETRY_SCHEDULE: [u64; 6] = [2, 5, 10, 20, 30, 60];

/// Produces the next retry delay from [`RETRY_SCHEDULE`].
///
/// The only state is a cursor into the schedule. It advances on each
/// delay handed out and resets to the start when a connection attempt
/// succeeds.
#[derive(Debug, Clone, Default)]
pub struct Backoff {
    cursor: usize,
}

impl Backoff {
    /// Creates a sequencer positioned at the start of the schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the delay for the current position, then advances the
    /// cursor. The cursor never moves past the last schedule entry.
    pub fn next_delay(&mut self) -> Duration {
        let delay = Duration::from_secs(RETRY_SCHEDULE[self.cursor]);
        if self.cursor != RETRY_SCHEDULE.len() - 1 {
            self.cursor += 1;
        }
        delay
    }

    /// Resets the cursor to the start of the schedule.
    ///
    /// Called on every successful connection, so the first delay after
    /// the next loss is the schedule's shortest.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_follow_schedule_and_saturate() {
        let mut backoff = Backoff::new();
        let mut delays = Vec::new();
        for _ in 0..9 {
            delays.push(backoff.next_delay().as_secs());
        }
        assert_eq!(delays, [2, 5, 10, 20, 30, 60, 60, 60, 60]);
    }

    #[test]
    fn test_reset_returns_to_shortest_delay() {
        let mut backoff = Backoff::new();
        for _ in 0..4 {
            backoff.next_delay();
        }
        backoff.reset();
        assert_eq!(backoff.next_delay(), Duration::from_secs(2));
        assert_eq!(backoff.next_delay(), Duration::from_secs(5));
    }

    #[test]
    fn test_reset_at_saturation() {
        let mut backoff = Backoff::new();
        for _ in 0..20 {
            backoff.next_delay();
        }
        assert_eq!(backoff.next_delay(), Duration::from_secs(60));
        backoff.reset();
        assert_eq!(backoff.next_delay(), Duration::from_secs(2));
    }
}
