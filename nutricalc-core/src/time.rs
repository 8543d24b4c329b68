//! Clock abstraction for generated identifiers
//!
//! The engine itself is timeless. Only id generation (custom fertilizers,
//! freshly added water sources) needs "now", so it takes the clock as a
//! parameter:
//! - System clock (when `std` is available)
//! - Fixed clock (tests, reproducible imports)
//! - Mock clock that advances on every read (uniqueness tests)

use core::cell::Cell;

/// Timestamp in milliseconds since the Unix epoch
pub type Timestamp = u64;

/// Source of time for id generation
pub trait TimeSource {
    /// Get current timestamp in milliseconds
    fn now(&self) -> Timestamp;

    /// Check if this source provides wall clock time
    fn is_wall_clock(&self) -> bool;
}

/// System time source (requires std)
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTime;

#[cfg(feature = "std")]
impl TimeSource for SystemTime {
    fn now(&self) -> Timestamp {
        use std::time::{SystemTime as StdSystemTime, UNIX_EPOCH};

        StdSystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as Timestamp
    }

    fn is_wall_clock(&self) -> bool {
        true
    }
}

/// Fixed time source for testing
#[derive(Debug, Clone)]
pub struct FixedTime {
    timestamp: Timestamp,
}

impl FixedTime {
    /// Clock frozen at `timestamp`
    pub fn new(timestamp: Timestamp) -> Self {
        Self { timestamp }
    }

    /// Move the clock to `timestamp`
    pub fn set(&mut self, timestamp: Timestamp) {
        self.timestamp = timestamp;
    }

    /// Move the clock forward
    pub fn advance(&mut self, ms: u64) {
        self.timestamp += ms;
    }
}

impl TimeSource for FixedTime {
    fn now(&self) -> Timestamp {
        self.timestamp
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

/// Clock that steps forward by a fixed amount after every read
#[derive(Debug, Clone)]
pub struct MockTimeSource {
    next: Cell<Timestamp>,
    step_ms: u64,
}

impl MockTimeSource {
    /// Starts at `start`, advancing 1 ms per read
    pub fn new(start: Timestamp) -> Self {
        Self::with_step(start, 1)
    }

    /// Starts at `start`, advancing `step_ms` per read
    pub fn with_step(start: Timestamp, step_ms: u64) -> Self {
        Self {
            next: Cell::new(start),
            step_ms,
        }
    }
}

impl TimeSource for MockTimeSource {
    fn now(&self) -> Timestamp {
        let current = self.next.get();
        self.next.set(current.saturating_add(self.step_ms));
        current
    }

    fn is_wall_clock(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_time_advances() {
        let mut time = FixedTime::new(1000);
        assert_eq!(time.now(), 1000);

        time.advance(500);
        assert_eq!(time.now(), 1500);
        assert_eq!(time.now(), 1500);
    }

    #[test]
    fn mock_time_steps_per_read() {
        let time = MockTimeSource::with_step(10, 5);
        assert_eq!(time.now(), 10);
        assert_eq!(time.now(), 15);
        assert_eq!(time.now(), 20);
    }

    #[cfg(feature = "std")]
    #[test]
    fn system_time_is_wall_clock() {
        let time = SystemTime;
        assert!(time.is_wall_clock());
        assert!(time.now() > 1_600_000_000_000);
    }
}
