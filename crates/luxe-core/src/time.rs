//! Time source for cache freshness checks.
//!
//! Stores never call `Instant::now()` directly; they ask a [`Clock`], so
//! TTL windows can be driven deterministically in tests.
//!
//! # Example
//!
//! ```
//! use luxe_core::time::{Clock, MockClock};
//! use std::time::Duration;
//!
//! let clock = MockClock::new();
//! let fetched_at = clock.now();
//!
//! clock.advance(Duration::from_secs(31));
//! assert!(clock.has_elapsed(fetched_at, Duration::from_secs(30)));
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// Abstraction over monotonic time.
///
/// Production code uses [`SystemClock`]; tests use [`MockClock`].
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Returns the elapsed time since the given instant.
    ///
    /// Saturates to zero if `since` lies in the future.
    fn elapsed(&self, since: Instant) -> Duration {
        self.now().saturating_duration_since(since)
    }

    /// Checks if a duration has elapsed since the given instant.
    fn has_elapsed(&self, since: Instant, duration: Duration) -> bool {
        self.elapsed(since) >= duration
    }
}

/// A clock shared between a store and whoever drives it.
pub type SharedClock = Arc<dyn Clock>;

/// Clock backed by `std::time::Instant`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SystemClock {
    /// Returns the system clock as a [`SharedClock`].
    #[must_use]
    pub fn shared() -> SharedClock {
        Arc::new(Self)
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Manually advanced clock for tests.
///
/// Starts at the instant it was created and only moves when told to.
#[derive(Debug)]
pub struct MockClock {
    base: Instant,
    offset_nanos: AtomicU64,
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MockClock {
    /// Creates a mock clock frozen at the current time.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            offset_nanos: AtomicU64::new(0),
        }
    }

    /// Creates a mock clock that can be handed to a store and kept for
    /// advancing.
    #[must_use]
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Moves the clock forward.
    #[allow(clippy::cast_possible_truncation)] // u64 nanos cover ~584 years
    pub fn advance(&self, duration: Duration) {
        let nanos = duration.as_nanos() as u64;
        self.offset_nanos.fetch_add(nanos, Ordering::SeqCst);
    }

    /// Sets the clock to a specific offset from its creation time.
    #[allow(clippy::cast_possible_truncation)] // u64 nanos cover ~584 years
    pub fn set_offset(&self, offset: Duration) {
        let nanos = offset.as_nanos() as u64;
        self.offset_nanos.store(nanos, Ordering::SeqCst);
    }

    /// Moves the clock back to its creation time.
    pub fn reset(&self) {
        self.offset_nanos.store(0, Ordering::SeqCst);
    }

    /// Returns the current offset from creation time.
    #[must_use]
    pub fn offset(&self) -> Duration {
        Duration::from_nanos(self.offset_nanos.load(Ordering::SeqCst))
    }
}

impl Clock for MockClock {
    fn now(&self) -> Instant {
        self.base + self.offset()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }

    #[test]
    fn test_mock_clock_advance() {
        let clock = MockClock::new();
        let start = clock.now();

        clock.advance(Duration::from_secs(10));
        assert_eq!(clock.elapsed(start), Duration::from_secs(10));

        clock.advance(Duration::from_millis(500));
        assert_eq!(clock.elapsed(start), Duration::from_millis(10_500));
    }

    #[test]
    fn test_mock_clock_set_offset() {
        let clock = MockClock::new();
        let start = clock.now();

        clock.set_offset(Duration::from_secs(100));
        assert_eq!(clock.elapsed(start), Duration::from_secs(100));
        assert_eq!(clock.offset(), Duration::from_secs(100));

        clock.reset();
        assert_eq!(clock.now(), start);
    }

    #[test]
    fn test_elapsed_saturates_for_future_instants() {
        let clock = MockClock::new();
        clock.advance(Duration::from_secs(5));
        let later = clock.now();
        clock.set_offset(Duration::ZERO);

        assert_eq!(clock.elapsed(later), Duration::ZERO);
    }

    #[test]
    fn test_has_elapsed_boundary() {
        let clock = MockClock::new();
        let start = clock.now();

        clock.advance(Duration::from_secs(29));
        assert!(!clock.has_elapsed(start, Duration::from_secs(30)));

        clock.advance(Duration::from_secs(1));
        assert!(clock.has_elapsed(start, Duration::from_secs(30)));
    }

    #[test]
    fn test_shared_mock_clock_as_dyn() {
        let mock = MockClock::shared();
        let shared: SharedClock = mock.clone();

        let start = shared.now();
        mock.advance(Duration::from_secs(7));

        assert_eq!(shared.elapsed(start), Duration::from_secs(7));
    }
}
