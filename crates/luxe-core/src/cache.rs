//! Time-to-live bookkeeping for cached collections.

use std::time::{Duration, Instant};

use crate::time::Clock;

/// Remembers when a collection was last fetched and for how long that
/// fetch counts as fresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchStamp {
    ttl: Duration,
    last_fetched_at: Option<Instant>,
}

impl FetchStamp {
    /// Creates an empty stamp; nothing is fresh until [`mark`](Self::mark).
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            last_fetched_at: None,
        }
    }

    /// Freshness window.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Time of the last successful fetch.
    #[must_use]
    pub const fn last_fetched_at(&self) -> Option<Instant> {
        self.last_fetched_at
    }

    /// True while `now - last_fetched_at < ttl`.
    #[must_use]
    pub fn is_fresh(&self, clock: &dyn Clock) -> bool {
        self.last_fetched_at
            .is_some_and(|at| !clock.has_elapsed(at, self.ttl))
    }

    /// Records a successful fetch at the clock's current time.
    pub fn mark(&mut self, clock: &dyn Clock) {
        self.last_fetched_at = Some(clock.now());
    }

    /// Forgets the last fetch.
    pub fn clear(&mut self) {
        self.last_fetched_at = None;
    }
}

/// A client-side copy of a server-owned collection.
#[derive(Debug, Clone)]
pub struct Cached<C> {
    collection: C,
    stamp: FetchStamp,
    in_flight: usize,
}

impl<C: Default> Cached<C> {
    /// Creates an empty, never-fetched cache.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            collection: C::default(),
            stamp: FetchStamp::new(ttl),
            in_flight: 0,
        }
    }

    /// The cached collection.
    #[must_use]
    pub const fn collection(&self) -> &C {
        &self.collection
    }

    /// Fetch bookkeeping.
    #[must_use]
    pub const fn stamp(&self) -> &FetchStamp {
        &self.stamp
    }

    /// True while at least one fetch is in flight.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    /// Replaces the collection wholesale. The fetch stamp is untouched.
    pub fn replace(&mut self, collection: C) {
        self.collection = collection;
    }

    /// Replaces the collection with a fetch result and stamps it.
    pub fn refresh(&mut self, collection: C, clock: &dyn Clock) {
        self.collection = collection;
        self.stamp.mark(clock);
    }

    /// Empties the collection and forgets the last fetch.
    ///
    /// In-flight fetches keep counting until they complete.
    pub fn reset(&mut self) {
        self.collection = C::default();
        self.stamp.clear();
    }

    /// Marks a fetch as started.
    pub const fn begin_fetch(&mut self) {
        self.in_flight += 1;
    }

    /// Marks a fetch as finished, successful or not.
    pub const fn end_fetch(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }
}
