//! Time source and timestamp-derived id allocation.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, SubsecRound, TimeZone, Utc};

/// Source of "now" for ids and outfit timestamps.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall clock, truncated to milliseconds.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now().trunc_subsecs(3)
    }
}

/// A clock that only moves when told to. Intended for tests.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn advance_millis(&self, delta: i64) {
        self.millis.fetch_add(delta, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let millis = self.millis.load(Ordering::SeqCst);
        Utc.timestamp_millis_opt(millis)
            .single()
            .unwrap_or_default()
    }
}

/// Allocates ids from wall-clock milliseconds.
///
/// Ids are strictly increasing: when the clock has not moved past the last
/// issued (or observed) id, the next id is `last + 1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: i64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts after the largest of the given ids.
    pub fn after<I: IntoIterator<Item = i64>>(ids: I) -> Self {
        let mut sequence = Self::new();
        for id in ids {
            sequence.observe(id);
        }
        sequence
    }

    /// Records an id that exists already so it is never issued again.
    pub fn observe(&mut self, id: i64) {
        self.last = self.last.max(id);
    }

    pub fn next(&mut self, now: DateTime<Utc>) -> i64 {
        let id = now.timestamp_millis().max(self.last.saturating_add(1));
        self.last = id;
        id
    }

    pub fn last(&self) -> i64 {
        self.last
    }
}
