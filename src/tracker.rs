//! Bounded, concurrency-safe top-K tracking of directory records.
//!
//! This module provides [`TopTracker`], the single piece of cross-task
//! shared mutable state in a scan. Workers from every subtree offer records
//! concurrently; the tracker keeps the best K under the configured
//! [`RankOrder`] and publishes a snapshot to the [`ResultSink`] whenever the
//! ranked list changes.
//!
//! All mutation happens under one `parking_lot::Mutex` per tracker. That is
//! deliberate: mutations are O(K) and rare relative to filesystem I/O, and a
//! single critical section gives the sink a strictly linearized sequence of
//! snapshots (a snapshot is published before the lock that produced it is
//! released, so two concurrent changes can never be observed out of order).

use crate::data::{DirRecord, RankOrder};
use crate::sink::ResultSink;
use anyhow::{Result, ensure};
use parking_lot::Mutex;
use std::sync::Arc;

struct TrackerState {
    /// Always sorted under the configured order, never longer than capacity.
    ranked: Vec<DirRecord>,
    /// How many records have ever been offered, accepted or not.
    seen: u64,
}

/// Holds the current best K records in ranked order.
///
/// Shared by reference across all scan workers; see the module docs for the
/// locking and publication contract.
pub struct TopTracker {
    capacity: usize,
    order: RankOrder,
    sink: Arc<dyn ResultSink>,
    state: Mutex<TrackerState>,
}

impl TopTracker {
    /// Creates a tracker bounded to `capacity` entries.
    ///
    /// # Errors
    /// Fails if `capacity` is zero. That is a caller contract violation,
    /// not a tolerable condition.
    pub fn new(capacity: usize, order: RankOrder, sink: Arc<dyn ResultSink>) -> Result<Self> {
        ensure!(capacity >= 1, "tracker capacity must be at least 1");
        Ok(TopTracker {
            capacity,
            order,
            sink,
            state: Mutex::new(TrackerState {
                ranked: Vec::with_capacity(capacity),
                seen: 0,
            }),
        })
    }

    /// Offers a record for inclusion in the ranked list.
    ///
    /// Thread-safe and infallible: a record that does not beat the current
    /// worst tracked entry is silently discarded. Returns whether the ranked
    /// list changed. On change, the new snapshot is published to the sink
    /// before the internal lock is released.
    ///
    /// Records comparing exactly equal to a tracked entry are inserted
    /// immediately before it. The formatted-string tie-break in the record
    /// order means compare-equal only occurs for identical (size, path)
    /// pairs, so the insert-before-equal policy just keeps duplicate offers
    /// deterministic.
    pub fn offer(&self, record: DirRecord) -> bool {
        let mut state = self.state.lock();
        state.seen += 1;

        let position = state
            .ranked
            .binary_search_by(|tracked| self.order.compare(tracked, &record))
            .unwrap_or_else(|insertion_point| insertion_point);

        // Past the last tracked slot: did not beat the current worst.
        if position >= self.capacity {
            return false;
        }

        state.ranked.insert(position, record);
        state.ranked.truncate(self.capacity);

        self.sink.publish(&state.ranked);
        true
    }

    /// Number of records offered so far, accepted or not.
    pub fn seen(&self) -> u64 {
        self.state.lock().seen
    }

    /// Current ranked list, best first. Clones under the lock.
    pub fn ranked(&self) -> Vec<DirRecord> {
        self.state.lock().ranked.clone()
    }

    /// Consumes the tracker and yields the final ranked list.
    pub fn into_ranked(self) -> Vec<DirRecord> {
        self.state.into_inner().ranked
    }
}
