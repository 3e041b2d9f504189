//! External collaborator interfaces for scan results and diagnostics.
//!
//! The engine itself draws nothing: live output goes through a
//! [`ResultSink`] and tolerated failures through a [`WarningSink`].
//! Implementations live in [`crate::output`]; callers embedding the scanner
//! supply their own.

use crate::data::DirRecord;

/// Receives ordered snapshots of the current ranked list.
///
/// `publish` is invoked every time the ranked top-K changes, while the
/// tracker's lock is still held, so implementations see a strictly
/// linearized sequence of snapshots. Each call is a full authoritative
/// replacement of the previously published list (best first, at most K),
/// never a delta; each record yields its `(formatted size, path)` pair via
/// [`DirRecord::size_display`] and [`DirRecord::path`].
///
/// Implementations must be fast and non-blocking: `publish` runs inside the
/// single critical section that serializes all offers scan-wide.
pub trait ResultSink: Send + Sync {
    fn publish(&self, ranked: &[DirRecord]);
}

/// Receives messages about tolerated enumeration and file-stat failures.
///
/// Purely informational; never affects control flow.
pub trait WarningSink: Send + Sync {
    fn warn(&self, message: &str);
}

/// A sink that drops everything, for callers that only want the final list.
#[derive(Debug, Default)]
pub struct NullSink;

impl ResultSink for NullSink {
    fn publish(&self, _ranked: &[DirRecord]) {}
}

impl WarningSink for NullSink {
    fn warn(&self, _message: &str) {}
}
