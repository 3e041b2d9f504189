//! In-memory sink that records everything it receives.
//!
//! Used by the test suite to assert on the exact sequence of published
//! snapshots and warnings; also handy for embedders that want to collect
//! results instead of streaming them.

use crate::data::DirRecord;
use crate::sink::{ResultSink, WarningSink};
use parking_lot::Mutex;

/// Captures published snapshots and warnings in arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: Mutex<Vec<Vec<DirRecord>>>,
    warnings: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every snapshot published so far, oldest first.
    pub fn snapshots(&self) -> Vec<Vec<DirRecord>> {
        self.snapshots.lock().clone()
    }

    /// Every warning received so far, oldest first.
    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().clone()
    }
}

impl ResultSink for MemorySink {
    fn publish(&self, ranked: &[DirRecord]) {
        self.snapshots.lock().push(ranked.to_vec());
    }
}

impl WarningSink for MemorySink {
    fn warn(&self, message: &str) {
        self.warnings.lock().push(message.to_string());
    }
}
