//! Scan orchestration: wires the size filter and the top-K tracker into the
//! tree walker's per-directory visit function.
//!
//! This module owns the aggregation policy:
//! - A directory's local size is the sum of its children's aggregates plus
//!   the logical length of its own files
//! - A directory whose local size strictly exceeds the filter threshold is
//!   offered to the [`TopTracker`] and contributes **zero** to its parent
//! - Everything else propagates its local size upward unchanged
//!
//! The zeroing in the second rule is deliberate: once a subtree's full size
//! has been reported as a qualifying big directory, that byte mass must not
//! also inflate an ancestor's total and make the ancestor qualify purely on
//! the back of an already-reported child. The scan reports disjoint,
//! non-double-counted big subtrees rather than every ancestor of a big
//! subtree.
//!
//! The main entry point is [`find_big_directories`].

use crate::cancel::CancelFlag;
use crate::data::{DirRecord, RankOrder};
use crate::sink::{ResultSink, WarningSink};
use crate::tracker::TopTracker;
use crate::walk::walk_tree;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Caller-supplied parameters for one scan, immutable for its duration.
///
/// # Fields
/// * `filter` - Threshold in bytes; only directories whose attributed size
///   strictly exceeds it qualify for tracking
/// * `top` - Capacity K of the ranked list; must be at least 1
/// * `order` - Whether the largest or smallest qualifying directories are
///   kept
#[derive(Debug, Clone)]
pub struct ScanConfig {
    pub filter: u64,
    pub top: usize,
    pub order: RankOrder,
}

impl Default for ScanConfig {
    /// The classic interactive defaults: 10 MiB filter, top 10, largest
    /// first.
    fn default() -> Self {
        ScanConfig {
            filter: 10 * 1024 * 1024,
            top: 10,
            order: RankOrder::Largest,
        }
    }
}

/// Scans `root` and live-reports the top qualifying directories.
///
/// Snapshots stream to `sink` as the ranked list evolves; tolerated
/// failures go to `warnings`; `cancel` may be triggered at any time from
/// another thread, after which the scan unwinds cleanly and the last
/// published snapshot stands as a valid partial result.
///
/// # Arguments
/// * `root` - Directory to scan; a non-traversable root degrades to zero
///   entries rather than failing
/// * `config` - Filter threshold, capacity and rank order
/// * `sink` - Receives every published snapshot
/// * `warnings` - Receives tolerated enumeration/stat failure messages
/// * `cancel` - Shared cancellation signal
///
/// # Returns
/// * `Result<Vec<DirRecord>>` - The final ranked list (best first); empty if
///   nothing qualified or the scan was cancelled before anything did
///
/// # Errors
/// Only on contract violations, currently `config.top == 0`. Per-node
/// filesystem failures never surface here.
pub fn find_big_directories(
    root: &Path,
    config: &ScanConfig,
    sink: Arc<dyn ResultSink>,
    warnings: &dyn WarningSink,
    cancel: &CancelFlag,
) -> Result<Vec<DirRecord>> {
    let tracker = TopTracker::new(config.top, config.order, sink)?;

    let visit = |dir: &Path, children: Vec<Option<u64>>, files: Vec<PathBuf>| -> u64 {
        let mut local_size: u64 = children.iter().map(|child| child.unwrap_or(0)).sum();

        for file in &files {
            local_size += file_size(file, warnings);
        }

        if local_size > config.filter {
            tracker.offer(DirRecord::new(dir.to_path_buf(), local_size));
            // Reported subtrees contribute nothing to their ancestors.
            0
        } else {
            local_size
        }
    };

    // The root's own aggregate is of no interest; only the tracker's
    // accumulated result matters.
    let _ = walk_tree(root, &visit, cancel, warnings);

    Ok(tracker.into_ranked())
}

/// Logical length of one file; a failed lookup degrades to zero.
fn file_size(path: &Path, warnings: &dyn WarningSink) -> u64 {
    match fs::symlink_metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(err) => {
            warnings.warn(&format!("failed to stat {}: {}", path.display(), err));
            0
        }
    }
}
