//! Core data structures for ranked directory results.
//!
//! This module defines [`DirRecord`], the entity representing one directory's
//! path and aggregated size together with the total order used for ranking,
//! and [`RankOrder`], which selects whether the largest or the smallest
//! qualifying directories are tracked.

use crate::format::format_size_grouped;
use std::cmp::Ordering;
use std::fmt;
use std::path::PathBuf;

/// One directory's path and the byte size attributed to it for ranking.
///
/// The attributed size is not always the true recursive size: once a
/// descendant has qualified and been reported, its bytes are excluded from
/// every ancestor (see [`crate::scan`]). Records are immutable after
/// construction; the tracker stores or discards them, never mutates them.
#[derive(Debug, Clone)]
pub struct DirRecord {
    path: PathBuf,
    size: u64,
}

impl DirRecord {
    pub fn new(path: PathBuf, size: u64) -> Self {
        DirRecord { path, size }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// The fixed-width, thousands-separated rendering of `size`.
    ///
    /// This string is displayed to the user and also participates in the
    /// ranking tie-break, so equal-sized records order deterministically.
    pub fn size_display(&self) -> String {
        format_size_grouped(self.size)
    }
}

impl fmt::Display for DirRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.size_display(), self.path.display())
    }
}

impl PartialEq for DirRecord {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DirRecord {}

impl PartialOrd for DirRecord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DirRecord {
    /// Base comparison: ascending by size, ties broken ascending by the
    /// formatted `"size, path"` string. Fully deterministic so that eviction
    /// decisions are reproducible across runs even on size ties.
    fn cmp(&self, other: &Self) -> Ordering {
        self.size
            .cmp(&other.size)
            .then_with(|| self.to_string().cmp(&other.to_string()))
    }
}

/// Whether the tracker keeps the largest or the smallest qualifying
/// directories.
///
/// # Variants
/// * `Largest` - Rank bigger directories first (the normal mode)
/// * `Smallest` - Rank smaller directories first
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum, Debug, Default)]
pub enum RankOrder {
    #[default]
    Largest,
    Smallest,
}

impl RankOrder {
    /// Compares two records under this order; `Less` means `a` ranks ahead
    /// of `b` (appears earlier in the tracked list).
    ///
    /// Only the size key flips between the two orders. The formatted-string
    /// tie-break stays ascending in both, so equal-sized records always
    /// list in the same deterministic order.
    pub fn compare(&self, a: &DirRecord, b: &DirRecord) -> Ordering {
        match self {
            RankOrder::Largest => b
                .size()
                .cmp(&a.size())
                .then_with(|| a.to_string().cmp(&b.to_string())),
            RankOrder::Smallest => a.cmp(b),
        }
    }
}
